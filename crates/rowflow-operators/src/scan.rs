//! Leaf scans over tables and ordered indexes.
//!
//! Both hand out `RowHandle::Borrowed` rows that alias storage; consumers
//! copy values out if they need to keep them.

use std::borrow::Cow;
use std::cmp::Ordering;

use rowflow_core::index::Index;
use rowflow_core::table::Table;
use rowflow_core::{Row, RowHandle};

use crate::trace;
use crate::traits::{OpError, Operator};

/// Full scan of a table in stored order.
pub struct TableIterator<'a> {
    table: &'a Table,
    cursor: usize,
}

impl<'a> TableIterator<'a> {
    /// Positioned at the first row; `open` is only needed to restart.
    pub fn new(table: &'a Table) -> Self {
        Self { table, cursor: 0 }
    }
}

impl<'a> Operator<'a> for TableIterator<'a> {
    fn name(&self) -> &'static str {
        "table_scan"
    }

    fn n_columns(&self) -> usize {
        self.table.n_columns()
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.cursor = 0;
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        let table: &'a Table = self.table;
        let row = table.rows().get(self.cursor)?;
        self.cursor += 1;
        Some(Cow::Borrowed(row))
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.cursor = self.table.len();
    }
}

/// Range scan over an index: yields value rows whose key satisfies
/// `lo <= key <= hi`.
///
/// Only the first key column is compared; multi-column range predicates
/// are out of scope. Entries outside the bound are skipped rather than
/// ending the scan, so the index need not be clustered on the bound.
pub struct IndexScan<'a> {
    index: &'a Index,
    lo: Row,
    hi: Row,
    cursor: usize,
}

impl<'a> IndexScan<'a> {
    /// `hi` defaults to `lo`, which makes the scan an exact-key lookup.
    pub fn new(index: &'a Index, lo: Row, hi: Option<Row>) -> Result<Self, OpError> {
        let hi = hi.unwrap_or_else(|| lo.clone());
        if lo.is_empty() || hi.is_empty() {
            return Err(OpError::Plan("index scan bounds need a key column".into()));
        }
        Ok(Self {
            index,
            lo,
            hi,
            cursor: 0,
        })
    }

    fn in_bounds(&self, key: &Row) -> bool {
        key.compare_at(0, &self.lo, 0) != Ordering::Less
            && key.compare_at(0, &self.hi, 0) != Ordering::Greater
    }
}

impl<'a> Operator<'a> for IndexScan<'a> {
    fn name(&self) -> &'static str {
        "index_scan"
    }

    fn n_columns(&self) -> usize {
        self.index.n_columns()
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.cursor = 0;
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        let index: &'a Index = self.index;
        let entries = index.entries();
        while let Some((key, value)) = entries.get(self.cursor) {
            self.cursor += 1;
            if self.in_bounds(key) {
                return Some(Cow::Borrowed(value));
            }
        }
        None
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.cursor = self.index.len();
    }
}
