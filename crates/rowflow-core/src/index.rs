//! Ordered key -> row index.
//!
//! Entries are kept sorted by key (lexicographic `Row::compare`); equal keys
//! keep insertion order, so the index behaves as a stable multimap.

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::row::Row;
use crate::selector::ColumnSelector;
use crate::table::Table;

#[derive(Debug, Clone, Default)]
pub struct Index {
    n_columns: usize,
    entries: Vec<(Row, Row)>,
}

impl Index {
    /// Empty index whose value rows have `n_columns` fields.
    pub fn new(n_columns: usize) -> Self {
        Self {
            n_columns,
            entries: Vec::new(),
        }
    }

    /// Index every row of `table` on `key_columns`; values are the full rows.
    pub fn build(table: &Table, key_columns: &[usize]) -> Result<Self> {
        let selector = ColumnSelector::new(table.n_columns(), key_columns)?;
        if selector.n_selected() == 0 {
            return Err(Error::Schema("index needs at least one key column".into()));
        }
        let mut index = Self::new(table.n_columns());
        for row in table.rows() {
            let key: Row = selector.iter().map(|c| row.at(c).clone()).collect();
            index.insert(key, row.clone())?;
        }
        Ok(index)
    }

    pub fn insert(&mut self, key: Row, value: Row) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Schema("index key must not be empty".into()));
        }
        if value.size() != self.n_columns {
            return Err(Error::Schema(format!(
                "index holds rows of {} columns, got {}",
                self.n_columns,
                value.size()
            )));
        }
        // Insert after every key <= the new one.
        let pos = self
            .entries
            .partition_point(|(k, _)| k.compare(&key) != Ordering::Greater);
        self.entries.insert(pos, (key, value));
        Ok(())
    }

    pub fn entries(&self) -> &[(Row, Row)] {
        &self.entries
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
