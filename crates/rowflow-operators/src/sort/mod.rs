//! In-memory sort.
//!
//! `Sort` is the one materializing operator: `open` drains the child into a
//! buffer and orders it, `next` serves from that buffer. Reopening drops the
//! previous buffer (releasing any owned rows) before draining again.

pub mod compare;

use rowflow_core::config::EngineConfig;
use rowflow_core::selector::ColumnSelector;
use rowflow_core::RowHandle;

use crate::trace;
use crate::traits::{BoxedOperator, OpError, Operator};

pub use compare::RowCompare;

/// Upper bound on rows pre-allocated from a capacity hint. Larger inputs
/// still sort; the buffer just grows past this as rows arrive.
const MAX_PREALLOC_ROWS: usize = 1 << 16;

pub struct Sort<'a> {
    input: BoxedOperator<'a>,
    compare: RowCompare,
    capacity_hint: Option<usize>,
    sorted: std::vec::IntoIter<RowHandle<'a>>,
}

impl<'a> Sort<'a> {
    /// Orders by `sort_columns` lexicographically. Ties keep input order.
    pub fn new(input: BoxedOperator<'a>, sort_columns: &[usize]) -> Result<Self, OpError> {
        let columns = ColumnSelector::new(input.n_columns(), sort_columns)?;
        Ok(Self {
            input,
            compare: RowCompare::new(columns.as_slice()),
            capacity_hint: None,
            sorted: Vec::new().into_iter(),
        })
    }

    /// Pre-size the buffer for the expected number of input rows.
    pub fn with_capacity_hint(mut self, hint: Option<usize>) -> Self {
        self.capacity_hint = hint;
        self
    }

    pub fn configure(self, cfg: &EngineConfig) -> Self {
        self.with_capacity_hint(cfg.sort_capacity_hint)
    }

    /// Rows still waiting in the buffer.
    pub fn buffered(&self) -> usize {
        self.sorted.len()
    }
}

impl<'a> Operator<'a> for Sort<'a> {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn n_columns(&self) -> usize {
        self.input.n_columns()
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.sorted = Vec::new().into_iter();
        self.input.open();

        let prealloc = self.capacity_hint.unwrap_or(0).min(MAX_PREALLOC_ROWS);
        let mut rows = Vec::with_capacity(prealloc);
        while let Some(row) = self.input.next() {
            rows.push(row);
        }
        // `sort_by` is stable.
        let compare = &self.compare;
        rows.sort_by(|a, b| compare.compare(a, b));

        trace::op_rows(self.name(), "materialized", rows.len());
        self.sorted = rows.into_iter();
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        self.sorted.next()
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.input.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::TableIterator;
    use crate::traits::collect_rows;
    use crate::traits::testing::{pairs, OwnedRows};
    use rowflow_core::row;

    #[test]
    fn sorts_by_selected_columns() {
        let table = pairs("t", vec![row![3, "c"], row![1, "z"], row![2, "a"]]);
        let mut sort = Sort::new(Box::new(TableIterator::new(&table)), &[1]).unwrap();
        assert_eq!(
            collect_rows(&mut sort),
            vec![row![2, "a"], row![3, "c"], row![1, "z"]]
        );
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let table = pairs(
            "t",
            vec![row![2, "first"], row![1, "x"], row![2, "second"], row![2, "third"]],
        );
        let mut sort = Sort::new(Box::new(TableIterator::new(&table)), &[0]).unwrap();
        assert_eq!(
            collect_rows(&mut sort),
            vec![
                row![1, "x"],
                row![2, "first"],
                row![2, "second"],
                row![2, "third"]
            ]
        );
    }

    #[test]
    fn nothing_before_open_and_after_exhaustion() {
        let table = pairs("t", vec![row![1, "a"]]);
        let mut sort = Sort::new(Box::new(TableIterator::new(&table)), &[0]).unwrap();
        assert!(sort.next().is_none());
        sort.open();
        assert_eq!(sort.buffered(), 1);
        assert!(sort.next().is_some());
        assert!(sort.next().is_none());
        assert!(sort.next().is_none());
    }

    #[test]
    fn reopen_redrains_and_drops_stale_rows() {
        let child = OwnedRows::new(1, vec![row![3], row![1], row![2]]);
        let opens = child.opens.clone();
        let mut sort = Sort::new(Box::new(child), &[0]).unwrap();

        sort.open();
        assert_eq!(*sort.next().unwrap(), row![1]);
        sort.close();
        sort.open();
        assert_eq!(sort.buffered(), 3);
        assert_eq!(opens.get(), 2);
        assert_eq!(collect_rows(&mut sort), vec![row![1], row![2], row![3]]);
    }

    #[test]
    fn capacity_hint_from_config() {
        let table = pairs("t", vec![row![2, "b"], row![1, "a"]]);
        let cfg = EngineConfig {
            sort_capacity_hint: Some(16),
            ..EngineConfig::default()
        };
        let mut sort = Sort::new(Box::new(TableIterator::new(&table)), &[0])
            .unwrap()
            .configure(&cfg);
        assert_eq!(collect_rows(&mut sort), vec![row![1, "a"], row![2, "b"]]);
    }

    #[test]
    fn oversized_capacity_hint_does_not_overflow() {
        let table = pairs("t", vec![row![2, "b"], row![1, "a"]]);
        let mut sort = Sort::new(Box::new(TableIterator::new(&table)), &[0])
            .unwrap()
            .with_capacity_hint(Some(usize::MAX));
        assert_eq!(collect_rows(&mut sort), vec![row![1, "a"], row![2, "b"]]);
    }

    #[test]
    fn rejects_out_of_range_sort_column() {
        let table = pairs("t", vec![]);
        assert!(Sort::new(Box::new(TableIterator::new(&table)), &[2]).is_err());
    }
}
