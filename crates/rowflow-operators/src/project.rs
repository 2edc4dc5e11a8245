//! Project: reorders/subsets columns into a freshly built row.

use std::borrow::Cow;

use rowflow_core::selector::ColumnSelector;
use rowflow_core::{Row, RowHandle};

use crate::trace;
use crate::traits::{BoxedOperator, OpError, Operator};

pub struct Project<'a> {
    input: BoxedOperator<'a>,
    columns: ColumnSelector,
    exhausted: bool,
}

impl<'a> Project<'a> {
    /// `columns` may repeat or reorder positions of the child's output.
    pub fn new(input: BoxedOperator<'a>, columns: &[usize]) -> Result<Self, OpError> {
        let columns = ColumnSelector::new(input.n_columns(), columns)?;
        Ok(Self {
            input,
            columns,
            exhausted: false,
        })
    }
}

impl<'a> Operator<'a> for Project<'a> {
    fn name(&self) -> &'static str {
        "project"
    }

    fn n_columns(&self) -> usize {
        self.columns.n_selected()
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.exhausted = false;
        self.input.open();
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        if self.exhausted {
            return None;
        }
        let Some(row) = self.input.next() else {
            self.exhausted = true;
            return None;
        };
        let mut projected = Row::with_capacity(self.columns.n_selected());
        for c in self.columns.iter() {
            projected.append(row.at(c).clone());
        }
        Some(Cow::Owned(projected))
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.input.close();
    }
}
