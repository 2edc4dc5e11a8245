//! Select: keeps the child's rows that satisfy a predicate.

use rowflow_core::{Row, RowHandle};

use crate::trace;
use crate::traits::{BoxedOperator, Operator};

/// Caller-supplied row predicate.
pub type RowPredicate<'a> = Box<dyn Fn(&Row) -> bool + 'a>;

pub struct Select<'a> {
    input: BoxedOperator<'a>,
    predicate: RowPredicate<'a>,
    exhausted: bool,
}

impl<'a> Select<'a> {
    pub fn new(input: BoxedOperator<'a>, predicate: impl Fn(&Row) -> bool + 'a) -> Self {
        Self {
            input,
            predicate: Box::new(predicate),
            exhausted: false,
        }
    }
}

impl<'a> Operator<'a> for Select<'a> {
    fn name(&self) -> &'static str {
        "select"
    }

    fn n_columns(&self) -> usize {
        self.input.n_columns()
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
        // Rejected rows are dropped here, which releases owned ones.
        while let Some(row) = self.input.next() {
            if (self.predicate)(&*row) {
                return Some(row);
            }
        }
        self.exhausted = true;
        None
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.input.close();
    }
}
