//! Unique: drops rows equal to the previously emitted row.
//!
//! Only adjacent duplicates are removed, so the input must already be ordered
//! (typically by a `Sort` below). Rows of different arity never compare equal.

use rowflow_core::RowHandle;

use crate::trace;
use crate::traits::{BoxedOperator, Operator};

pub struct Unique<'a> {
    input: BoxedOperator<'a>,
    /// Copy of the last emitted row. Cloning a borrowed handle only copies
    /// the reference.
    last: Option<RowHandle<'a>>,
    exhausted: bool,
}

impl<'a> Unique<'a> {
    pub fn new(input: BoxedOperator<'a>) -> Self {
        Self {
            input,
            last: None,
            exhausted: false,
        }
    }
}

impl<'a> Operator<'a> for Unique<'a> {
    fn name(&self) -> &'static str {
        "unique"
    }

    fn n_columns(&self) -> usize {
        self.input.n_columns()
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.last = None;
        self.exhausted = false;
        self.input.open();
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        if self.exhausted {
            return None;
        }
        while let Some(row) = self.input.next() {
            if let Some(last) = &self.last {
                if last.same_values(&row) {
                    continue;
                }
            }
            self.last = Some(row.clone());
            return Some(row);
        }
        self.exhausted = true;
        None
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.input.close();
    }
}
