//! Operator trait + common interfaces.
//!
//! Parents drive children through `open` / `next` / `close`. `next` returns
//! `None` at end of stream; that is the only expected runtime signal.
//! Configuration problems are rejected by operator constructors instead.

use rowflow_core::{Row, RowHandle};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("planning error: {0}")]
    Plan(String),

    #[error(transparent)]
    Core(#[from] rowflow_core::Error),
}

/// Trait that all operators must implement.
///
/// `'a` is the lifetime of the tables and indexes that borrowed rows alias.
///
/// Invariants:
/// - `n_columns` is fixed for the operator's lifetime and matches the arity
///   of every row `next` returns.
/// - Once `next` returns `None` it keeps returning `None` until the next
///   `open`.
/// - `close` drops cursor state only; the operator can be opened again.
/// - Not reentrant. Operators are driven by one caller on one thread.
pub trait Operator<'a> {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Arity of the rows this operator produces.
    fn n_columns(&self) -> usize;

    /// Position at the start of the stream. Restarts iteration when called
    /// again.
    fn open(&mut self);

    /// Next row, or `None` once exhausted.
    fn next(&mut self) -> Option<RowHandle<'a>>;

    /// Release the iteration cursor.
    fn close(&mut self);
}

/// A boxed operator for dynamic dispatch; the unit of child ownership.
pub type BoxedOperator<'a> = Box<dyn Operator<'a> + 'a>;

impl<'a, O: Operator<'a> + ?Sized> Operator<'a> for Box<O> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn n_columns(&self) -> usize {
        (**self).n_columns()
    }

    fn open(&mut self) {
        (**self).open()
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Open `op`, drain it, close it, and return owned copies of every row.
pub fn collect_rows<'a, O: Operator<'a> + ?Sized>(op: &mut O) -> Vec<Row> {
    let mut rows = Vec::new();
    op.open();
    while let Some(row) = op.next() {
        rows.push(row.into_owned());
    }
    op.close();
    rows
}
