//! Nested loops equi-join on one column per side.
//!
//! Joined rows hold every left column followed by every right column except
//! the right join column, which duplicates the left one.
//!
//! Two matching strategies (see `JoinMode`):
//! - `Full`: for each right row, rewind the left child and emit every
//!   matching left row. Output is ordered by right row, then left row.
//! - `SingleProbe`: each `next` pulls one right row and advances a shared
//!   left cursor until it matches. The left child is only rewound when it
//!   runs out, so a right row meets at most one left row and left rows
//!   already passed are not revisited for later right rows.

use std::borrow::Cow;
use std::cmp::Ordering;

use rowflow_core::config::{EngineConfig, JoinMode};
use rowflow_core::selector::ColumnSelector;
use rowflow_core::{Row, RowHandle};

use crate::trace;
use crate::traits::{BoxedOperator, OpError, Operator};

pub struct NestedLoopsJoin<'a> {
    left: BoxedOperator<'a>,
    right: BoxedOperator<'a>,
    left_column: usize,
    right_column: usize,
    n_columns: usize,
    mode: JoinMode,
    /// Current left row (`SingleProbe`).
    left_row: Option<RowHandle<'a>>,
    /// Right row still being matched against the left side (`Full`).
    right_row: Option<RowHandle<'a>>,
    /// Left child has been pulled since it was last opened.
    left_dirty: bool,
    exhausted: bool,
}

impl<'a> NestedLoopsJoin<'a> {
    /// Both sides must name exactly one join column, valid for their arity.
    pub fn new(
        left: BoxedOperator<'a>,
        left_join_columns: &[usize],
        right: BoxedOperator<'a>,
        right_join_columns: &[usize],
    ) -> Result<Self, OpError> {
        let left_cols = ColumnSelector::new(left.n_columns(), left_join_columns)?;
        let right_cols = ColumnSelector::new(right.n_columns(), right_join_columns)?;
        if left_cols.n_selected() != right_cols.n_selected() {
            return Err(OpError::Plan(format!(
                "join column count mismatch: left {}, right {}",
                left_cols.n_selected(),
                right_cols.n_selected()
            )));
        }
        if left_cols.n_selected() != 1 {
            return Err(OpError::Plan(format!(
                "nested loops join needs exactly one join column per side, got {}",
                left_cols.n_selected()
            )));
        }

        let n_columns = left.n_columns() + right.n_columns() - 1;
        Ok(Self {
            left,
            right,
            left_column: left_cols.selected(0),
            right_column: right_cols.selected(0),
            n_columns,
            mode: JoinMode::default(),
            left_row: None,
            right_row: None,
            left_dirty: false,
            exhausted: false,
        })
    }

    pub fn with_mode(mut self, mode: JoinMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn configure(self, cfg: &EngineConfig) -> Self {
        self.with_mode(cfg.join_mode)
    }

    pub fn mode(&self) -> JoinMode {
        self.mode
    }

    fn matches(&self, left: &Row, right: &Row) -> bool {
        left.compare_at(self.left_column, right, self.right_column) == Ordering::Equal
    }

    fn join_rows(&self, left: &Row, right: &Row) -> Row {
        let mut joined = Row::with_capacity(self.n_columns);
        for v in left.values() {
            joined.append(v.clone());
        }
        for (i, v) in right.values().iter().enumerate() {
            if i != self.right_column {
                joined.append(v.clone());
            }
        }
        joined
    }

    fn rewind_left(&mut self) {
        trace::op_event(self.name(), "rewind_left");
        self.left.close();
        self.left.open();
    }

    fn next_full(&mut self) -> Option<Row> {
        loop {
            let right_row = match self.right_row.take() {
                Some(r) => r,
                None => {
                    let r = self.right.next()?;
                    if self.left_dirty {
                        self.rewind_left();
                    }
                    self.left_dirty = true;
                    r
                }
            };

            while let Some(left_row) = self.left.next() {
                if self.matches(&left_row, &right_row) {
                    let joined = self.join_rows(&left_row, &right_row);
                    self.right_row = Some(right_row);
                    return Some(joined);
                }
            }
            // Left side exhausted for this right row; drop it and pull the next.
        }
    }

    fn next_single_probe(&mut self) -> Option<Row> {
        let mut right_row = self.right.next();

        loop {
            let (Some(left), Some(right)) = (self.left_row.as_deref(), right_row.as_deref())
            else {
                break;
            };
            if self.matches(left, right) {
                break;
            }

            self.left_row = self.left.next();
            if self.left_row.is_none() {
                right_row = self.right.next();
                if right_row.is_some() {
                    self.rewind_left();
                    self.left_row = self.left.next();
                }
            }
        }

        match (self.left_row.as_deref(), right_row.as_deref()) {
            (Some(left), Some(right)) => Some(self.join_rows(left, right)),
            _ => None,
        }
    }
}

impl<'a> Operator<'a> for NestedLoopsJoin<'a> {
    fn name(&self) -> &'static str {
        "nested_loops_join"
    }

    fn n_columns(&self) -> usize {
        self.n_columns
    }

    fn open(&mut self) {
        trace::op_event(self.name(), "open");
        self.left.open();
        self.right.open();
        self.right_row = None;
        self.left_dirty = false;
        self.exhausted = false;
        self.left_row = match self.mode {
            JoinMode::SingleProbe => self.left.next(),
            JoinMode::Full => None,
        };
    }

    fn next(&mut self) -> Option<RowHandle<'a>> {
        if self.exhausted {
            return None;
        }
        let joined = match self.mode {
            JoinMode::Full => self.next_full(),
            JoinMode::SingleProbe => self.next_single_probe(),
        };
        if joined.is_none() {
            self.exhausted = true;
        }
        joined.map(Cow::Owned)
    }

    fn close(&mut self) {
        trace::op_event(self.name(), "close");
        self.left.close();
        self.right.close();
        self.left_row = None;
        self.right_row = None;
    }
}
