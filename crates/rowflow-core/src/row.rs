//! Rows and row handles.
//!
//! A row reaching a consumer is either borrowed from table/index storage or
//! owned by the consumer. `RowHandle` carries that tag: `Cow::Borrowed`
//! aliases storage and is never freed by the holder, `Cow::Owned` is freed
//! exactly once when the handle is dropped.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Scalar;

/// A row as handed out by an operator.
pub type RowHandle<'a> = Cow<'a, Row>;

/// Ordered, fixed-length sequence of field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    values: Vec<Scalar>,
}

impl Row {
    pub fn new(values: Vec<Scalar>) -> Self {
        Self { values }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            values: Vec::with_capacity(n),
        }
    }

    /// Field at position `i`.
    ///
    /// Panics when `i` is out of range; callers validate column positions
    /// up front through `ColumnSelector`.
    pub fn at(&self, i: usize) -> &Scalar {
        match self.values.get(i) {
            Some(v) => v,
            None => panic!("column {i} out of range for row of {} fields", self.values.len()),
        }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn append(&mut self, value: Scalar) {
        self.values.push(value);
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Compare field `i` of this row with field `j` of `other`.
    pub fn compare_at(&self, i: usize, other: &Row, j: usize) -> Ordering {
        self.at(i).compare(other.at(j))
    }

    /// Same arity and every field compares equal.
    pub fn same_values(&self, other: &Row) -> bool {
        self.size() == other.size()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.same_as(b))
    }

    /// Lexicographic comparison over all fields; a strict prefix sorts first.
    pub fn compare(&self, other: &Row) -> Ordering {
        for (x, y) in self.values.iter().zip(other.values.iter()) {
            match x.compare(y) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        self.size().cmp(&other.size())
    }
}

impl From<Vec<Scalar>> for Row {
    fn from(values: Vec<Scalar>) -> Self {
        Row::new(values)
    }
}

impl FromIterator<Scalar> for Row {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Row::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// Build a row from heterogeneous literals: `row![1, "x", 2.5]`.
#[macro_export]
macro_rules! row {
    () => { $crate::row::Row::default() };
    ($($v:expr),+ $(,)?) => {
        $crate::row::Row::new(vec![$($crate::types::Scalar::from($v)),+])
    };
}
