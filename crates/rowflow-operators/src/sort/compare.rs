//! Row ordering on a list of sort columns.

use std::cmp::Ordering;

use rowflow_core::Row;

/// Lexicographic comparator over selected columns: column `columns[0]`
/// first, ties broken by `columns[1]`, and so on.
///
/// Built on `Scalar::compare`, so it is a total order (antisymmetric and
/// transitive) even with NaN and mixed value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCompare {
    columns: Vec<usize>,
}

impl RowCompare {
    pub fn new(columns: &[usize]) -> Self {
        Self {
            columns: columns.to_vec(),
        }
    }

    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for &c in &self.columns {
            match a.compare_at(c, b, c) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}
