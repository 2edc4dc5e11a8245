//! Validated column selections used for projections, join keys and sort keys.

use crate::error::{Error, Result};

/// An ordered list of column positions, checked against an input arity.
///
/// Duplicates and reordering are allowed. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelector {
    n_columns: usize,
    selected: Vec<usize>,
}

impl ColumnSelector {
    pub fn new(n_columns: usize, columns: &[usize]) -> Result<Self> {
        if let Some(bad) = columns.iter().find(|&&c| c >= n_columns) {
            return Err(Error::Schema(format!(
                "column {bad} out of range for input of {n_columns} columns"
            )));
        }
        Ok(Self {
            n_columns,
            selected: columns.to_vec(),
        })
    }

    /// Arity of the input the selection was validated against.
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    pub fn n_selected(&self) -> usize {
        self.selected.len()
    }

    pub fn selected(&self, i: usize) -> usize {
        self.selected[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_duplicates() {
        let sel = ColumnSelector::new(3, &[2, 0, 2]).unwrap();
        assert_eq!(sel.n_selected(), 3);
        assert_eq!(sel.as_slice(), &[2, 0, 2]);
        assert_eq!(sel.n_columns(), 3);
    }

    #[test]
    fn rejects_out_of_range() {
        let err = ColumnSelector::new(2, &[0, 2]).unwrap_err();
        assert!(matches!(err, Error::Schema(_)));
    }
}
