use std::collections::BTreeMap;

use crate::error::{MatrixError, Result};

/// A sparse matrix storing only its nonzero entries as a coordinate map.
///
/// Absent coordinates are implicitly zero. Entries are keyed `(row, col)`
/// in a `BTreeMap`, so enumeration order is deterministic (row-major over
/// the stored coordinates). Storing an explicit `0.0` removes the entry,
/// keeping the invariant that exactly the nonzero coordinates are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

impl SparseMatrix {
    /// Create an empty (all-zero) matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        SparseMatrix {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Create a matrix from `(row, col, value)` triplets.
    ///
    /// Zero-valued triplets are dropped; later triplets overwrite earlier
    /// ones at the same coordinate.
    ///
    /// # Errors
    /// Returns `CoordOutOfBounds` for any triplet outside the dimensions,
    /// so a matrix with stale coordinates cannot be constructed.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f64)]) -> Result<Self> {
        let mut m = Self::zeros(rows, cols);
        for &(row, col, value) in triplets {
            if row >= rows || col >= cols {
                return Err(MatrixError::CoordOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            if value != 0.0 {
                m.entries.insert((row, col), value);
            } else {
                m.entries.remove(&(row, col));
            }
        }
        Ok(m)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Number of explicitly stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn check(&self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "coordinate ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
    }

    /// Returns the value at `(row, col)`, zero if not stored.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.check(row, col);
        self.entries.get(&(row, col)).copied().unwrap_or(0.0)
    }

    /// Stores `value` at `(row, col)`; a zero value removes the entry.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn set(&mut self, value: f64, row: usize, col: usize) {
        self.check(row, col);
        if value != 0.0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
    }

    /// Removes every stored entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Enumerates the stored nonzero entries as `((row, col), value)`.
    pub fn nonzero_entries(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.entries.iter().map(|(&coord, &value)| (coord, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_defaults_to_zero() {
        let m = SparseMatrix::zeros(3, 3);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.get(1, 2), 0.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut m = SparseMatrix::zeros(2, 2);
        m.set(5.0, 0, 1);
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut m = SparseMatrix::zeros(2, 2);
        m.set(5.0, 0, 1);
        m.set(0.0, 0, 1);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.get(0, 1), 0.0);
    }

    #[test]
    fn test_from_triplets() {
        let m = SparseMatrix::from_triplets(2, 3, &[(0, 1, 5.0), (1, 2, -1.0), (1, 0, 0.0)])
            .unwrap();
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(1, 2), -1.0);
    }

    #[test]
    fn test_from_triplets_out_of_bounds() {
        let err = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (2, 1, 3.0)]);
        assert!(err.is_err());
    }

    #[test]
    fn test_enumeration_order_is_deterministic() {
        let m = SparseMatrix::from_triplets(3, 3, &[(2, 0, 3.0), (0, 2, 1.0), (1, 1, 2.0)])
            .unwrap();
        let coords: Vec<_> = m.nonzero_entries().map(|(c, _)| c).collect();
        assert_eq!(coords, vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn test_clear() {
        let mut m = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0)]).unwrap();
        m.clear();
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut m = SparseMatrix::zeros(2, 2);
        m.set(1.0, 0, 5);
    }
}
