use crate::dense::{ColumnMajorMatrix, DenseMatrix, RowMajorMatrix};
use crate::sparse::SparseMatrix;

/// A matrix under one of the supported internal representations.
///
/// The enum is the complete, closed set of representations the engine
/// dispatches over; a consumer probes capabilities by matching on the
/// variant. Every variant supports the universal cell interface below,
/// which is the fallback every kernel can rely on.
#[derive(Debug, Clone, PartialEq)]
pub enum Matrix {
    /// Dense, backed by one flat column-major buffer.
    ColumnMajor(ColumnMajorMatrix),
    /// Dense, backed by a two-dimensional row-major buffer.
    RowMajor(RowMajorMatrix),
    /// Dense semantics, cells reachable only through `get`/`set`.
    Dense(DenseMatrix),
    /// Sparse, enumerating explicitly stored nonzero entries.
    Sparse(SparseMatrix),
}

impl Matrix {
    pub fn row_count(&self) -> usize {
        match self {
            Matrix::ColumnMajor(m) => m.row_count(),
            Matrix::RowMajor(m) => m.row_count(),
            Matrix::Dense(m) => m.row_count(),
            Matrix::Sparse(m) => m.row_count(),
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            Matrix::ColumnMajor(m) => m.column_count(),
            Matrix::RowMajor(m) => m.column_count(),
            Matrix::Dense(m) => m.column_count(),
            Matrix::Sparse(m) => m.column_count(),
        }
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        match self {
            Matrix::ColumnMajor(m) => m.get(row, col),
            Matrix::RowMajor(m) => m.get(row, col),
            Matrix::Dense(m) => m.get(row, col),
            Matrix::Sparse(m) => m.get(row, col),
        }
    }

    /// Stores `value` at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, value: f64, row: usize, col: usize) {
        match self {
            Matrix::ColumnMajor(m) => m.set(value, row, col),
            Matrix::RowMajor(m) => m.set(value, row, col),
            Matrix::Dense(m) => m.set(value, row, col),
            Matrix::Sparse(m) => m.set(value, row, col),
        }
    }

    /// Sets every entry to zero.
    pub fn clear(&mut self) {
        match self {
            Matrix::ColumnMajor(m) => m.clear(),
            Matrix::RowMajor(m) => m.clear(),
            Matrix::Dense(m) => m.clear(),
            Matrix::Sparse(m) => m.clear(),
        }
    }

    /// True if this matrix stores only explicit nonzeros.
    pub fn is_sparse(&self) -> bool {
        matches!(self, Matrix::Sparse(_))
    }
}

impl From<ColumnMajorMatrix> for Matrix {
    fn from(m: ColumnMajorMatrix) -> Self {
        Matrix::ColumnMajor(m)
    }
}

impl From<RowMajorMatrix> for Matrix {
    fn from(m: RowMajorMatrix) -> Self {
        Matrix::RowMajor(m)
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(m: DenseMatrix) -> Self {
        Matrix::Dense(m)
    }
}

impl From<SparseMatrix> for Matrix {
    fn from(m: SparseMatrix) -> Self {
        Matrix::Sparse(m)
    }
}
