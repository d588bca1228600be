//! `mx-matrix` - Matrix representations for matrix-engine.
//!
//! This crate provides:
//! - A closed `Matrix` enum over the supported representations
//! - `ColumnMajorMatrix`: a dense matrix over one flat column-major buffer
//! - `RowMajorMatrix`: a dense matrix over nested row buffers
//! - `DenseMatrix`: dense semantics with cell access only
//! - `SparseMatrix`: a coordinate map of explicitly stored nonzeros

pub mod dense;
pub mod error;
pub mod matrix;
pub mod sparse;

// Re-export primary types at the crate root for convenience.
pub use dense::{ColumnMajorMatrix, DenseMatrix, RowMajorMatrix};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use sparse::SparseMatrix;
