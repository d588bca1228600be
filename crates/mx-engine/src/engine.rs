//! Kernel selection and the public multiplication surface.
//!
//! The engine classifies the three operands by representation and hands
//! them to the most specific kernel that applies. The priority order runs
//! from fastest to slowest: contiguous column-major buffers, nested
//! row-major buffers, generic dense cell access, the sparse kernels, and
//! finally the universal cell fallback, which accepts any mix of
//! representations. The fallback makes selection total: no combination of
//! operands is rejected for its representation, only for its dimensions.

use mx_matrix::Matrix;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::kernels;

/// Representation-dispatched matrix multiplication.
///
/// Holds the configuration it was built from; a single engine can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MultiplyEngine {
    config: EngineConfig,
}

impl MultiplyEngine {
    pub fn new(config: EngineConfig) -> Self {
        MultiplyEngine { config }
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates `a.column_count() == b.row_count()` and that the
    /// destination is pre-allocated at the product's dimensions. Runs
    /// before any kernel, so a failed multiply never touches `c`.
    fn check_dims(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(usize, usize, usize)> {
        let m = a.row_count();
        let k = a.column_count();
        let k2 = b.row_count();
        let n = b.column_count();
        if k != k2 {
            return Err(EngineError::DimMismatch { m, k, k2, n });
        }
        if c.row_count() != m || c.column_count() != n {
            return Err(EngineError::DestinationMismatch {
                rows: c.row_count(),
                cols: c.column_count(),
                expected_rows: m,
                expected_cols: n,
            });
        }
        Ok((m, k, n))
    }

    /// Computes `c = a @ b`, overwriting the destination.
    ///
    /// Picks the fastest kernel for the operands' representations; when
    /// all three are column-major and the output meets the parallel
    /// threshold in both dimensions, a configured accelerator is
    /// preferred over the in-crate kernel. Which path ran is not
    /// observable in the result.
    ///
    /// # Errors
    /// `DimMismatch` if the operand dimensions are incompatible,
    /// `DestinationMismatch` if `c` is not pre-allocated at `m x n`.
    /// Both are raised before anything is written.
    pub fn multiply(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
        let (m, k, n) = Self::check_dims(a, b, c)?;
        let threshold = self.config.parallel_threshold;
        match (a, b, &mut *c) {
            (Matrix::ColumnMajor(s1), Matrix::ColumnMajor(s2), Matrix::ColumnMajor(t)) => {
                if let Some(accel) = &self.config.accelerator {
                    if m >= threshold && n >= threshold {
                        log::debug!(
                            "multiply: delegating {}x{} @ {}x{} to accelerator '{}'",
                            m,
                            k,
                            k,
                            n,
                            accel.name()
                        );
                        return accel.calc(
                            s1.as_slice(),
                            s2.as_slice(),
                            t.as_mut_slice(),
                            m,
                            k,
                            n,
                        );
                    }
                }
                kernels::col_major::gemm(
                    1.0,
                    s1.as_slice(),
                    m,
                    k,
                    1.0,
                    s2.as_slice(),
                    n,
                    t.as_mut_slice(),
                    threshold,
                );
                Ok(())
            }
            (Matrix::RowMajor(s1), Matrix::RowMajor(s2), Matrix::RowMajor(t)) => {
                kernels::dense2d::gemm(1.0, s1, 1.0, s2, t, threshold);
                Ok(())
            }
            (Matrix::Dense(s1), Matrix::Dense(s2), Matrix::Dense(t)) => {
                kernels::dense::gemm(1.0, s1, 1.0, s2, t, threshold);
                Ok(())
            }
            (Matrix::Sparse(s1), _, t) => {
                kernels::sparse::sparse_times_dense(s1, b, t);
                Ok(())
            }
            (_, Matrix::Sparse(s2), t) => {
                kernels::sparse::dense_times_sparse(a, s2, t);
                Ok(())
            }
            (_, _, t) => {
                log::trace!("multiply: cell fallback for mixed representations");
                kernels::cell::gemm(1.0, a, 1.0, b, t, threshold);
                Ok(())
            }
        }
    }

    /// Computes `c = alpha * a @ b + beta * c`.
    ///
    /// The advanced entry point. A `beta` of exactly 1.0 overwrites the
    /// destination rather than accumulating into it, and `alpha == 0` or
    /// `beta == 0` leaves `c` completely untouched - including skipping
    /// the beta scaling. Sparse operands are handled through the cell
    /// fallback; the accelerator is never consulted here.
    ///
    /// # Errors
    /// Same as [`multiply`](Self::multiply).
    pub fn gemm(
        &self,
        alpha: f64,
        a: &Matrix,
        beta: f64,
        b: &Matrix,
        c: &mut Matrix,
    ) -> Result<()> {
        let (m, k, n) = Self::check_dims(a, b, c)?;
        let threshold = self.config.parallel_threshold;
        match (a, b, &mut *c) {
            (Matrix::ColumnMajor(s1), Matrix::ColumnMajor(s2), Matrix::ColumnMajor(t)) => {
                kernels::col_major::gemm(
                    alpha,
                    s1.as_slice(),
                    m,
                    k,
                    beta,
                    s2.as_slice(),
                    n,
                    t.as_mut_slice(),
                    threshold,
                );
            }
            (Matrix::RowMajor(s1), Matrix::RowMajor(s2), Matrix::RowMajor(t)) => {
                kernels::dense2d::gemm(alpha, s1, beta, s2, t, threshold);
            }
            (Matrix::Dense(s1), Matrix::Dense(s2), Matrix::Dense(t)) => {
                kernels::dense::gemm(alpha, s1, beta, s2, t, threshold);
            }
            (_, _, t) => {
                kernels::cell::gemm(alpha, a, beta, b, t, threshold);
            }
        }
        Ok(())
    }
}
