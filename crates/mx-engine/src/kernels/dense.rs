//! GEMM over dense matrices with cell access only.
//!
//! The layout is private to the matrix, so every read and write is a
//! `get`/`set` call. Concurrent `set` through a single `&mut` handle is
//! not expressible, so the parallel path computes columns into a
//! column-major scratch buffer (sharing read access to the operands and
//! the destination's prior contents) and then commits the scratch
//! sequentially. The accumulation order per column matches the
//! sequential path, so both produce identical bits.

use mx_matrix::DenseMatrix;

use crate::parallel::for_each_column_chunk;

/// `C = alpha * A @ B + beta * C` through cell access.
///
/// Same scalar semantics as the buffer kernels: `beta == 1.0` zeroes the
/// destination column before accumulating, and a zero `alpha` or `beta`
/// leaves `c` untouched. Dimensions must already be validated.
pub(crate) fn gemm(
    alpha: f64,
    a: &DenseMatrix,
    beta: f64,
    b: &DenseMatrix,
    c: &mut DenseMatrix,
    threshold: usize,
) {
    let m = a.row_count();
    let k = a.column_count();
    let n = b.column_count();
    debug_assert_eq!(b.row_count(), k);
    debug_assert_eq!(c.row_count(), m);
    debug_assert_eq!(c.column_count(), n);

    if alpha == 0.0 || beta == 0.0 {
        return;
    }

    if m >= threshold && n >= threshold {
        let mut scratch = vec![0.0; m * n];
        let c_ro: &DenseMatrix = c;
        for_each_column_chunk(&mut scratch, m, |first_col, chunk| {
            for (j_off, col) in chunk.chunks_exact_mut(m).enumerate() {
                let j = first_col + j_off;
                if beta != 1.0 {
                    for (i, v) in col.iter_mut().enumerate() {
                        *v = c_ro.get(i, j) * beta;
                    }
                }
                for l in 0..k {
                    let temp = alpha * b.get(l, j);
                    if temp != 0.0 {
                        for (i, v) in col.iter_mut().enumerate() {
                            *v += a.get(i, l) * temp;
                        }
                    }
                }
            }
        });
        for j in 0..n {
            for i in 0..m {
                c.set(scratch[i + j * m], i, j);
            }
        }
    } else {
        for j in 0..n {
            if beta != 1.0 {
                for i in 0..m {
                    c.set(c.get(i, j) * beta, i, j);
                }
            } else {
                for i in 0..m {
                    c.set(0.0, i, j);
                }
            }
            for l in 0..k {
                let temp = alpha * b.get(l, j);
                if temp != 0.0 {
                    for i in 0..m {
                        c.set(c.get(i, j) + a.get(i, l) * temp, i, j);
                    }
                }
            }
        }
    }
}
