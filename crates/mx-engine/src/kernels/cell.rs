//! The universal fallback GEMM.
//!
//! Works on any mix of representations through the `Matrix` cell
//! interface, so it is always applicable when the dimensions agree. Every
//! access pays for a variant dispatch. The parallel path uses the same
//! scratch-and-commit scheme as the generic dense kernel.

use mx_matrix::Matrix;

use crate::parallel::for_each_column_chunk;

/// `C = alpha * A @ B + beta * C` through the `Matrix` cell interface.
///
/// Same scalar semantics as the specialized kernels: `beta == 1.0` zeroes
/// the destination column before accumulating, and a zero `alpha` or
/// `beta` leaves `c` untouched. Dimensions must already be validated.
pub(crate) fn gemm(
    alpha: f64,
    a: &Matrix,
    beta: f64,
    b: &Matrix,
    c: &mut Matrix,
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
        let c_ro: &Matrix = c;
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
