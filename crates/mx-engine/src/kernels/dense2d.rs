//! GEMM over two-dimensional row-major buffers.
//!
//! Reads and writes go through nested row vectors. The parallel path
//! hands each worker a contiguous run of destination rows, since whole
//! rows are the disjoint mutable units of this layout; the accumulation
//! order per element is the same as in the sequential path.

use mx_matrix::RowMajorMatrix;

use crate::parallel::for_each_chunk;

/// `C = alpha * A @ B + beta * C` over nested row buffers.
///
/// Same scalar semantics as the column-major kernel: `beta == 1.0` zeroes
/// the destination before accumulating, and a zero `alpha` or `beta`
/// leaves `c` untouched. Dimensions must already be validated.
pub(crate) fn gemm(
    alpha: f64,
    a: &RowMajorMatrix,
    beta: f64,
    b: &RowMajorMatrix,
    c: &mut RowMajorMatrix,
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

    let a_rows = a.rows();
    let b_rows = b.rows();

    let step = |first_row: usize, rows: &mut [Vec<f64>]| {
        for j in 0..n {
            if beta == 1.0 {
                for row in rows.iter_mut() {
                    row[j] = 0.0;
                }
            } else {
                for row in rows.iter_mut() {
                    row[j] *= beta;
                }
            }
            for l in 0..k {
                let temp = alpha * b_rows[l][j];
                if temp != 0.0 {
                    for (i_off, row) in rows.iter_mut().enumerate() {
                        row[j] += a_rows[first_row + i_off][l] * temp;
                    }
                }
            }
        }
    };

    if m >= threshold && n >= threshold {
        for_each_chunk(c.rows_mut(), step);
    } else {
        step(0, c.rows_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: usize = usize::MAX;

    fn from_rows(rows: &[&[f64]]) -> RowMajorMatrix {
        RowMajorMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_small_product() {
        let a = from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]);
        let mut c = RowMajorMatrix::zeros(2, 2);
        gemm(1.0, &a, 1.0, &b, &mut c, SEQ);
        assert_eq!(c.rows(), &[vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn test_rectangular_product() {
        // [1, 2, 3; 4, 5, 6] @ [7; 8; 9] = [50; 122]
        let a = from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = from_rows(&[&[7.0], &[8.0], &[9.0]]);
        let mut c = RowMajorMatrix::zeros(2, 1);
        gemm(1.0, &a, 1.0, &b, &mut c, SEQ);
        assert_eq!(c.rows(), &[vec![50.0], vec![122.0]]);
    }

    #[test]
    fn test_alpha_zero_skips_everything() {
        let a = from_rows(&[&[1.0, 1.0], &[1.0, 1.0]]);
        let b = from_rows(&[&[1.0, 1.0], &[1.0, 1.0]]);
        let mut c = from_rows(&[&[9.0, 9.0], &[9.0, 9.0]]);
        gemm(0.0, &a, 4.0, &b, &mut c, SEQ);
        assert_eq!(c.rows(), &[vec![9.0, 9.0], vec![9.0, 9.0]]);
    }

    #[test]
    fn test_beta_scales_prior_contents() {
        let a = from_rows(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let b = from_rows(&[&[1.0, 0.0], &[0.0, 1.0]]);
        let mut c = from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]);
        gemm(1.0, &a, 2.0, &b, &mut c, SEQ);
        // I + 2 * C
        assert_eq!(c.rows(), &[vec![3.0, 4.0], vec![6.0, 9.0]]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let m = 11;
        let k = 6;
        let n = 9;
        let a = RowMajorMatrix::from_rows(
            (0..m)
                .map(|i| (0..k).map(|l| ((i * k + l) % 7) as f64 - 3.0).collect())
                .collect(),
        );
        let b = RowMajorMatrix::from_rows(
            (0..k)
                .map(|l| (0..n).map(|j| ((l * n + j) % 5) as f64 - 2.0).collect())
                .collect(),
        );
        let mut c_seq = RowMajorMatrix::zeros(m, n);
        let mut c_par = RowMajorMatrix::zeros(m, n);
        gemm(1.0, &a, 1.0, &b, &mut c_seq, SEQ);
        gemm(1.0, &a, 1.0, &b, &mut c_par, 1);
        assert_eq!(c_seq.rows(), c_par.rows());
    }
}
