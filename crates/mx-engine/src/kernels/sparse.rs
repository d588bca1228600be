//! Multiplication kernels with one sparse operand.
//!
//! Both kernels touch only the explicitly stored entries of the sparse
//! side, so their cost scales with its nonzero count rather than its full
//! extent. The destination is cleared first and accumulated into through
//! cell access; column order within an accumulation is irrelevant since
//! every required term is added exactly once.

use mx_matrix::{Matrix, SparseMatrix};

/// `C = A @ B` where `A` is sparse.
///
/// For each stored entry `A[r, l] = v1`, adds `v1 * B[l, j]` into
/// `C[r, j]` for every destination column `j`. Dimensions must already be
/// validated; stored coordinates are in bounds by construction.
pub(crate) fn sparse_times_dense(a: &SparseMatrix, b: &Matrix, c: &mut Matrix) {
    c.clear();
    let n = b.column_count();
    for ((r, l), v1) in a.nonzero_entries() {
        if v1 != 0.0 {
            for j in (0..n).rev() {
                let temp = v1 * b.get(l, j);
                if temp != 0.0 {
                    let prior = c.get(r, j);
                    c.set(prior + temp, r, j);
                }
            }
        }
    }
}

/// `C = A @ B` where `B` is sparse.
///
/// Symmetric to [`sparse_times_dense`]: for each stored entry
/// `B[l, j] = v2`, adds `A[i, l] * v2` into `C[i, j]` for every row `i`.
pub(crate) fn dense_times_sparse(a: &Matrix, b: &SparseMatrix, c: &mut Matrix) {
    c.clear();
    let m = a.row_count();
    for ((l, j), v2) in b.nonzero_entries() {
        if v2 != 0.0 {
            for i in (0..m).rev() {
                let temp = a.get(i, l) * v2;
                if temp != 0.0 {
                    let prior = c.get(i, j);
                    c.set(prior + temp, i, j);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mx_matrix::DenseMatrix;

    #[test]
    fn test_sparse_times_dense() {
        // [[0, 5], [0, 0]] @ [[1, 2], [3, 4]] = [[15, 20], [0, 0]]
        let a = SparseMatrix::from_triplets(2, 2, &[(0, 1, 5.0)]).unwrap();
        let b = Matrix::from(DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]));
        let mut c = Matrix::from(DenseMatrix::zeros(2, 2));
        sparse_times_dense(&a, &b, &mut c);
        assert_eq!(c.get(0, 0), 15.0);
        assert_eq!(c.get(0, 1), 20.0);
        assert_eq!(c.get(1, 0), 0.0);
        assert_eq!(c.get(1, 1), 0.0);
    }

    #[test]
    fn test_dense_times_sparse() {
        // [[1, 2], [3, 4]] @ [[0, 0], [5, 0]] = [[10, 0], [20, 0]]
        let a = Matrix::from(DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]));
        let b = SparseMatrix::from_triplets(2, 2, &[(1, 0, 5.0)]).unwrap();
        let mut c = Matrix::from(DenseMatrix::zeros(2, 2));
        dense_times_sparse(&a, &b, &mut c);
        assert_eq!(c.get(0, 0), 10.0);
        assert_eq!(c.get(1, 0), 20.0);
        assert_eq!(c.get(0, 1), 0.0);
        assert_eq!(c.get(1, 1), 0.0);
    }

    #[test]
    fn test_destination_is_cleared_first() {
        let a = SparseMatrix::zeros(2, 2);
        let b = Matrix::from(DenseMatrix::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0]]));
        let mut c = Matrix::from(DenseMatrix::from_rows(&[vec![9.0, 9.0], vec![9.0, 9.0]]));
        sparse_times_dense(&a, &b, &mut c);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(c.get(i, j), 0.0);
            }
        }
    }

    #[test]
    fn test_multiple_entries_accumulate() {
        // [[1, 2], [0, 3]] @ [[4], [5]] = [[14], [15]]
        let a = SparseMatrix::from_triplets(2, 2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 1, 3.0)])
            .unwrap();
        let b = Matrix::from(DenseMatrix::from_rows(&[vec![4.0], vec![5.0]]));
        let mut c = Matrix::from(DenseMatrix::zeros(2, 1));
        sparse_times_dense(&a, &b, &mut c);
        assert_eq!(c.get(0, 0), 14.0);
        assert_eq!(c.get(1, 0), 15.0);
    }
}
