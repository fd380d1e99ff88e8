//! Similarity graph construction and degree normalization.
//!
//! The first half of the pipeline turns n points in d dimensions into the
//! normalized similarity matrix the factorization solver targets:
//!
//! ```text
//! A[i,j] = exp(-||xᵢ - xⱼ||² / 2)    (i ≠ j; diagonal is 0)
//! D      = diag(row sums of A)
//! W      = D^{-1/2} · A · D^{-1/2}
//! ```
//!
//! # Properties
//!
//! - A is symmetric with zero diagonal; off-diagonal entries lie in (0, 1],
//!   equal to 1 exactly when two points coincide.
//! - D is diagonal with nonnegative entries.
//! - W is symmetric, the fixed optimization target downstream.
//!
//! A zero row sum in A makes `D^{-1/2}` undefined. That cannot happen for
//! n > 1 under the Gaussian kernel, but it is checked unconditionally and
//! reported as [`Error::ZeroDegree`] instead of propagating NaN.
//!
//! # References
//!
//! - Kuang, Ding, Park (2012). "Symmetric Nonnegative Matrix Factorization
//!   for Graph Clustering"
//! - von Luxburg (2007). "A Tutorial on Spectral Clustering"

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::matrix::{matmul, squared_distance};

/// Pairwise Gaussian-kernel similarity matrix.
///
/// Returns an n×n symmetric matrix with zero diagonal, where
/// `A[i,j] = exp(-0.5 · ||xᵢ - xⱼ||²)` for i ≠ j. O(n²·d).
pub fn similarity_matrix(points: &Array2<f64>) -> Result<Array2<f64>> {
    let n = points.nrows();
    if n == 0 {
        return Err(Error::EmptyInput);
    }

    let mut a = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..i {
            let s = (-0.5 * squared_distance(points.row(i), points.row(j))).exp();
            a[[i, j]] = s;
            a[[j, i]] = s;
        }
    }

    Ok(a)
}

/// Diagonal degree matrix of the similarity graph.
///
/// `D[i,i]` is the sum of row i of [`similarity_matrix`]; every
/// off-diagonal entry is zero.
pub fn degree_matrix(points: &Array2<f64>) -> Result<Array2<f64>> {
    let a = similarity_matrix(points)?;
    let n = a.nrows();

    let mut d = Array2::zeros((n, n));
    for (i, row) in a.rows().into_iter().enumerate() {
        d[[i, i]] = row.sum();
    }

    Ok(d)
}

/// Symmetrically normalized similarity matrix `W = D^{-1/2} · A · D^{-1/2}`.
///
/// The similarity matrix is built once and the degrees are read off its
/// rows. Returns [`Error::ZeroDegree`] if any row sum is zero (e.g. a
/// single-point input), before any division happens.
pub fn normalized_similarity(points: &Array2<f64>) -> Result<Array2<f64>> {
    let a = similarity_matrix(points)?;
    let n = a.nrows();

    let mut d_inv_sqrt = Array2::zeros((n, n));
    for (i, row) in a.rows().into_iter().enumerate() {
        let degree = row.sum();
        if degree == 0.0 {
            return Err(Error::ZeroDegree { index: i });
        }
        d_inv_sqrt[[i, i]] = 1.0 / degree.sqrt();
    }

    matmul(&matmul(&d_inv_sqrt, &a)?, &d_inv_sqrt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_similarity_symmetric_zero_diagonal() {
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 2.0]];
        let a = similarity_matrix(&points).unwrap();

        for i in 0..3 {
            assert_eq!(a[[i, i]], 0.0);
            for j in 0..3 {
                assert!((a[[i, j]] - a[[j, i]]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn test_similarity_identical_points() {
        let points = array![[1.0, 2.0], [1.0, 2.0]];
        let a = similarity_matrix(&points).unwrap();
        assert_eq!(a[[0, 1]], 1.0);
    }

    #[test]
    fn test_similarity_known_value() {
        // Distance 1 apart: exp(-0.5)
        let points = array![[0.0], [1.0]];
        let a = similarity_matrix(&points).unwrap();
        assert!((a[[0, 1]] - (-0.5f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_similarity_empty_error() {
        let points = Array2::<f64>::zeros((0, 2));
        assert_eq!(similarity_matrix(&points), Err(Error::EmptyInput));
    }

    #[test]
    fn test_degree_is_similarity_row_sum() {
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 2.0], [3.0, 3.0]];
        let a = similarity_matrix(&points).unwrap();
        let d = degree_matrix(&points).unwrap();

        for i in 0..4 {
            assert!((d[[i, i]] - a.row(i).sum()).abs() < 1e-12);
            for j in 0..4 {
                if i != j {
                    assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_two_identical_one_far() {
        // Two coincident points and one far away.
        let points = array![[0.0, 0.0], [0.0, 0.0], [10.0, 10.0]];

        let a = similarity_matrix(&points).unwrap();
        assert_eq!(a[[0, 1]], 1.0);
        // exp(-100) vanishes at 4 decimal places.
        assert!(a[[0, 2]] < 5e-5);
        assert!(a[[0, 2]] > 0.0);

        let d = degree_matrix(&points).unwrap();
        assert!((d[[0, 0]] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalized_similarity_symmetric() {
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 2.0], [5.0, 5.0]];
        let w = normalized_similarity(&points).unwrap();

        for i in 0..4 {
            for j in 0..4 {
                assert!((w[[i, j]] - w[[j, i]]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_normalized_similarity_matches_explicit_product() {
        let points = array![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];
        let w = normalized_similarity(&points).unwrap();

        let a = similarity_matrix(&points).unwrap();
        let mut d = degree_matrix(&points).unwrap();
        for i in 0..3 {
            d[[i, i]] = 1.0 / d[[i, i]].sqrt();
        }
        let expected = d.dot(&a).dot(&d);

        for i in 0..3 {
            for j in 0..3 {
                assert!((w[[i, j]] - expected[[i, j]]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_normalized_similarity_single_point_zero_degree() {
        // n = 1: the only row of A is all zeros.
        let points = array![[1.0, 2.0]];
        assert_eq!(
            normalized_similarity(&points),
            Err(Error::ZeroDegree { index: 0 })
        );
    }
}
