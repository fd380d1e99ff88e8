//! Checked dense-matrix primitives shared by the pipeline stages.
//!
//! Everything downstream works on `ndarray::Array2<f64>`. The helpers here
//! add the contracts ndarray leaves to the caller: multiplication returns a
//! typed error on an inner-dimension mismatch instead of panicking, and the
//! Frobenius distance insists on equal shapes.

use ndarray::{Array2, ArrayView1};

use crate::error::{Error, Result};

/// Squared Euclidean distance between two equal-length vectors.
///
/// Callers pass rows of the same matrix, so the lengths agree by
/// construction.
#[inline]
pub fn squared_distance(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Frobenius distance between two equal-shaped matrices.
///
/// ```text
/// ||A - B||_F = sqrt(Σᵢⱼ (A[i,j] - B[i,j])²)
/// ```
pub fn frobenius_distance(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    if a.dim() != b.dim() {
        return Err(Error::ShapeMismatch {
            expected: format!("{}x{}", a.nrows(), a.ncols()),
            actual: format!("{}x{}", b.nrows(), b.ncols()),
        });
    }

    let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
    Ok(sum.sqrt())
}

/// Matrix product with an explicit inner-dimension check.
///
/// Returns [`Error::DimensionMismatch`] when `a.ncols() != b.nrows()`
/// instead of panicking the way a bare `dot` would.
pub fn matmul(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if a.ncols() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: a.ncols(),
            found: b.nrows(),
        });
    }

    Ok(a.dot(b))
}
