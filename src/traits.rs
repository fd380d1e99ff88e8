//! Clustering traits.

use ndarray::Array2;

use crate::error::Result;

/// Trait for clustering algorithms over dense point sets.
pub trait Clustering {
    /// Fit the model to an n×d point matrix and return one cluster label
    /// per point.
    fn fit_predict(&self, data: &Array2<f64>) -> Result<Vec<usize>>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;
}
