//! Lloyd's k-means, the baseline the factorization is compared against.
//!
//! Classic alternation: assign each point to its nearest centroid, move
//! each centroid to the mean of its points, repeat until no centroid moves
//! farther than the tolerance.
//!
//! Initialization is deterministic: the first k points become the initial
//! centroids, so two runs on the same data agree exactly unless a cluster
//! empties out (empty clusters are re-seeded from a random point, which is
//! where the optional seed matters).
//!
//! This is algorithmically independent of the factorization pipeline; it
//! exists so [`silhouette_score`](crate::metrics::silhouette_score)
//! comparisons have a baseline.

use ndarray::{s, Array2};
use rand::prelude::*;

use crate::error::{Error, Result};
use crate::matrix::squared_distance;
use crate::traits::Clustering;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance on centroid movement.
    eps: f64,
    /// Random seed for empty-cluster re-seeding.
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a new k-means clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            eps: 1e-4,
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &Array2<f64>) -> Result<Vec<usize>> {
        let n = data.nrows();
        let d = data.ncols();

        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        // First k points seed the centroids.
        let mut centroids = data.slice(s![0..self.k, ..]).to_owned();
        let mut labels = vec![0usize; n];

        for _iter in 0..self.max_iter {
            // Assignment step.
            for (i, label) in labels.iter_mut().enumerate() {
                let point = data.row(i);
                let mut best_cluster = 0;
                let mut best_dist = f64::MAX;

                for c in 0..self.k {
                    let dist = squared_distance(point, centroids.row(c));
                    if dist < best_dist {
                        best_dist = dist;
                        best_cluster = c;
                    }
                }
                *label = best_cluster;
            }

            // Update step.
            let mut new_centroids = Array2::zeros((self.k, d));
            let mut counts = vec![0usize; self.k];

            for i in 0..n {
                let c = labels[i];
                for j in 0..d {
                    new_centroids[[c, j]] += data[[i, j]];
                }
                counts[c] += 1;
            }

            for c in 0..self.k {
                if counts[c] > 0 {
                    for j in 0..d {
                        new_centroids[[c, j]] /= counts[c] as f64;
                    }
                } else {
                    // Empty cluster: re-seed from a random point.
                    let idx = rng.random_range(0..n);
                    new_centroids.row_mut(c).assign(&data.row(idx));
                }
            }

            // Converged once no centroid moved farther than eps.
            let max_shift = (0..self.k)
                .map(|c| squared_distance(centroids.row(c), new_centroids.row(c)).sqrt())
                .fold(0.0_f64, f64::max);

            centroids = new_centroids;

            if max_shift < self.eps {
                break;
            }
        }

        Ok(labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_kmeans_basic() {
        let data = array![
            [0.0, 0.0],
            [0.1, 0.1],
            [10.0, 10.0],
            [10.1, 10.1],
        ];

        let labels = Kmeans::new(2).fit_predict(&data).unwrap();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_kmeans_all_points_assigned() {
        let data = Array2::from_shape_fn((50, 2), |(i, j)| {
            if j == 0 {
                i as f64 * 0.1
            } else {
                (i % 5) as f64
            }
        });

        let labels = Kmeans::new(5).with_seed(123).fit_predict(&data).unwrap();

        assert_eq!(labels.len(), 50);
        for &label in &labels {
            assert!(label < 5, "label {} out of range", label);
        }
    }

    #[test]
    fn test_kmeans_deterministic() {
        let data = array![
            [0.0, 0.0],
            [0.1, 0.1],
            [10.0, 10.0],
            [10.1, 10.1],
        ];

        let labels1 = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
        let labels2 = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();

        assert_eq!(labels1, labels2);
    }

    #[test]
    fn test_kmeans_k_equals_n() {
        let data = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];

        let labels = Kmeans::new(3).with_seed(42).fit_predict(&data).unwrap();

        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_kmeans_empty_input_error() {
        let data = Array2::<f64>::zeros((0, 2));
        assert!(Kmeans::new(2).fit_predict(&data).is_err());
    }

    #[test]
    fn test_kmeans_k_larger_than_n_error() {
        let data = array![[0.0, 0.0], [1.0, 1.0]];
        assert!(Kmeans::new(5).fit_predict(&data).is_err());
    }
}
