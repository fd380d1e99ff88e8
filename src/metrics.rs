//! Clustering evaluation metrics.
//!
//! Internal quality measures: no ground-truth labels required, only the
//! points and the predicted assignment.
//!
//! # Silhouette
//!
//! For each point i with cluster C(i):
//!
//! ```text
//! a(i) = mean distance from i to the other members of C(i)
//! b(i) = min over other clusters C' of the mean distance from i to C'
//! s(i) = (b(i) - a(i)) / max(a(i), b(i))
//! ```
//!
//! s(i) lies in [-1, 1]: near 1 the point sits well inside its cluster,
//! near 0 it sits on a boundary, negative values suggest it was assigned
//! to the wrong cluster. Singleton clusters get s(i) = 0. The score is
//! the mean over all points.
//!
//! # References
//!
//! - Rousseeuw (1987). "Silhouettes: a graphical aid to the interpretation
//!   and validation of cluster analysis"

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::matrix::squared_distance;

/// Mean silhouette coefficient of a labeling.
///
/// Requires at least two distinct clusters; a single cluster has no
/// between-cluster distance to compare against.
pub fn silhouette_score(points: &Array2<f64>, labels: &[usize]) -> Result<f64> {
    let n = points.nrows();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if labels.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: labels.len(),
        });
    }

    let n_clusters = match labels.iter().max() {
        Some(&max) => max + 1,
        None => 0,
    };
    if n_clusters > n {
        return Err(Error::InvalidClusterCount {
            requested: n_clusters,
            n_items: n,
        });
    }
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); n_clusters];
    for (i, &label) in labels.iter().enumerate() {
        members[label].push(i);
    }
    let occupied = members.iter().filter(|m| !m.is_empty()).count();
    if occupied < 2 {
        return Err(Error::InvalidClusterCount {
            requested: occupied,
            n_items: n,
        });
    }

    let mean_dist_to = |i: usize, cluster: &[usize]| -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        for &j in cluster {
            if j != i {
                total += squared_distance(points.row(i), points.row(j)).sqrt();
                count += 1;
            }
        }
        total / count as f64
    };

    let mut total = 0.0;
    for i in 0..n {
        let own = &members[labels[i]];
        if own.len() == 1 {
            continue; // s(i) = 0 for singletons
        }

        let a = mean_dist_to(i, own);
        let b = members
            .iter()
            .enumerate()
            .filter(|(c, m)| *c != labels[i] && !m.is_empty())
            .map(|(_, m)| mean_dist_to(i, m))
            .fold(f64::INFINITY, f64::min);

        total += (b - a) / a.max(b);
    }

    Ok(total / n as f64)
}
