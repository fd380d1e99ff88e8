//! Symmetric nonnegative matrix factorization by multiplicative updates.
//!
//! Given the normalized similarity matrix W (n×n), find a nonnegative
//! factor H (n×k) minimizing the reconstruction error:
//!
//! ```text
//! min_{H ≥ 0}  ||W - H·Hᵗ||²_F
//! ```
//!
//! Each row of H is a soft membership vector over the k clusters; the
//! row-wise argmax hardens it into a label.
//!
//! # The Update Rule
//!
//! Per iteration, with damping factor β = 1/2:
//!
//! ```text
//! H'[i,j] = H[i,j] · (1 - β + β · (W·H)[i,j] / (H·Hᵗ·H)[i,j])
//! ```
//!
//! The damped step keeps the descent monotone and stable; β is a fixed
//! constant, not a parameter. When W and H are nonnegative the update
//! preserves nonnegativity by construction.
//!
//! # Termination
//!
//! The loop stops when the squared Frobenius distance between consecutive
//! iterates drops below the tolerance (converged), or after the iteration
//! cap (capped). Both outcomes return the latest iterate;
//! [`Factorization::converged`] tells them apart.
//!
//! # Failure Modes
//!
//! - **Collapsed factor row**: an all-zero row of H zeroes a denominator
//!   in the update. Reported as [`Error::ZeroDenominator`], never NaN.
//! - **Local optima**: multiplicative updates find local minima only;
//!   initialization matters, so the seed is caller-controlled.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use symnmf::SymNmf;
//!
//! let points = array![
//!     [0.0, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//! ];
//!
//! let fit = SymNmf::new(2).with_seed(0).fit(&points).unwrap();
//! let labels = fit.labels();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```
//!
//! # References
//!
//! - Kuang, Ding, Park (2012). "Symmetric Nonnegative Matrix Factorization
//!   for Graph Clustering"
//! - Lee, Seung (2000). "Algorithms for Non-negative Matrix Factorization"

use ndarray::Array2;
use rand::prelude::*;

use crate::error::{Error, Result};
use crate::graph::normalized_similarity;
use crate::matrix::{frobenius_distance, matmul};
use crate::traits::Clustering;

/// Damping factor of the multiplicative step. Fixed: changing it changes
/// convergence behavior.
const BETA: f64 = 0.5;

/// SymNMF clustering algorithm.
#[derive(Debug, Clone)]
pub struct SymNmf {
    /// Number of clusters.
    k: usize,
    /// Maximum update iterations.
    max_iter: usize,
    /// Convergence tolerance on the squared Frobenius shift.
    tol: f64,
    /// Random seed for the initial factor.
    seed: Option<u64>,
}

/// A completed factorization: the final factor plus how it terminated.
#[derive(Debug, Clone)]
pub struct Factorization {
    /// Final n×k factor, entrywise nonnegative.
    pub h: Array2<f64>,
    /// Number of update iterations performed.
    pub iterations: usize,
    /// True if the tolerance was met before the iteration cap.
    pub converged: bool,
}

impl Factorization {
    /// Harden the factor into one label per point (row-wise argmax).
    pub fn labels(&self) -> Vec<usize> {
        hard_labels(&self.h)
    }
}

impl SymNmf {
    /// Create a new SymNMF clusterer with `k` clusters.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            tol: 1e-4,
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw the initial factor H₀ for a target matrix `w`.
    ///
    /// Entries are uniform on `[0, 2·sqrt(mean(W)/k))`, so the expected
    /// reconstruction `H₀·H₀ᵗ` starts at the scale of W.
    pub fn initial_factor(&self, w: &Array2<f64>) -> Result<Array2<f64>> {
        let n = w.nrows();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if w.ncols() != n {
            return Err(Error::ShapeMismatch {
                expected: format!("{n}x{n}"),
                actual: format!("{}x{}", n, w.ncols()),
            });
        }
        if self.k == 0 || self.k >= n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }

        let mean = w.mean().unwrap_or(0.0);
        if mean <= 0.0 {
            return Err(Error::Other("target matrix has zero mean".to_string()));
        }
        let bound = 2.0 * (mean / self.k as f64).sqrt();

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let mut h = Array2::zeros((n, self.k));
        for entry in h.iter_mut() {
            *entry = rng.random_range(0.0..bound);
        }

        Ok(h)
    }

    /// Run the bounded multiplicative-update loop from an explicit H₀.
    ///
    /// Stops when the squared Frobenius distance between consecutive
    /// iterates drops below the tolerance, or after `max_iter` iterations.
    /// Either way the returned [`Factorization`] holds the latest iterate.
    pub fn factorize(&self, h0: Array2<f64>, w: &Array2<f64>) -> Result<Factorization> {
        if h0.ncols() != self.k {
            return Err(Error::DimensionMismatch {
                expected: self.k,
                found: h0.ncols(),
            });
        }

        let mut h = h0;
        let mut iterations = self.max_iter;
        let mut converged = false;

        for iter in 1..=self.max_iter {
            let next = update_step(&h, w)?;
            let shift = frobenius_distance(&h, &next)?;
            h = next;

            if shift * shift < self.tol {
                iterations = iter;
                converged = true;
                break;
            }
        }

        Ok(Factorization {
            h,
            iterations,
            converged,
        })
    }

    /// Full pipeline: normalized similarity, seeded H₀, factorization.
    pub fn fit(&self, points: &Array2<f64>) -> Result<Factorization> {
        let w = normalized_similarity(points)?;
        let h0 = self.initial_factor(&w)?;
        self.factorize(h0, &w)
    }
}

/// One multiplicative update, returning the next factor.
///
/// Pure: neither argument is mutated, so callers decide whether to commit
/// the result. `w` must be square with side `h.nrows()`.
pub fn update_step(h: &Array2<f64>, w: &Array2<f64>) -> Result<Array2<f64>> {
    let (n, k) = h.dim();
    if w.nrows() != w.ncols() {
        return Err(Error::ShapeMismatch {
            expected: format!("{}x{}", w.nrows(), w.nrows()),
            actual: format!("{}x{}", w.nrows(), w.ncols()),
        });
    }
    if w.nrows() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            found: w.nrows(),
        });
    }

    let wh = matmul(w, h)?;
    let ht = h.t().to_owned();
    let hht = matmul(h, &ht)?;
    let hhth = matmul(&hht, h)?;

    let mut next = Array2::zeros((n, k));
    for i in 0..n {
        for j in 0..k {
            let denom = hhth[[i, j]];
            if denom == 0.0 {
                return Err(Error::ZeroDenominator { row: i, col: j });
            }
            next[[i, j]] = h[[i, j]] * (BETA + BETA * wh[[i, j]] / denom);
        }
    }

    Ok(next)
}

/// Row-wise argmax of the factor: one label in `[0, k)` per point.
///
/// Ties resolve to the lowest column index (strict `>` against the running
/// maximum).
pub fn hard_labels(h: &Array2<f64>) -> Vec<usize> {
    h.rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            let mut max = f64::NEG_INFINITY;
            for (j, &v) in row.iter().enumerate() {
                if v > max {
                    max = v;
                    best = j;
                }
            }
            best
        })
        .collect()
}

impl Clustering for SymNmf {
    fn fit_predict(&self, data: &Array2<f64>) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
