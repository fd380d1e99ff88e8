//! # symnmf
//!
//! Graph-based clustering of dense vectors by **Symmetric Nonnegative
//! Matrix Factorization**.
//!
//! The pipeline:
//!
//! ```text
//! 1. Build the Gaussian-kernel similarity matrix A over the points
//! 2. Normalize: W = D^{-1/2} · A · D^{-1/2}  (D = diagonal degree matrix)
//! 3. Factor W ≈ H·Hᵗ with H ≥ 0 by damped multiplicative updates
//! 4. Harden H into labels by row-wise argmax
//! ```
//!
//! Each row of H is a soft membership vector over the k clusters, so the
//! factorization doubles as a soft clustering; step 4 is only the final
//! hardening. A plain Lloyd's [`Kmeans`] baseline and a
//! [`silhouette_score`](metrics::silhouette_score) metric are included
//! for comparing the two.
//!
//! Everything is single-threaded and synchronous over dense
//! `ndarray::Array2<f64>` matrices.
//!
//! ## Example
//!
//! ```rust
//! use ndarray::array;
//! use symnmf::{Clustering, SymNmf};
//!
//! let points = array![
//!     [0.0, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//! ];
//!
//! let labels = SymNmf::new(2).with_seed(0).fit_predict(&points).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_ne!(labels[0], labels[2]);
//! ```
//!
//! ## References
//!
//! - Kuang, Ding, Park (2012). "Symmetric Nonnegative Matrix Factorization
//!   for Graph Clustering"

pub mod error;
pub mod factorize;
pub mod graph;
pub mod io;
pub mod kmeans;
pub mod matrix;
pub mod metrics;
pub mod traits;

pub use error::{Error, Result};
pub use factorize::{hard_labels, update_step, Factorization, SymNmf};
pub use graph::{degree_matrix, normalized_similarity, similarity_matrix};
pub use io::{format_matrix, parse_points, read_points};
pub use kmeans::Kmeans;
pub use matrix::{frobenius_distance, matmul, squared_distance};
pub use metrics::silhouette_score;
pub use traits::Clustering;
