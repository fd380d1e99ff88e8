use core::fmt;

/// Result alias for `symnmf`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Matrix dimension mismatch (usize).
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Shape mismatch (string description).
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// A similarity row sums to zero, so degree normalization would divide by zero.
    ZeroDegree {
        /// Index of the degenerate row.
        index: usize,
    },

    /// Zero denominator in the multiplicative update (collapsed factor row).
    ZeroDenominator {
        /// Row of the degenerate entry.
        row: usize,
        /// Column of the degenerate entry.
        col: usize,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, actual {actual}")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::ZeroDegree { index } => {
                write!(f, "zero degree at row {index}")
            }
            Error::ZeroDenominator { row, col } => {
                write!(f, "zero denominator in update at ({row}, {col})")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
