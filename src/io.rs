//! Reading point files and formatting matrices for text output.
//!
//! Input: one point per line, coordinates comma-separated. Output: each
//! matrix row comma-joined with exactly 4 decimal places, rows separated
//! by newlines, no trailing comma.

use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};

/// Parse a comma-separated point file into an n×d matrix.
///
/// Blank lines are skipped. Every row must have the same number of
/// fields as the first; a ragged row is a [`Error::DimensionMismatch`].
pub fn parse_points(input: &str) -> Result<Array2<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split(',')
            .map(|field| field.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|e| Error::Other(format!("invalid coordinate: {e}")))?;

        if let Some(first) = rows.first() {
            if values.len() != first.len() {
                return Err(Error::DimensionMismatch {
                    expected: first.len(),
                    found: values.len(),
                });
            }
        }
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }

    let n = rows.len();
    let d = rows[0].len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n, d), flat).map_err(|e| Error::Other(e.to_string()))
}

/// Read and parse a point file from disk.
pub fn read_points(path: &Path) -> Result<Array2<f64>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::Other(format!("cannot read {}: {e}", path.display())))?;
    parse_points(&text)
}

/// Render a matrix with 4 decimal places per entry.
pub fn format_matrix(m: &Array2<f64>) -> String {
    m.rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{v:.4}"))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
