//! Error types for jv-matching

use thiserror::Error;

/// Result type alias using the crate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported before any matching work starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The cost matrix has no rows or no columns
    #[error("Cost matrix is empty")]
    Empty,

    /// The cost matrix is rectangular
    #[error("Cost matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// A row of a nested-slice cost matrix differs in length from the first row
    #[error("Row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        /// Offending row
        row: usize,
        /// Its length
        len: usize,
        /// Length of row 0
        expected: usize,
    },

    /// NaN or infinite cost
    #[error("Non-finite cost at ({row}, {col})")]
    NonFinite {
        /// Row of the entry
        row: usize,
        /// Column of the entry
        col: usize,
    },

    /// Zero-test tolerance is negative, NaN or infinite
    #[error("Invalid tolerance: epsilon must be finite and non-negative")]
    InvalidEpsilon,
}
