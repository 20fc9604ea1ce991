//! Error types for the wordgrid library.
//!
//! All fallible operations return [`Result`], and every failure is a variant
//! of [`WordGridError`]. The only errors the engine itself can produce are
//! the grid construction failures; the search phase never fails.
//!
//! # Examples
//!
//! ```
//! use wordgrid::error::WordGridError;
//! use wordgrid::grid::GridIndex;
//!
//! let rows: Vec<&str> = Vec::new();
//! match GridIndex::new(&rows) {
//!     Err(WordGridError::EmptyMatrix) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::grid::{MAX_GRID_ROWS, MAX_ROW_LEN};

/// The main error type for wordgrid operations.
///
/// Each grid validation failure is a distinct variant carrying the offending
/// row index or size, so callers can act without re-inspecting their input.
#[derive(Error, Debug)]
pub enum WordGridError {
    /// No grid was supplied at all.
    #[error("no grid was supplied")]
    NullInput,

    /// The grid row sequence was empty.
    #[error("grid must contain at least one row")]
    EmptyMatrix,

    /// The grid has more rows than the engine supports.
    #[error("grid has {rows} rows, exceeding the maximum of {max}", max = MAX_GRID_ROWS)]
    MatrixTooLarge {
        /// Number of rows in the rejected input.
        rows: usize,
    },

    /// A grid row is longer than the engine supports.
    #[error("row {row} has {len} characters, exceeding the maximum of {max}", max = MAX_ROW_LEN)]
    RowTooLong {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },

    /// A grid row's length differs from the first row's.
    #[error("row {row} has {len} characters but every row must have {expected}")]
    NonUniformRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// Failed to build the search thread pool.
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(String),

    /// I/O errors from the grid and word stream loaders.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors from the output layer.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with [`WordGridError`].
pub type Result<T> = std::result::Result<T, WordGridError>;
