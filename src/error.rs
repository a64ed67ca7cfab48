//! Error types for aff12 loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when building or loading an aff12 matrix.
#[derive(Debug, Error)]
pub enum Aff12Error {
    /// The in-memory matrix does not have exactly 3 rows and 4 columns.
    #[error("matrix has shape {rows}x{cols}, expected 3x4")]
    Shape { rows: usize, cols: usize },

    /// The file held neither a 3x4 nor a 1x12 table after transposition.
    #[error(
        "{}: table has shape {rows}x{cols}, expected 3x4 (MATRIX) or 1x12 (ONELINE) \
         affine parameters",
        path.display()
    )]
    InputFormat {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },

    /// Table reader failure, passed through unchanged.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Errors raised by the generic numeric table reader.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A token on a data line did not parse as a number.
    #[error("{}:{line}: invalid numeric value '{token}'", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// A data line had a different column count than the first data line.
    #[error(
        "{}:{line}: ragged table, {cols} columns where {expected} expected",
        path.display()
    )]
    Ragged {
        path: PathBuf,
        line: usize,
        cols: usize,
        expected: usize,
    },

    /// The file contained no data lines at all.
    #[error("{}: no numeric data", path.display())]
    Empty { path: PathBuf },
}
