use thiserror::Error;

// Unified error type for matrixlib

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("dimension error: {0}")]
    Dimension(String),
    #[error("singular matrix: zero pivot at row {row}")]
    Singular { row: usize },
    #[error("index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinalgError>;
