//! Error types for percolation-grid.

use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor argument was zero or negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A row or column fell outside `1..=size`.
    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}
