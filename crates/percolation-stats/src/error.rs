//! Error types for percolation-stats.

use thiserror::Error;

/// Result type for experiment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or running an experiment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Grid size or trial count was zero or negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The grid rejected an operation.
    #[error("grid error: {0}")]
    Grid(#[from] percolation_grid::Error),
}
