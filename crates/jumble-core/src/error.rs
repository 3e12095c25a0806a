//! Error types for jumble-core.

use thiserror::Error;

/// Error type for jumble-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid block size: {0} samples (need at least 2)")]
    InvalidBlockSize(usize),

    #[error("Channel length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
