//! Core error types for Syzygy

use thiserror::Error;

/// Main error type for Syzygy operations
#[derive(Error, Debug)]
pub enum SyzygyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Syzygy operations
pub type SyzygyResult<T> = Result<T, SyzygyError>;

impl From<anyhow::Error> for SyzygyError {
    fn from(err: anyhow::Error) -> Self {
        SyzygyError::Other(err.to_string())
    }
}
