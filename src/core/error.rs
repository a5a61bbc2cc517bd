//! Error types and handling for the toolbox.
//!
//! Errors raised while building the application context. Domain operations
//! keep their own error types (`ToolError`, `StorageError`).

use thiserror::Error;

/// A specialized Result type for toolbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the toolbox from starting.
///
/// Per-tool load failures never reach this type: they are contained by the
/// registry.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from a preference storage backend.
    #[error("Storage error: {0}")]
    Storage(#[from] crate::domains::preferences::StorageError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
