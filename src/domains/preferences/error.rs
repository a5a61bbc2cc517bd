//! Storage-specific error types.

use thiserror::Error;

/// Errors that can occur while reading or writing client-side storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used as a storage key.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// The backend refused the write (quota, disabled storage, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// An I/O error occurred while accessing the backend.
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// Create a new "invalid key" error.
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    /// Create a new "unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }
}
