//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool discovery and lookup.
///
/// Cloneable so a single load pass can hand the same outcome to every
/// caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A single tool module failed to produce its descriptor.
    #[error("Failed to load tool module '{path}': {reason}")]
    ModuleLoad { path: String, reason: String },

    /// Tool modules could not be enumerated; the whole pass failed.
    #[error("Tool discovery failed: {0}")]
    Discovery(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a new "module load" error.
    pub fn module_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModuleLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "discovery" error.
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
