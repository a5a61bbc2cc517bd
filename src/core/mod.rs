//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks of the toolbox:
//! error handling, configuration, the application context that wires the
//! domain services together, identifier utilities and manifest path checks.

pub mod config;
pub mod context;
pub mod error;
pub mod ids;
pub mod security;

pub use config::Config;
pub use context::AppContext;
pub use error::{Error, Result};
pub use ids::{generate_random_uuid, is_valid_uuid, string_to_uuid};
pub use security::{PathSecurityError, validate_manifest_path};
