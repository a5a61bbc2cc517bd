//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: Tool discovery, the registry and the built-in catalogue
//! - **routing**: Navigation paths and the active tool
//! - **preferences**: Persisted tool-list customization and theme

pub mod preferences;
pub mod routing;
pub mod tools;
