//! Developer Toolbox Library
//!
//! Registry, routing and preference management for a catalogue of small
//! developer tools (formatters, converters, generators, ...).
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling and the application context
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool discovery and the single-flight registry
//!   - **routing**: Path scheme and navigation
//!   - **preferences**: Pinned, favorite, ordered and recent tools; theme
//!
//! # Example
//!
//! ```rust,no_run
//! use dev_toolbox::core::{AppContext, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = AppContext::new(Config::from_env(), false)?;
//!     let nav = ctx.router().navigate("/tool/json").await;
//!     println!("{}", nav.title);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{AppContext, Config, Error, Result};
