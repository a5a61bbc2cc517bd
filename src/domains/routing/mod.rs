//! Routing domain module.
//!
//! Translates navigation paths into tool views and tracks which tool is
//! currently shown.
//!
//! - `route.rs` - Path scheme (`/`, `/tool/<identifier>`, not found)
//! - `router.rs` - Route registration on first navigation and dispatch

pub mod route;
mod router;

pub use route::{Route, TOOL_PREFIX};
pub use router::{Navigation, Router};
