//! Tools domain module.
//!
//! This module discovers the tools hosted by the toolbox and exposes their
//! metadata. Tools themselves (their UI and algorithms) live elsewhere; here
//! each one is only a descriptor plus the identifier it is stored under.
//!
//! ## Architecture
//!
//! - `definitions/` - Built-in tool definitions, grouped by category
//! - `catalog.rs` - Registration list of the built-in tools
//! - `source.rs` - Module sources (static lists, manifest directories)
//! - `registry.rs` - Single-flight loader and cache with lookup by identifier
//! - `descriptor.rs` - Descriptor, loaded info and the tag vocabulary
//! - `identifier.rs` - Identifier derivation from storage paths
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a definition in `definitions/` implementing `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `catalog.rs`
//!
//! Alternatively drop an `info.json` manifest into `<tools_dir>/<slug>/`.

pub mod catalog;
pub mod definitions;
pub mod descriptor;
mod error;
pub mod identifier;
mod registry;
pub mod source;

pub use catalog::{builtin_modules, builtin_source};
pub use definitions::ToolDefinition;
pub use descriptor::{Icon, LoadedToolInfo, ToolDescriptor, ToolTag, github_username};
pub use error::ToolError;
pub use identifier::derive_identifier;
pub use registry::{ToolList, ToolRegistry};
pub use source::{DescriptorLoader, ManifestDirSource, StaticSource, ToolModule, ToolSource};
