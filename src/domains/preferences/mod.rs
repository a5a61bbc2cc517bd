//! Preferences domain module.
//!
//! Client-side state that survives restarts: how the user arranges the tool
//! list and which theme is shown.
//!
//! - `model.rs` - Preference record and its pure operations
//! - `store.rs` - Persisted preference store
//! - `theme.rs` - Theme mode and the "follow system" flag
//! - `storage.rs` - Key/value storage backends
//! - `error.rs` - Storage error types

mod error;
pub mod model;
mod storage;
mod store;
pub mod theme;

pub use error::StorageError;
pub use model::{LAST_USED_CAPACITY, UsageEntry, UserToolPreferences};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{PREFERENCES_KEY, PreferenceStore};
pub use theme::{ThemeMode, ThemeSettings};
