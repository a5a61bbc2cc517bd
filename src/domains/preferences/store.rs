//! Preference store - the in-memory record plus its persistence.
//!
//! Every mutation updates memory first and then writes the whole record
//! under one storage key. A failed write is logged and the in-memory state
//! is kept, so the session stays consistent even without working storage.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::error::StorageError;
use super::model::UserToolPreferences;
use super::storage::Storage;
use crate::domains::tools::LoadedToolInfo;

/// Storage key holding the serialized preferences.
pub const PREFERENCES_KEY: &str = "app-tool-preferences";

/// User preferences for the tool list.
pub struct PreferenceStore {
    storage: Arc<dyn Storage>,
    state: RwLock<UserToolPreferences>,
}

impl PreferenceStore {
    /// Load the record from `storage`.
    ///
    /// A missing key yields defaults. So does an unreadable or corrupt
    /// record, with a warning.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.get(PREFERENCES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserToolPreferences>(&raw) {
                Ok(prefs) => {
                    debug!(
                        "Loaded preferences: {} pinned, {} favorite(s)",
                        prefs.pinned.len(),
                        prefs.favorites.len()
                    );
                    prefs
                }
                Err(e) => {
                    warn!("Ignoring corrupt preferences record: {}", e);
                    UserToolPreferences::default()
                }
            },
            Ok(None) => UserToolPreferences::default(),
            Err(e) => {
                warn!("Cannot read preferences: {}", e);
                UserToolPreferences::default()
            }
        };

        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    #[instrument(skip(self))]
    pub fn toggle_pin(&self, id: &str) -> bool {
        let pinned = self.update(|prefs| prefs.toggle_pin(id));
        info!("Tool '{}' {}", id, if pinned { "pinned" } else { "unpinned" });
        pinned
    }

    #[instrument(skip(self))]
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let favorite = self.update(|prefs| prefs.toggle_favorite(id));
        info!(
            "Tool '{}' {}",
            id,
            if favorite { "added to favorites" } else { "removed from favorites" }
        );
        favorite
    }

    /// Move `from` to the position of `to`. `tools` is the current list in
    /// discovery order. Returns false when nothing moved.
    #[instrument(skip(self, tools))]
    pub fn reorder(&self, from: &str, to: &str, tools: &[LoadedToolInfo]) -> bool {
        let known: Vec<&str> = tools.iter().map(|t| t.id.as_str()).collect();

        let mut state = self.state.write();
        if !state.reorder(from, to, &known) {
            debug!("Reorder of '{}' onto '{}' ignored", from, to);
            return false;
        }
        self.persist(&state);
        true
    }

    pub fn record_usage(&self, id: &str) {
        self.record_usage_at(id, Utc::now());
    }

    pub fn record_usage_at(&self, id: &str, at: DateTime<Utc>) {
        self.update(|prefs| prefs.record_usage(id, at));
    }

    pub fn sorted_view(&self, tools: &[LoadedToolInfo]) -> Vec<LoadedToolInfo> {
        self.state.read().sorted_view(tools)
    }

    pub fn favorites_view(&self, tools: &[LoadedToolInfo]) -> Vec<LoadedToolInfo> {
        self.state.read().favorites_view(tools)
    }

    pub fn recent_view(&self, tools: &[LoadedToolInfo]) -> Vec<(LoadedToolInfo, DateTime<Utc>)> {
        self.state.read().recent_view(tools)
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.state.read().is_pinned(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.read().is_favorite(id)
    }

    /// Copy of the current record.
    pub fn snapshot(&self) -> UserToolPreferences {
        self.state.read().clone()
    }

    /// Reset to defaults and drop the stored record.
    pub fn clear(&self) {
        *self.state.write() = UserToolPreferences::default();
        if let Err(e) = self.storage.remove(PREFERENCES_KEY) {
            warn!("Cannot remove stored preferences: {}", e);
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut UserToolPreferences) -> R) -> R {
        let mut state = self.state.write();
        let result = f(&mut state);
        self.persist(&state);
        result
    }

    fn persist(&self, prefs: &UserToolPreferences) {
        let result = serde_json::to_string(prefs)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set(PREFERENCES_KEY, &raw));

        if let Err(e) = result {
            warn!("Cannot persist preferences, keeping them for this session: {}", e);
        }
    }
}
