//! Application context and lifecycle wiring.
//!
//! The context owns one instance of every service for the session: the tool
//! registry, the router on top of it, the preference store and the theme
//! settings. Storage is file-backed when a storage directory is configured
//! and in memory otherwise.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::{
    preferences::{FileStorage, MemoryStorage, PreferenceStore, Storage, ThemeSettings},
    routing::Router,
    tools::ToolRegistry,
};

/// Services shared by every front-end of the toolbox.
#[derive(Clone)]
pub struct AppContext {
    config: Arc<Config>,
    router: Arc<Router>,
    preferences: Arc<PreferenceStore>,
    theme: Arc<Mutex<ThemeSettings>>,
}

impl AppContext {
    /// Build the context from `config`.
    ///
    /// `system_prefers_dark` is the host's current color-scheme preference,
    /// used while the theme follows the system.
    #[instrument(skip(config))]
    pub fn new(config: Config, system_prefers_dark: bool) -> Result<Self> {
        config.validate()?;

        let storage: Arc<dyn Storage> = match &config.storage.dir {
            Some(dir) => Arc::new(FileStorage::open(dir)?),
            None => Arc::new(MemoryStorage::new()),
        };

        Ok(Self::with_storage(config, storage, system_prefers_dark))
    }

    /// Build the context over an existing storage backend.
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>, system_prefers_dark: bool) -> Self {
        let config = Arc::new(config);

        let registry = ToolRegistry::from_config(&config);
        let router = Arc::new(Router::new(registry, config.app.title.clone()));
        let preferences = Arc::new(PreferenceStore::load(storage.clone()));
        let theme = Arc::new(Mutex::new(ThemeSettings::load(storage, system_prefers_dark)));

        info!("{} v{} ready", config.app.title, config.app.version);

        Self {
            config,
            router,
            preferences,
            theme,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.router.registry()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn theme(&self) -> &Mutex<ThemeSettings> {
        &self.theme
    }
}
