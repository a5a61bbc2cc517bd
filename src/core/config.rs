//! Configuration management for the toolbox.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

use super::error::{Error, Result};

/// Main configuration structure for the toolbox.
///
/// This struct contains all configurable aspects of the application,
/// organized by domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application identification and metadata.
    pub app: AppConfig,

    /// Tool discovery configuration.
    pub registry: RegistryConfig,

    /// Client-side storage for preferences and theme settings.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Application identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title appended to every document title.
    pub title: String,

    /// The version of the application.
    pub version: String,
}

/// Configuration for tool discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Whether the built-in tool catalogue is registered.
    pub include_builtin: bool,

    /// Optional directory of manifest tools (`<dir>/<slug>/info.json`).
    pub tools_dir: Option<PathBuf>,
}

/// Configuration for persisted client state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key.
    /// If None, state is kept in memory for the session only.
    pub dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for manifest path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Whether manifest files may be symlinks pointing anywhere.
    /// If false, symlinks pointing outside the tools directory are rejected.
    pub allow_symlinks: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            tools_dir: None,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                title: "Developer Toolbox".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            registry: RegistryConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TOOLBOX_`.
    /// For example: `TOOLBOX_APP_TITLE`, `TOOLBOX_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(title) = std::env::var("TOOLBOX_APP_TITLE") {
            config.app.title = title;
        }

        if let Ok(level) = std::env::var("TOOLBOX_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(builtin) = std::env::var("TOOLBOX_BUILTIN_TOOLS") {
            config.registry.include_builtin = builtin.parse().unwrap_or(true);
        }

        if let Ok(tools_dir) = std::env::var("TOOLBOX_TOOLS_DIR") {
            config.registry.tools_dir = Some(PathBuf::from(tools_dir));
            info!("Manifest tools directory: {:?}", config.registry.tools_dir);
        }

        if let Ok(storage_dir) = std::env::var("TOOLBOX_STORAGE_DIR") {
            config.storage.dir = Some(PathBuf::from(storage_dir));
            info!("Preferences stored in {:?}", config.storage.dir);
        } else {
            warn!(
                "TOOLBOX_STORAGE_DIR not set - preferences and theme settings \
                 will not survive a restart."
            );
        }

        if let Ok(allow_symlinks) = std::env::var("TOOLBOX_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks.parse().unwrap_or(true);
            info!("Symlinks allowed: {}", config.security.allow_symlinks);
        }

        config
    }

    /// Check the configuration for values the application cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.app.title.trim().is_empty() {
            return Err(Error::config("application title must not be empty"));
        }

        if let Some(dir) = &self.storage.dir {
            if dir.is_file() {
                return Err(Error::config(format!(
                    "storage path {} is a file, expected a directory",
                    dir.display()
                )));
            }
        }

        if !self.registry.include_builtin && self.registry.tools_dir.is_none() {
            warn!("Built-in tools disabled and no tools directory configured; the tool list will be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_storage_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_STORAGE_DIR", "/tmp/toolbox-state");
        }
        let config = Config::from_env();
        assert_eq!(
            config.storage.dir.as_deref(),
            Some(std::path::Path::new("/tmp/toolbox-state"))
        );
        unsafe {
            std::env::remove_var("TOOLBOX_STORAGE_DIR");
        }
    }

    #[test]
    fn test_storage_defaults_to_memory() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("TOOLBOX_STORAGE_DIR");
        }
        let config = Config::from_env();
        assert!(config.storage.dir.is_none());
    }

    #[test]
    fn test_builtin_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_BUILTIN_TOOLS", "false");
        }
        let config = Config::from_env();
        assert!(!config.registry.include_builtin);
        unsafe {
            std::env::remove_var("TOOLBOX_BUILTIN_TOOLS");
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.registry.include_builtin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_file_as_storage_dir() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.storage.dir = Some(temp.path().to_path_buf());
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut config = Config::default();
        config.app.title = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
