//! Light/dark theme selection with an optional "follow the system" mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

use super::storage::Storage;

pub const THEME_MODE_KEY: &str = "app-theme-mode";
pub const THEME_AUTO_KEY: &str = "app-theme-auto";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode '{other}'")),
        }
    }
}

/// Current theme plus the "follow system" flag, persisted under
/// [`THEME_MODE_KEY`] and [`THEME_AUTO_KEY`].
pub struct ThemeSettings {
    storage: Arc<dyn Storage>,
    mode: ThemeMode,
    auto: bool,
    system_prefers_dark: bool,
}

impl ThemeSettings {
    pub fn load(storage: Arc<dyn Storage>, system_prefers_dark: bool) -> Self {
        let auto = match read(&*storage, THEME_AUTO_KEY).as_deref() {
            Some("false") => false,
            Some("true") | None => true,
            Some(other) => {
                warn!("Ignoring stored theme auto flag '{}'", other);
                true
            }
        };

        let saved = read(&*storage, THEME_MODE_KEY)
            .and_then(|raw| match raw.parse::<ThemeMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        let mode = if auto {
            ThemeMode::from_system(system_prefers_dark)
        } else {
            saved
        };
        debug!("Theme {} (auto: {})", mode, auto);

        Self {
            storage,
            mode,
            auto,
            system_prefers_dark,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn auto(&self) -> bool {
        self.auto
    }

    /// Flip the "follow system" flag. Turning it on applies the system theme.
    pub fn toggle_auto(&mut self) -> bool {
        self.auto = !self.auto;
        write(&*self.storage, THEME_AUTO_KEY, bool_str(self.auto));
        if self.auto {
            self.mode = ThemeMode::from_system(self.system_prefers_dark);
        }
        self.auto
    }

    /// Choose a theme explicitly. This stops following the system.
    pub fn change_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        write(&*self.storage, THEME_MODE_KEY, mode.as_str());
        if self.auto {
            self.auto = false;
            write(&*self.storage, THEME_AUTO_KEY, bool_str(false));
        }
    }

    /// The system preference changed. Only applied while following the system.
    pub fn on_system_change(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
        if self.auto {
            self.mode = ThemeMode::from_system(prefers_dark);
        }
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn read(storage: &dyn Storage, key: &str) -> Option<String> {
    storage.get(key).unwrap_or_else(|e| {
        warn!("Cannot read '{}': {}", key, e);
        None
    })
}

fn write(storage: &dyn Storage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        warn!("Cannot persist '{}': {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::preferences::MemoryStorage;

    fn storage_with(entries: &[(&str, &str)]) -> Arc<MemoryStorage> {
        let storage = Arc::new(MemoryStorage::new());
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        storage
    }

    #[test]
    fn test_defaults_follow_system() {
        let theme = ThemeSettings::load(Arc::new(MemoryStorage::new()), true);
        assert!(theme.auto());
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_saved_mode_used_when_auto_off() {
        let storage = storage_with(&[(THEME_AUTO_KEY, "false"), (THEME_MODE_KEY, "dark")]);
        let theme = ThemeSettings::load(storage, false);
        assert!(!theme.auto());
        assert_eq!(theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_saved_mode_ignored_when_auto_on() {
        let storage = storage_with(&[(THEME_MODE_KEY, "dark")]);
        let theme = ThemeSettings::load(storage, false);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_change_mode_turns_auto_off() {
        let storage = Arc::new(MemoryStorage::new());
        let mut theme = ThemeSettings::load(storage.clone(), false);

        theme.change_mode(ThemeMode::Dark);
        assert!(!theme.auto());
        assert_eq!(storage.get(THEME_MODE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.get(THEME_AUTO_KEY).unwrap().as_deref(), Some("false"));

        // System changes no longer apply
        theme.on_system_change(false);
        assert_eq!(theme.mode(), ThemeMode::Dark);

        let reloaded = ThemeSettings::load(storage, false);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_auto_applies_system_theme() {
        let storage = storage_with(&[(THEME_AUTO_KEY, "false"), (THEME_MODE_KEY, "light")]);
        let mut theme = ThemeSettings::load(storage.clone(), true);
        assert_eq!(theme.mode(), ThemeMode::Light);

        assert!(theme.toggle_auto());
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(storage.get(THEME_AUTO_KEY).unwrap().as_deref(), Some("true"));

        theme.on_system_change(false);
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let storage = storage_with(&[(THEME_AUTO_KEY, "maybe"), (THEME_MODE_KEY, "sepia")]);
        let theme = ThemeSettings::load(storage, false);
        assert!(theme.auto());
        assert_eq!(theme.mode(), ThemeMode::Light);
    }
}
