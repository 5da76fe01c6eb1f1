//! Persisted extension settings.
//!
//! Stored as one JSON object under [`SETTINGS_KEY`]. Every field has a
//! default so partial objects (older installs, the options page writing only
//! `enabled`) still decode.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Storage key of the settings object.
pub const SETTINGS_KEY: &str = "settings";

/// Theme written on install. The options page may store any other name.
pub const DEFAULT_THEME: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Master switch. When off, pages do not preload the class table.
    pub enabled: bool,
    pub inspect_mode: bool,
    pub show_on_hover: bool,
    pub theme: String,
    /// Keys this version does not know, carried through a save untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            inspect_mode: false,
            show_on_hover: true,
            theme: DEFAULT_THEME.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::settings(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::settings(e.to_string()))
    }
}

/// The external key/value storage collaborator.
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Settings>>;
    fn save(&mut self, settings: &Settings) -> Result<()>;

    /// Stored settings, or the defaults when none (or unreadable) are stored.
    fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                log::warn!("could not read settings, using defaults: {e}");
                Settings::default()
            }
        }
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: Option<Settings>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.settings = Some(settings.clone());
        Ok(())
    }
}

/// A JSON file holding `{"settings": {...}}`, mirroring the browser store
/// layout.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default)]
    settings: Option<Settings>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        let stored: StoredSettings = serde_json::from_str(&text)
            .map_err(|e| Error::settings(format!("{}: {e}", self.path.display())))?;
        Ok(stored.settings)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        let stored = StoredSettings {
            settings: Some(settings.clone()),
        };
        let text =
            serde_json::to_string_pretty(&stored).map_err(|e| Error::settings(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Options page save: update `enabled`, keep the other fields.
pub fn save_enabled(store: &mut dyn SettingsStore, enabled: bool) -> Result<Settings> {
    let mut settings = store.load()?.unwrap_or_default();
    settings.enabled = enabled;
    store.save(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_install() {
        let s = Settings::default();
        assert!(s.enabled);
        assert!(!s.inspect_mode);
        assert!(s.show_on_hover);
        assert_eq!(s.theme, "auto");
    }

    #[test]
    fn camel_case_wire_format() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "enabled": true,
                "inspectMode": false,
                "showOnHover": true,
                "theme": "auto"
            })
        );
    }

    #[test]
    fn partial_object_fills_defaults() {
        let s = Settings::from_json(r#"{"enabled": false}"#).unwrap();
        assert!(!s.enabled);
        assert!(s.show_on_hover);
        assert_eq!(s.theme, "auto");
    }

    #[test]
    fn unknown_theme_and_keys_survive_a_save() {
        let s = Settings::from_json(r#"{"enabled": false, "theme": "system", "fontSize": 14}"#)
            .unwrap();
        assert!(!s.enabled);
        assert_eq!(s.theme, "system");

        let mut store = MemoryStore::with(s);
        let saved = save_enabled(&mut store, true).unwrap();
        assert!(saved.enabled);
        assert_eq!(
            serde_json::to_value(&saved).unwrap(),
            serde_json::json!({
                "enabled": true,
                "inspectMode": false,
                "showOnHover": true,
                "theme": "system",
                "fontSize": 14
            })
        );
    }

    #[test]
    fn save_enabled_preserves_other_fields() {
        let mut store = MemoryStore::with(Settings {
            theme: "dark".to_string(),
            ..Settings::default()
        });
        let saved = save_enabled(&mut store, false).unwrap();
        assert!(!saved.enabled);
        assert_eq!(saved.theme, "dark");
        assert_eq!(store.load().unwrap(), Some(saved));
    }

    #[test]
    fn empty_store_loads_defaults() {
        assert_eq!(MemoryStore::new().load_or_default(), Settings::default());
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("twl-settings-{}.json", std::process::id()));
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), None);

        save_enabled(&mut store, false).unwrap();
        let loaded = store.load().unwrap().expect("settings were saved");
        assert!(!loaded.enabled);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn file_store_keeps_disabled_with_custom_theme() {
        let path = std::env::temp_dir().join(format!("twl-theme-{}.json", std::process::id()));
        fs::write(&path, r#"{"settings":{"enabled":false,"theme":"system"}}"#).unwrap();

        let loaded = JsonFileStore::new(&path).load_or_default();
        assert!(!loaded.enabled);
        assert_eq!(loaded.theme, "system");

        let _ = fs::remove_file(&path);
    }
}
