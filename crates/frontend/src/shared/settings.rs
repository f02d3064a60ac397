//! Editor settings, read once at startup from localStorage.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::lovelace::editor::element_editor::EditorMode;

const SETTINGS_KEY: &str = "badge_editor_settings";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Mode the element editor opens in
    pub initial_mode: EditorMode,
    pub language: String,
    /// One of "error", "warn", "info", "debug", "trace"
    pub log_level: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            initial_mode: EditorMode::Gui,
            language: "en".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl EditorSettings {
    /// Parses settings JSON, falling back to defaults on any error
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Load settings from localStorage
pub fn load_settings() -> EditorSettings {
    get_local_storage()
        .and_then(|storage| storage.get_item(SETTINGS_KEY).ok()?)
        .map(|raw| EditorSettings::from_json(&raw))
        .unwrap_or_default()
}

/// Settings from context, defaults when none were provided
pub fn use_settings() -> EditorSettings {
    use_context::<EditorSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = EditorSettings::from_json(r#"{"initial_mode": "code"}"#);
        assert_eq!(settings.initial_mode, EditorMode::Code);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_invalid_json_gives_defaults() {
        assert_eq!(EditorSettings::from_json("{oops"), EditorSettings::default());
    }

    #[test]
    fn test_log_level() {
        let settings = EditorSettings::from_json(r#"{"log_level": "warn"}"#);
        assert_eq!(settings.log_level(), log::Level::Warn);
        let settings = EditorSettings::from_json(r#"{"log_level": "loud"}"#);
        assert_eq!(settings.log_level(), log::Level::Debug);
    }
}
