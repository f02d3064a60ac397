//! Localization lookup.
//!
//! Strings are resolved by key against a per-language table. Unknown keys
//! fall back to English, then to the key itself, so a label is never empty.

mod en;

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct Localizer {
    language: String,
    overrides: Arc<HashMap<String, String>>,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Localizer {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            overrides: Arc::new(HashMap::new()),
        }
    }

    /// Adds strings on top of the built-in table, such as labels of custom badge editors
    pub fn with_overrides(mut self, strings: HashMap<String, String>) -> Self {
        let mut merged = (*self.overrides).clone();
        merged.extend(strings);
        self.overrides = Arc::new(merged);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn localize(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        // Only English ships with the editor for now.
        match en::lookup(key) {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }

    /// Like [`Localizer::localize`], replacing `{name}` placeholders
    pub fn localize_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.localize(key), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

/// Localizer from context, English when none was provided
pub fn use_localizer() -> Localizer {
    use_context::<Localizer>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        let l = Localizer::default();
        assert_eq!(
            l.localize("ui.panel.lovelace.editor.edit_badge.tab_visibility"),
            "Visibility"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let l = Localizer::new("de");
        assert_eq!(l.localize("some.missing.key"), "some.missing.key");
        assert_eq!(
            l.localize("ui.panel.lovelace.editor.edit_badge.tab_config"),
            "Config"
        );
    }

    #[test]
    fn test_placeholders() {
        let l = Localizer::default();
        assert_eq!(
            l.localize_with("ui.errors.config.editor_not_available", &[("type", "error")]),
            "No visual editor available for type \"error\"."
        );
    }

    #[test]
    fn test_overrides_win() {
        let l = Localizer::default().with_overrides(HashMap::from([(
            "ui.panel.lovelace.editor.edit_badge.tab_config".to_string(),
            "Settings".to_string(),
        )]));
        assert_eq!(
            l.localize("ui.panel.lovelace.editor.edit_badge.tab_config"),
            "Settings"
        );
    }
}
