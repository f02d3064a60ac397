//! Editor state owned by the element editor shell.
//!
//! Kept free of signals so the editing rules can be exercised without a
//! reactive runtime.

use contracts::lovelace::{ConfigFormSchema, LovelaceBadgeConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::EditorError;
use crate::shared::i18n::Localizer;

/// A configuration the shell can edit
pub trait ElementConfig:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Type used to resolve the editor, `None` until one is chosen
    fn element_type(&self) -> Option<&str>;

    /// Type-specific fields edited by schema forms
    fn options(&self) -> &Map<String, Value>;

    fn set_options(&mut self, options: Map<String, Value>);
}

impl ElementConfig for LovelaceBadgeConfig {
    fn element_type(&self) -> Option<&str> {
        LovelaceBadgeConfig::element_type(self)
    }

    fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    fn set_options(&mut self, options: Map<String, Value>) {
        self.options = options;
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Gui,
    Code,
}

/// What the resolver found for the current element type
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EditorCapabilities {
    pub has_config_element: bool,
    pub config_form: Option<ConfigFormSchema>,
}

/// Which default content the GUI mode shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Loading,
    ConfigElement,
    Form,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorWarning {
    EditorNotAvailable { element_type: String },
    KeyNotExpected { key: String },
}

impl EditorWarning {
    pub fn message(&self, localizer: &Localizer) -> String {
        match self {
            EditorWarning::EditorNotAvailable { element_type } => localizer.localize_with(
                "ui.errors.config.editor_not_available",
                &[("type", element_type.as_str())],
            ),
            EditorWarning::KeyNotExpected { key } => {
                localizer.localize_with("ui.errors.config.key_not_expected", &[("key", key.as_str())])
            }
        }
    }
}

/// Outward notification published whenever the owned value changes
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigChanged<T> {
    pub config: T,
    pub error: Option<String>,
    pub gui_mode_available: bool,
}

#[derive(Clone, Debug)]
pub struct ElementEditorState<T> {
    value: T,
    mode: EditorMode,
    /// Text typed into the code editor, kept verbatim while it differs from `value`
    code: Option<String>,
    error: Option<String>,
    /// `None` while the current element type is being resolved
    capabilities: Option<EditorCapabilities>,
}

impl<T: ElementConfig> ElementEditorState<T> {
    pub fn new(value: T, mode: EditorMode) -> Self {
        Self {
            value,
            mode,
            code: None,
            error: None,
            capabilities: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn element_type(&self) -> Option<&str> {
        self.value.element_type()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the type has a visual editor that covers the whole config.
    /// Published with every change; a fallback or a form with unexpected
    /// keys reports `false` without leaving GUI mode.
    pub fn gui_mode_available(&self) -> bool {
        self.error.is_none()
            && matches!(self.content_kind(), ContentKind::ConfigElement | ContentKind::Form)
            && self.warnings().is_empty()
    }

    /// Mode actually shown: code while the typed config has errors
    pub fn mode(&self) -> EditorMode {
        if self.error.is_some() {
            EditorMode::Code
        } else {
            self.mode
        }
    }

    pub fn config_form(&self) -> Option<&ConfigFormSchema> {
        self.capabilities.as_ref()?.config_form.as_ref()
    }

    /// Replaces the owned value. Deep-equal values are ignored.
    pub fn set_value(&mut self, value: T) -> Option<ConfigChanged<T>> {
        if value == self.value {
            return None;
        }
        if value.element_type() != self.value.element_type() {
            self.capabilities = None;
        }
        self.value = value;
        self.code = None;
        self.error = None;
        Some(self.notification())
    }

    /// Records a resolution result. Results for a type that is no longer
    /// current are dropped and `false` is returned.
    pub fn set_capabilities(&mut self, element_type: &str, capabilities: EditorCapabilities) -> bool {
        if self.element_type() != Some(element_type) {
            return false;
        }
        self.capabilities = Some(capabilities);
        true
    }

    /// A blank type is never resolved, so it goes straight to the fallback
    pub fn content_kind(&self) -> ContentKind {
        if self.element_type().is_none() {
            return ContentKind::Fallback;
        }
        match &self.capabilities {
            None => ContentKind::Loading,
            Some(c) if c.has_config_element => ContentKind::ConfigElement,
            Some(c) if c.config_form.is_some() => ContentKind::Form,
            Some(_) => ContentKind::Fallback,
        }
    }

    pub fn warnings(&self) -> Vec<EditorWarning> {
        match self.content_kind() {
            ContentKind::Fallback => self
                .element_type()
                .map(|ty| EditorWarning::EditorNotAvailable {
                    element_type: ty.to_string(),
                })
                .into_iter()
                .collect(),
            ContentKind::Form => self
                .config_form()
                .map(|schema| schema.unexpected_keys(self.value.options()))
                .unwrap_or_default()
                .into_iter()
                .map(|key| EditorWarning::KeyNotExpected { key })
                .collect(),
            ContentKind::Loading | ContentKind::ConfigElement => Vec::new(),
        }
    }

    /// Text for the code editor
    pub fn code_text(&self) -> String {
        match &self.code {
            Some(code) => code.clone(),
            None => serde_json::to_string_pretty(&self.value).unwrap_or_default(),
        }
    }

    /// Applies text typed into the code editor. Invalid text keeps the
    /// current value and records the error.
    pub fn handle_code_changed(&mut self, text: String) -> ConfigChanged<T> {
        match parse_config::<T>(&text) {
            Ok(config) => {
                if config.element_type() != self.value.element_type() {
                    self.capabilities = None;
                }
                self.value = config;
                self.error = None;
            }
            Err(err) => {
                log::warn!("code editor: {}", err);
                self.error = Some(err.to_string());
            }
        }
        self.code = Some(text);
        self.notification()
    }

    /// Switches between GUI and code mode. Returns `false` while a code
    /// error is pending.
    pub fn toggle_mode(&mut self) -> bool {
        match self.mode() {
            EditorMode::Gui => {
                self.mode = EditorMode::Code;
            }
            EditorMode::Code => {
                if self.error.is_some() {
                    return false;
                }
                self.mode = EditorMode::Gui;
            }
        }
        self.code = None;
        true
    }

    fn notification(&self) -> ConfigChanged<T> {
        ConfigChanged {
            config: self.value.clone(),
            error: self.error.clone(),
            gui_mode_available: self.gui_mode_available(),
        }
    }
}

/// Parses code editor text into a config
pub fn parse_config<T: ElementConfig>(text: &str) -> Result<T, EditorError> {
    let raw: Value = serde_json::from_str(text)?;
    let object = raw.as_object().ok_or(EditorError::NotAnObject)?;
    if !object.get("type").is_some_and(Value::is_string) {
        return Err(EditorError::MissingType);
    }
    Ok(serde_json::from_value(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::lovelace::{FormField, Selector};

    fn entity_badge() -> LovelaceBadgeConfig {
        LovelaceBadgeConfig::new("entity").with_option("entity", "sun.sun")
    }

    fn entity_form() -> ConfigFormSchema {
        ConfigFormSchema::new(vec![
            FormField::new("entity", Selector::Entity { domain: None }),
            FormField::new("name", Selector::Text),
        ])
    }

    fn resolved_state() -> ElementEditorState<LovelaceBadgeConfig> {
        let mut state = ElementEditorState::new(entity_badge(), EditorMode::Gui);
        state.set_capabilities(
            "entity",
            EditorCapabilities {
                has_config_element: false,
                config_form: Some(entity_form()),
            },
        );
        state
    }

    #[test]
    fn test_equal_value_is_ignored() {
        let mut state = resolved_state();
        assert_eq!(state.set_value(entity_badge()), None);
    }

    #[test]
    fn test_set_value_notifies() {
        let mut state = resolved_state();
        let next = entity_badge().with_option("name", "Sun");
        let changed = state.set_value(next.clone()).unwrap();

        assert_eq!(changed.config, next);
        assert_eq!(changed.error, None);
        assert!(changed.gui_mode_available);
        assert_eq!(state.value(), &next);
        // same type, capabilities survive
        assert_eq!(state.content_kind(), ContentKind::Form);
    }

    #[test]
    fn test_type_change_resets_capabilities() {
        let mut state = resolved_state();
        state.set_value(LovelaceBadgeConfig::new("error"));
        assert_eq!(state.content_kind(), ContentKind::Loading);
    }

    #[test]
    fn test_stale_capabilities_are_dropped() {
        let mut state = ElementEditorState::new(entity_badge(), EditorMode::Gui);
        state.set_value(LovelaceBadgeConfig::new("custom:clock"));

        assert!(!state.set_capabilities("entity", EditorCapabilities::default()));
        assert_eq!(state.content_kind(), ContentKind::Loading);
    }

    #[test]
    fn test_content_kind_precedence() {
        let mut state = ElementEditorState::new(entity_badge(), EditorMode::Gui);
        state.set_capabilities(
            "entity",
            EditorCapabilities {
                has_config_element: true,
                config_form: Some(entity_form()),
            },
        );
        assert_eq!(state.content_kind(), ContentKind::ConfigElement);
        assert!(state.gui_mode_available());
    }

    #[test]
    fn test_fallback_warns_and_reports_no_gui() {
        let mut state = ElementEditorState::new(LovelaceBadgeConfig::new("error"), EditorMode::Gui);
        state.set_capabilities("error", EditorCapabilities::default());

        assert_eq!(state.content_kind(), ContentKind::Fallback);
        assert_eq!(state.error(), None);
        // code editor is shown inline, the editor itself stays in GUI mode
        assert_eq!(state.mode(), EditorMode::Gui);
        assert_eq!(
            state.warnings(),
            vec![EditorWarning::EditorNotAvailable {
                element_type: "error".into()
            }]
        );

        let changed = state
            .set_value(LovelaceBadgeConfig::new("error").with_option("x", 1))
            .unwrap();
        assert_eq!(changed.error, None);
        assert!(!changed.gui_mode_available);
        assert_eq!(state.content_kind(), ContentKind::Fallback);
    }

    #[test]
    fn test_unexpected_keys_warn() {
        let mut state = resolved_state();
        let changed = state
            .set_value(entity_badge().with_option("tap_action", "none"))
            .unwrap();

        assert_eq!(
            state.warnings(),
            vec![EditorWarning::KeyNotExpected {
                key: "tap_action".into()
            }]
        );
        assert!(!changed.gui_mode_available);
        assert_eq!(state.mode(), EditorMode::Gui);
    }

    #[test]
    fn test_gui_unknown_while_loading() {
        let state = ElementEditorState::new(entity_badge(), EditorMode::Gui);
        assert_eq!(state.content_kind(), ContentKind::Loading);
        assert!(!state.gui_mode_available());
    }

    #[test]
    fn test_blank_type_falls_back() {
        let mut state = resolved_state();
        assert!(state.toggle_mode());
        let changed = state.handle_code_changed(r#"{"type": ""}"#.to_string());

        assert_eq!(changed.error, None);
        assert!(!changed.gui_mode_available);
        assert!(state.toggle_mode());
        assert_eq!(state.mode(), EditorMode::Gui);
        assert_eq!(state.content_kind(), ContentKind::Fallback);
        assert!(state.warnings().is_empty());
    }

    #[test]
    fn test_code_error_keeps_value_and_blocks_gui() {
        let mut state = resolved_state();
        let changed = state.handle_code_changed("{\"type\": ".to_string());

        assert_eq!(changed.config, entity_badge());
        assert!(changed.error.is_some());
        assert!(!changed.gui_mode_available);
        assert_eq!(state.mode(), EditorMode::Code);
        assert!(!state.toggle_mode());
        assert_eq!(state.code_text(), "{\"type\": ");
    }

    #[test]
    fn test_code_change_applies_value() {
        let mut state = resolved_state();
        let changed =
            state.handle_code_changed(r#"{"type": "entity", "entity": "light.hall"}"#.to_string());

        assert_eq!(changed.error, None);
        assert_eq!(
            changed.config,
            LovelaceBadgeConfig::new("entity").with_option("entity", "light.hall")
        );
        assert_eq!(state.value(), &changed.config);
    }

    #[test]
    fn test_parse_config_errors() {
        assert!(matches!(
            parse_config::<LovelaceBadgeConfig>("[1]"),
            Err(EditorError::NotAnObject)
        ));
        assert!(matches!(
            parse_config::<LovelaceBadgeConfig>(r#"{"entity": "x"}"#),
            Err(EditorError::MissingType)
        ));
        assert!(matches!(
            parse_config::<LovelaceBadgeConfig>("nope"),
            Err(EditorError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_toggle_mode_regenerates_code() {
        let mut state = resolved_state();
        assert!(state.toggle_mode());
        assert_eq!(state.mode(), EditorMode::Code);
        assert!(state.code_text().contains("\"entity\": \"sun.sun\""));
        assert!(state.toggle_mode());
        assert_eq!(state.mode(), EditorMode::Gui);
    }

    #[test]
    fn test_warning_messages_are_localized() {
        let l = Localizer::default();
        let warning = EditorWarning::KeyNotExpected { key: "foo".into() };
        assert_eq!(
            warning.message(&l),
            "Key \"foo\" is not expected or not supported by the visual editor."
        );
    }
}
