use std::fmt;

use contracts::lovelace::{ConfigFormSchema, LovelaceBadgeConfig};

use crate::lovelace::editor::element_editor::{ConfigEditorFactory, ConfigFormFactory};

/// Prefix of badge types provided at runtime
pub const CUSTOM_TYPE_PREFIX: &str = "custom:";

/// Descriptor of a badge type and the editing capabilities it offers
#[derive(Clone)]
pub struct BadgeElementClass {
    pub badge_type: String,
    pub config_element: Option<ConfigEditorFactory<LovelaceBadgeConfig>>,
    pub config_form: Option<ConfigFormFactory>,
}

impl BadgeElementClass {
    pub fn new(badge_type: &str) -> Self {
        Self {
            badge_type: badge_type.to_string(),
            config_element: None,
            config_form: None,
        }
    }

    pub fn with_config_element(mut self, factory: ConfigEditorFactory<LovelaceBadgeConfig>) -> Self {
        self.config_element = Some(factory);
        self
    }

    pub fn with_config_form(mut self, factory: ConfigFormFactory) -> Self {
        self.config_form = Some(factory);
        self
    }

    pub fn get_config_element(&self) -> Option<ConfigEditorFactory<LovelaceBadgeConfig>> {
        self.config_element.clone()
    }

    pub fn get_config_form(&self) -> Option<ConfigFormSchema> {
        self.config_form.as_ref().map(|factory| factory())
    }

    pub fn is_custom(&self) -> bool {
        self.badge_type.starts_with(CUSTOM_TYPE_PREFIX)
    }
}

impl fmt::Debug for BadgeElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BadgeElementClass")
            .field("badge_type", &self.badge_type)
            .field("config_element", &self.config_element.is_some())
            .field("config_form", &self.config_form.is_some())
            .finish()
    }
}
