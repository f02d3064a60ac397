//! Capability lookup for element types.

use std::sync::Arc;

use async_trait::async_trait;
use contracts::lovelace::ConfigFormSchema;
use leptos::prelude::*;

use super::state::ElementConfig;

/// Props handed to a custom config editor
pub struct ConfigEditorProps<T: ElementConfig> {
    pub value: Signal<T>,
    pub on_change: Callback<T>,
}

/// Builds the custom editor view of an element type
pub type ConfigEditorFactory<T> = Arc<dyn Fn(ConfigEditorProps<T>) -> AnyView + Send + Sync>;

/// Builds the declarative form schema of an element type
pub type ConfigFormFactory = Arc<dyn Fn() -> ConfigFormSchema + Send + Sync>;

/// Resolves the optional editing capabilities of an element type.
///
/// Both lookups may suspend while the type is loaded. `None` means the type
/// simply does not offer that capability.
#[async_trait(?Send)]
pub trait ConfigResolver<T: ElementConfig> {
    async fn get_config_element(&self, element_type: &str) -> Option<ConfigEditorFactory<T>>;

    async fn get_config_form(&self, element_type: &str) -> Option<ConfigFormSchema>;
}

pub type SharedResolver<T> = Arc<dyn ConfigResolver<T> + Send + Sync>;
