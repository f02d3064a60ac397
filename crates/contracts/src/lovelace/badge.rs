use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::condition::Condition;

/// Configuration of a single dashboard badge
///
/// Only `type` and `visibility` are known here. Everything else belongs to the
/// badge type and is kept verbatim in `options`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LovelaceBadgeConfig {
    #[serde(rename = "type")]
    pub badge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Vec<Condition>>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl LovelaceBadgeConfig {
    pub fn new(badge_type: impl Into<String>) -> Self {
        Self {
            badge_type: badge_type.into(),
            visibility: None,
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }

    /// Badge type, `None` while it has not been chosen yet
    pub fn element_type(&self) -> Option<&str> {
        let ty = self.badge_type.trim();
        (!ty.is_empty()).then_some(ty)
    }

    pub fn conditions(&self) -> &[Condition] {
        self.visibility.as_deref().unwrap_or_default()
    }
}
