use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the editor shell, never part of a type-specific schema
const RESERVED_KEYS: [&str; 2] = ["type", "visibility"];

/// Declarative description of a badge's configuration fields
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ConfigFormSchema {
    pub schema: Vec<FormField>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    pub selector: Selector,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Selector {
    Entity {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        domain: Option<String>,
    },
    Text,
    Icon,
    Boolean,
    Select {
        /// (value, label) pairs
        options: Vec<(String, String)>,
    },
    UiColor,
}

/// Named colors offered by the `ui_color` selector
pub const UI_COLORS: [&str; 12] = [
    "primary", "accent", "red", "pink", "purple", "blue", "cyan", "teal", "green", "yellow",
    "orange", "grey",
];

impl FormField {
    pub fn new(name: &str, selector: Selector) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            selector,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Current value of the field rendered as text for inputs
    pub fn read_text(&self, options: &Map<String, Value>) -> String {
        match options.get(&self.name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    pub fn read_bool(&self, options: &Map<String, Value>) -> bool {
        options
            .get(&self.name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Writes the field into `options`. An empty string removes the key.
    pub fn write(&self, options: &mut Map<String, Value>, value: Value) {
        match value {
            Value::String(s) if s.is_empty() => {
                options.remove(&self.name);
            }
            Value::Null => {
                options.remove(&self.name);
            }
            value => {
                options.insert(self.name.clone(), value);
            }
        }
    }
}

impl ConfigFormSchema {
    pub fn new(schema: Vec<FormField>) -> Self {
        Self { schema }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.schema.iter().find(|f| f.name == name)
    }

    /// Option keys the schema does not describe, in map order
    pub fn unexpected_keys(&self, options: &Map<String, Value>) -> Vec<String> {
        options
            .keys()
            .filter(|key| !RESERVED_KEYS.contains(&key.as_str()))
            .filter(|key| self.field(key).is_none())
            .cloned()
            .collect()
    }
}
