//! Badge types shipped with the dashboard.

use std::sync::Arc;

use contracts::lovelace::{ConfigFormSchema, FormField, Selector};

use super::badge_element::BadgeElementClass;

pub fn entity_badge_schema() -> ConfigFormSchema {
    ConfigFormSchema::new(vec![
        FormField::new("entity", Selector::Entity { domain: None }).required(),
        FormField::new("name", Selector::Text),
        FormField::new("icon", Selector::Icon),
        FormField::new("color", Selector::UiColor),
        FormField::new("show_name", Selector::Boolean),
        FormField::new("show_state", Selector::Boolean),
        FormField::new("show_icon", Selector::Boolean),
    ])
}

pub fn builtin_badges() -> Vec<BadgeElementClass> {
    vec![
        BadgeElementClass::new("entity").with_config_form(Arc::new(entity_badge_schema)),
        // Shown in place of badges that failed to load; nothing to edit visually.
        BadgeElementClass::new("error"),
    ]
}
