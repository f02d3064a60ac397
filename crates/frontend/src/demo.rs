//! Playground page: pick a badge type, edit it, watch the resulting config.

use std::collections::HashMap;
use std::sync::Arc;

use contracts::lovelace::{FormField, LovelaceBadgeConfig, Selector};
use leptos::prelude::*;
use serde_json::Value;

use crate::lovelace::create_element::{BadgeElementClass, BadgeRegistry};
use crate::lovelace::editor::badge_editor::BadgeElementEditor;
use crate::lovelace::editor::element_editor::{ConfigChanged, ConfigEditorProps};
use crate::lovelace::editor::form_editor::apply_field;
use crate::shared::components::ui::{Alert, Input, Select};
use crate::shared::i18n::use_localizer;

pub const COUNTER_BADGE_TYPE: &str = "custom:counter-badge";

const COUNTER_LABEL_KEY: &str = "custom.counter_badge.label";
const COUNTER_STEP_KEY: &str = "custom.counter_badge.step";

/// Strings the counter badge editor adds to the built-in table
pub fn demo_strings() -> HashMap<String, String> {
    HashMap::from([
        (COUNTER_LABEL_KEY.to_string(), "Label".to_string()),
        (COUNTER_STEP_KEY.to_string(), "Step".to_string()),
    ])
}

/// Registers the badges only the playground knows about
pub fn register_demo_badges(registry: &BadgeRegistry) {
    let counter = BadgeElementClass::new(COUNTER_BADGE_TYPE)
        .with_config_element(Arc::new(counter_badge_editor));
    if let Err(err) = registry.register_custom(counter) {
        log::error!("Failed to register demo badge: {}", err);
    }
}

/// Starting config for a freshly picked badge type
pub fn sample_config(badge_type: &str) -> LovelaceBadgeConfig {
    match badge_type {
        "entity" => LovelaceBadgeConfig::new("entity")
            .with_option("entity", "sun.sun")
            .with_option("show_name", true),
        COUNTER_BADGE_TYPE => LovelaceBadgeConfig::new(COUNTER_BADGE_TYPE)
            .with_option("label", "Visitors")
            .with_option("step", 1),
        other => LovelaceBadgeConfig::new(other),
    }
}

fn counter_badge_editor(props: ConfigEditorProps<LovelaceBadgeConfig>) -> AnyView {
    view! { <CounterBadgeEditor value=props.value on_change=props.on_change /> }.into_any()
}

#[component]
fn CounterBadgeEditor(
    value: Signal<LovelaceBadgeConfig>,
    on_change: Callback<LovelaceBadgeConfig>,
) -> impl IntoView {
    let localizer = use_localizer();
    let label_field = FormField::new("label", Selector::Text);
    let step_field = FormField::new("step", Selector::Text);

    let label_read = label_field.clone();
    let step_read = step_field.clone();

    view! {
        <div class="counter-badge-editor">
            <Input
                label=localizer.localize(COUNTER_LABEL_KEY)
                value=Signal::derive(move || value.with(|c| label_read.read_text(&c.options)))
                on_input=Callback::new(move |text: String| {
                    on_change.run(apply_field(&value.get_untracked(), &label_field, Value::String(text)));
                })
            />
            <Input
                label=localizer.localize(COUNTER_STEP_KEY)
                input_type="number".to_string()
                value=Signal::derive(move || value.with(|c| step_read.read_text(&c.options)))
                on_input=Callback::new(move |text: String| {
                    let step = text.trim().parse::<i64>().map(Value::from).unwrap_or(Value::Null);
                    on_change.run(apply_field(&value.get_untracked(), &step_field, step));
                })
            />
        </div>
    }
}

#[component]
pub fn BadgeEditorPage(registry: BadgeRegistry) -> impl IntoView {
    let language = use_localizer().language().to_string();
    let value = RwSignal::new(sample_config("entity"));
    let last_error = RwSignal::new(None::<String>);

    let type_options: Vec<(String, String)> = registry
        .badge_types()
        .into_iter()
        .map(|ty| (ty.clone(), ty))
        .collect();

    let on_config_changed = Callback::new(move |changed: ConfigChanged<LovelaceBadgeConfig>| {
        log::debug!(
            "badge config changed (gui available: {})",
            changed.gui_mode_available
        );
        last_error.set(changed.error);
    });

    view! {
        <div class="badge-editor-page" lang=language>
            <h2 class="badge-editor-page__title">"Edit badge"</h2>
            <Select
                label="Badge type".to_string()
                value=Signal::derive(move || value.with(|c| c.badge_type.clone()))
                options=Signal::derive(move || type_options.clone())
                on_change=Callback::new(move |ty: String| value.set(sample_config(&ty)))
            />
            <BadgeElementEditor value=value on_config_changed=on_config_changed />
            {move || last_error.get().map(|err| view! {
                <Alert alert_type="error".to_string()>{err}</Alert>
            })}
            <pre class="badge-editor-page__preview">
                {move || value.with(|c| serde_json::to_string_pretty(c).unwrap_or_default())}
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lovelace::create_element::{BadgeConfigResolver, BadgeElementResolver};
    use crate::lovelace::editor::element_editor::ConfigResolver;
    use crate::shared::i18n::Localizer;
    use futures::executor::block_on;

    #[test]
    fn test_demo_badge_has_custom_editor() {
        let registry = BadgeRegistry::with_builtins();
        register_demo_badges(&registry);

        let class = block_on(registry.get_badge_element_class(COUNTER_BADGE_TYPE)).unwrap();
        assert!(class.is_custom());

        let resolver = BadgeConfigResolver::new(Arc::new(registry));
        assert!(block_on(resolver.get_config_element(COUNTER_BADGE_TYPE)).is_some());
    }

    #[test]
    fn test_counter_editor_labels_come_from_demo_strings() {
        let plain = Localizer::default();
        assert_eq!(plain.localize(COUNTER_STEP_KEY), COUNTER_STEP_KEY);

        let localizer = Localizer::default().with_overrides(demo_strings());
        assert_eq!(localizer.localize(COUNTER_LABEL_KEY), "Label");
        assert_eq!(localizer.localize(COUNTER_STEP_KEY), "Step");
        // built-in strings are still there
        assert_eq!(
            localizer.localize("ui.panel.lovelace.editor.edit_badge.tab_config"),
            "Config"
        );
    }

    #[test]
    fn test_sample_configs_keep_type() {
        for ty in ["entity", "error", COUNTER_BADGE_TYPE] {
            assert_eq!(sample_config(ty).badge_type, ty);
        }
    }
}
