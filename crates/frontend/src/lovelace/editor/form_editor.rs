//! Schema-driven form for element types that describe their config declaratively.

use contracts::lovelace::config_form::UI_COLORS;
use contracts::lovelace::{ConfigFormSchema, FormField, Selector};
use leptos::prelude::*;
use serde_json::Value;

use super::element_editor::ElementConfig;
use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::i18n::{use_localizer, Localizer};

const LABEL_PREFIX: &str = "ui.panel.lovelace.editor.badge";

fn field_label(localizer: &Localizer, field: &FormField) -> String {
    localizer.localize(&format!("{}.{}", LABEL_PREFIX, field.name))
}

/// Returns `config` with `field` set to `value`
pub fn apply_field<T: ElementConfig>(config: &T, field: &FormField, value: Value) -> T {
    let mut next = config.clone();
    let mut options = next.options().clone();
    field.write(&mut options, value);
    next.set_options(options);
    next
}

#[component]
pub fn ConfigFormEditor<T>(
    schema: ConfigFormSchema,
    #[prop(into)] value: Signal<T>,
    on_change: Callback<T>,
) -> impl IntoView
where
    T: ElementConfig,
{
    let localizer = use_localizer();

    let fields = schema
        .schema
        .into_iter()
        .map(|field| {
            let label = field_label(&localizer, &field);
            let update = {
                let field = field.clone();
                move |v: Value| on_change.run(apply_field(&value.get_untracked(), &field, v))
            };

            match field.selector.clone() {
                Selector::Boolean => {
                    let read = field.clone();
                    view! {
                        <Checkbox
                            label=label
                            checked=Signal::derive(move || value.with(|c| read.read_bool(c.options())))
                            on_change=Callback::new(move |checked: bool| update(Value::Bool(checked)))
                        />
                    }
                    .into_any()
                }
                Selector::Select { options } => {
                    field_select(field, label, options, value, update).into_any()
                }
                Selector::UiColor => {
                    let options = UI_COLORS
                        .iter()
                        .map(|c| (c.to_string(), c.to_string()))
                        .collect();
                    field_select(field, label, options, value, update).into_any()
                }
                Selector::Entity { .. } | Selector::Text | Selector::Icon => {
                    let read = field.clone();
                    let placeholder = match &field.selector {
                        Selector::Entity { domain: Some(domain) } => format!("{}.", domain),
                        Selector::Icon => "mdi:".to_string(),
                        _ => String::new(),
                    };
                    view! {
                        <Input
                            label=label
                            value=Signal::derive(move || value.with(|c| read.read_text(c.options())))
                            placeholder=placeholder
                            required=field.required
                            on_input=Callback::new(move |text: String| update(Value::String(text)))
                        />
                    }
                    .into_any()
                }
            }
        })
        .collect_view();

    view! { <div class="config-form">{fields}</div> }
}

fn field_select<T, F>(
    field: FormField,
    label: String,
    options: Vec<(String, String)>,
    value: Signal<T>,
    update: F,
) -> impl IntoView
where
    T: ElementConfig,
    F: Fn(Value) + Send + Sync + 'static,
{
    view! {
        <Select
            label=label
            value=Signal::derive(move || value.with(|c| field.read_text(c.options())))
            options=Signal::derive(move || options.clone())
            allow_empty=true
            on_change=Callback::new(move |selected: String| update(Value::String(selected)))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::lovelace::LovelaceBadgeConfig;
    use serde_json::json;

    #[test]
    fn test_apply_field_sets_and_clears() {
        let field = FormField::new("name", Selector::Text);
        let config = LovelaceBadgeConfig::new("entity").with_option("entity", "sun.sun");

        let named = apply_field(&config, &field, json!("Sun"));
        assert_eq!(named.options.get("name"), Some(&json!("Sun")));
        assert_eq!(named.options.get("entity"), Some(&json!("sun.sun")));

        let cleared = apply_field(&named, &field, json!(""));
        assert_eq!(cleared, config);
    }

    #[test]
    fn test_apply_field_keeps_visibility() {
        let mut config = LovelaceBadgeConfig::new("entity");
        config.visibility = Some(vec![]);
        let next = apply_field(&config, &FormField::new("show_icon", Selector::Boolean), json!(true));
        assert_eq!(next.visibility, Some(vec![]));
    }

    #[test]
    fn test_field_label_falls_back_to_key() {
        let l = Localizer::default();
        assert_eq!(
            field_label(&l, &FormField::new("show_name", Selector::Boolean)),
            "Show name"
        );
        assert_eq!(
            field_label(&l, &FormField::new("speed", Selector::Text)),
            "ui.panel.lovelace.editor.badge.speed"
        );
    }
}
