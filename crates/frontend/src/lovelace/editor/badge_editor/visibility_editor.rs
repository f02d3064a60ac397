use contracts::lovelace::{Condition, LovelaceBadgeConfig};
use leptos::prelude::*;

use crate::lovelace::editor::conditions::ConditionsEditor;
use crate::shared::components::ui::Alert;
use crate::shared::i18n::use_localizer;

/// Returns `config` with its visibility replaced. An empty list removes the key.
pub fn apply_visibility(
    config: &LovelaceBadgeConfig,
    conditions: Vec<Condition>,
) -> LovelaceBadgeConfig {
    let mut next = config.clone();
    next.visibility = (!conditions.is_empty()).then_some(conditions);
    next
}

/// Edits the visibility conditions of a badge and reports the whole new config
#[component]
pub fn BadgeVisibilityEditor(
    #[prop(into)] config: Signal<LovelaceBadgeConfig>,
    on_value_changed: Callback<LovelaceBadgeConfig>,
) -> impl IntoView {
    let localizer = use_localizer();
    let conditions = Signal::derive(move || config.with(|c| c.conditions().to_vec()));

    let on_conditions_changed = Callback::new(move |list: Vec<Condition>| {
        on_value_changed.run(apply_visibility(&config.get_untracked(), list));
    });

    view! {
        <div class="badge-visibility-editor">
            <Alert>
                {localizer.localize("ui.panel.lovelace.editor.edit_badge.visibility.explanation")}
            </Alert>
            <ConditionsEditor conditions=conditions on_change=on_conditions_changed />
        </div>
    }
}
