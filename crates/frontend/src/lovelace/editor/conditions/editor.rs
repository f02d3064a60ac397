use contracts::lovelace::{Condition, ConditionKind};
use leptos::prelude::*;

use super::fields::{field_text, fields_of, with_field, ConditionField};
use super::screen::{breakpoints_for, toggle_breakpoint, Breakpoint};
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::i18n::{use_localizer, Localizer};

const KEY_PREFIX: &str = "ui.panel.lovelace.editor.condition-editor";

fn kind_label(localizer: &Localizer, kind: ConditionKind) -> String {
    localizer.localize(&format!("{}.condition.{}.label", KEY_PREFIX, kind.id()))
}

/// Editable list of conditions. `and` / `or` rows nest another list.
#[component]
pub fn ConditionsEditor(
    #[prop(into)] conditions: Signal<Vec<Condition>>,
    on_change: Callback<Vec<Condition>>,
) -> impl IntoView {
    let localizer = use_localizer();

    let kind_options: Vec<(String, String)> = ConditionKind::ALL
        .into_iter()
        .map(|kind| (kind.id().to_string(), kind_label(&localizer, kind)))
        .collect();
    let add_label = localizer.localize(&format!("{}.add", KEY_PREFIX));

    let add_condition = Callback::new(move |id: String| {
        let Some(kind) = ConditionKind::from_id(&id) else {
            return;
        };
        let mut list = conditions.get_untracked();
        list.push(Condition::default_for(kind));
        on_change.run(list);
    });

    view! {
        <div class="conditions-editor">
            <For
                each=move || 0..conditions.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! { <ConditionRow index=index conditions=conditions on_change=on_change /> }
                }
            />
            // Rebuilt after every change so the picker returns to its empty entry
            {move || {
                conditions.track();
                let options = kind_options.clone();
                view! {
                    <Select
                        label=add_label.clone()
                        value=Signal::derive(String::new)
                        options=Signal::derive(move || options.clone())
                        allow_empty=true
                        on_change=add_condition
                    />
                }
            }}
        </div>
    }
}

#[component]
fn ConditionRow(
    index: usize,
    conditions: Signal<Vec<Condition>>,
    on_change: Callback<Vec<Condition>>,
) -> impl IntoView {
    let localizer = use_localizer();

    let condition = Memo::new(move |_| conditions.with(|list| list.get(index).cloned()));
    let kind = Memo::new(move |_| condition.with(|c| c.as_ref().map(Condition::kind)));

    let replace = Callback::new(move |next: Condition| {
        let mut list = conditions.get_untracked();
        if let Some(slot) = list.get_mut(index) {
            *slot = next;
            on_change.run(list);
        }
    });
    let delete = Callback::new(move |_| {
        let mut list = conditions.get_untracked();
        if index < list.len() {
            list.remove(index);
            on_change.run(list);
        }
    });

    let title = {
        let localizer = localizer.clone();
        move || kind.get().map(|k| kind_label(&localizer, k)).unwrap_or_default()
    };
    let delete_label = localizer.localize(&format!("{}.delete", KEY_PREFIX));

    view! {
        <div class="condition-row">
            <div class="condition-row__header">
                <span class="condition-row__title">{title}</span>
                <Button variant="ghost".to_string() size="sm".to_string() on_click=delete>
                    {delete_label}
                </Button>
            </div>
            <div class="condition-row__body">
                {move || kind.get().map(|k| condition_body(k, condition, replace))}
            </div>
        </div>
    }
}

fn condition_body(
    kind: ConditionKind,
    condition: Memo<Option<Condition>>,
    replace: Callback<Condition>,
) -> AnyView {
    match kind {
        ConditionKind::And | ConditionKind::Or => {
            let children = Signal::derive(move || {
                condition.with(|c| {
                    c.as_ref()
                        .and_then(Condition::children)
                        .map(<[Condition]>::to_vec)
                        .unwrap_or_default()
                })
            });
            let on_children = Callback::new(move |list: Vec<Condition>| {
                if let Some(current) = condition.get_untracked() {
                    replace.run(current.with_children(list));
                }
            });
            view! {
                <div class="condition-row__nested">
                    <ConditionsEditor conditions=children on_change=on_children />
                </div>
            }
            .into_any()
        }
        ConditionKind::Screen => view! {
            <ScreenFields condition=condition replace=replace />
        }
        .into_any(),
        _ => view! { <LeafFields condition=condition replace=replace /> }.into_any(),
    }
}

#[component]
fn LeafFields(condition: Memo<Option<Condition>>, replace: Callback<Condition>) -> impl IntoView {
    let localizer = use_localizer();
    let fields = condition
        .with_untracked(|c| c.as_ref().map(fields_of))
        .unwrap_or_default();

    fields
        .iter()
        .copied()
        .map(|field| field_input(&localizer, field, condition, replace))
        .collect_view()
}

fn field_input(
    localizer: &Localizer,
    field: ConditionField,
    condition: Memo<Option<Condition>>,
    replace: Callback<Condition>,
) -> impl IntoView {
    let input_type = match field {
        ConditionField::Above | ConditionField::Below => "number",
        _ => "text",
    };
    view! {
        <Input
            label=localizer.localize(&field.label_key())
            input_type=input_type.to_string()
            value=Signal::derive(move || {
                condition.with(|c| c.as_ref().map(|c| field_text(c, field)).unwrap_or_default())
            })
            on_input=Callback::new(move |text: String| {
                if let Some(current) = condition.get_untracked() {
                    replace.run(with_field(&current, field, &text));
                }
            })
        />
    }
}

#[component]
fn ScreenFields(condition: Memo<Option<Condition>>, replace: Callback<Condition>) -> impl IntoView {
    let localizer = use_localizer();
    let media_query = Signal::derive(move || {
        condition.with(|c| {
            c.as_ref()
                .map(|c| field_text(c, ConditionField::MediaQuery))
                .unwrap_or_default()
        })
    });

    let checkboxes = Breakpoint::ALL
        .into_iter()
        .map(|bp| {
            let label = localizer.localize(&format!("{}.breakpoint.{}", KEY_PREFIX, bp.id()));
            view! {
                <Checkbox
                    label=label
                    checked=Signal::derive(move || {
                        media_query.with(|q| breakpoints_for(q).is_some_and(|bps| bps.contains(&bp)))
                    })
                    on_change=Callback::new(move |enabled: bool| {
                        let query = toggle_breakpoint(&media_query.get_untracked(), bp, enabled);
                        if let Some(current) = condition.get_untracked() {
                            replace.run(with_field(&current, ConditionField::MediaQuery, &query));
                        }
                    })
                />
            }
        })
        .collect_view();

    view! {
        <div class="condition-screen">
            <div class="condition-screen__breakpoints">{checkboxes}</div>
            {field_input(&localizer, ConditionField::MediaQuery, condition, replace)}
        </div>
    }
}
