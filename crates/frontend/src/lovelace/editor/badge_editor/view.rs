use std::sync::Arc;

use contracts::lovelace::LovelaceBadgeConfig;
use leptos::prelude::*;
use thaw::{Tab, TabList};

use super::model::{BadgeEditorModel, TabContent, TabSelectedEvent};
use super::visibility_editor::BadgeVisibilityEditor;
use crate::lovelace::create_element::{use_badge_resolver, BadgeConfigResolver};
use crate::lovelace::editor::element_editor::{
    ConfigChanged, ContentRenderer, EditorContext, ElementEditor, SharedResolver,
};
use crate::shared::i18n::use_localizer;

/// Badge editor with a config tab and a visibility tab.
///
/// The element editor owns the value. This component only decides what its
/// GUI mode shows.
#[component]
pub fn BadgeElementEditor(
    value: RwSignal<LovelaceBadgeConfig>,
    #[prop(optional)] on_config_changed: Option<Callback<ConfigChanged<LovelaceBadgeConfig>>>,
) -> impl IntoView {
    let resolver: SharedResolver<LovelaceBadgeConfig> =
        Arc::new(BadgeConfigResolver::new(use_badge_resolver()));
    // Lives as long as the editor, so the tab survives mode switches
    let model = RwSignal::new(BadgeEditorModel::new());

    let forward = Callback::new(move |changed: ConfigChanged<LovelaceBadgeConfig>| {
        if let Some(handler) = on_config_changed {
            handler.run(changed);
        }
    });

    let render_content: ContentRenderer<LovelaceBadgeConfig> =
        Arc::new(move |context: EditorContext<LovelaceBadgeConfig>| {
            view! { <BadgeEditorTabs model=model context=context /> }.into_any()
        });

    view! {
        <ElementEditor
            value=value
            resolver=resolver
            on_config_changed=forward
            render_content=render_content
        />
    }
}

#[component]
fn BadgeEditorTabs(
    model: RwSignal<BadgeEditorModel>,
    context: EditorContext<LovelaceBadgeConfig>,
) -> impl IntoView {
    let localizer = use_localizer();
    let tabs = model.with_untracked(|m| m.tabs(&localizer));

    let selected_value = RwSignal::new(
        model.with_untracked(|m| m.active_tab().id().to_string()),
    );
    Effect::new(move |prev: Option<String>| {
        let current = selected_value.get();
        if prev.is_some() {
            let event = TabSelectedEvent::from_selected_value(&current);
            model.update(|m| m.handle_tab_selected(&event));
        }
        current
    });

    let EditorContext {
        value,
        set_value,
        default_content,
    } = context;

    let on_visibility_changed = Callback::new(move |config: LovelaceBadgeConfig| {
        model.with_untracked(|m| m.handle_child_value_changed(config, |c| set_value.run(c)));
    });

    let content = Memo::new(move |_| model.with(|m| m.content()));

    view! {
        <div class="badge-editor">
            <TabList selected_value=selected_value>
                {tabs
                    .into_iter()
                    .map(|item| {
                        view! {
                            <Tab value=item.tab.id().to_string() attr:autofocus=item.initial_focus>
                                {item.label}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
            <div class="badge-editor__content">
                {move || match content.get() {
                    TabContent::Default => default_content(),
                    TabContent::Visibility => {
                        view! {
                            <BadgeVisibilityEditor
                                config=value
                                on_value_changed=on_visibility_changed
                            />
                        }
                            .into_any()
                    }
                    TabContent::Empty => ().into_any(),
                }}
            </div>
        </div>
    }
}
