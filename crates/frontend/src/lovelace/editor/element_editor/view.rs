//! Element editor shell component

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::code_editor::CodeEditor;
use super::resolver::{ConfigEditorFactory, ConfigEditorProps, SharedResolver};
use super::state::{
    ConfigChanged, ContentKind, EditorCapabilities, EditorMode, ElementConfig, ElementEditorState,
};
use crate::lovelace::editor::form_editor::ConfigFormEditor;
use crate::shared::components::ui::{Alert, Button};
use crate::shared::i18n::use_localizer;
use crate::shared::settings::use_settings;

pub type DefaultContentFn = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// What a content renderer gets to work with in GUI mode
#[derive(Clone)]
pub struct EditorContext<T: ElementConfig> {
    pub value: Signal<T>,
    /// Assigns a new value to the editor, which then publishes it
    pub set_value: Callback<T>,
    /// Custom editor, schema form or fallback, whichever the type offers
    pub default_content: DefaultContentFn,
}

/// Replaces the GUI content of the shell
pub type ContentRenderer<T> = Arc<dyn Fn(EditorContext<T>) -> AnyView + Send + Sync>;

/// Generic editor for one dashboard element configuration.
///
/// Owns the value while editing, switches between GUI and code mode and
/// publishes every change on `on_config_changed`.
#[component]
pub fn ElementEditor<T>(
    /// Configuration assigned by the parent; kept in sync with edits
    value: RwSignal<T>,
    resolver: SharedResolver<T>,
    #[prop(optional)] on_config_changed: Option<Callback<ConfigChanged<T>>>,
    #[prop(optional)] render_content: Option<ContentRenderer<T>>,
) -> impl IntoView
where
    T: ElementConfig,
{
    let localizer = use_localizer();
    let settings = use_settings();

    let state = RwSignal::new(ElementEditorState::new(
        value.get_untracked(),
        settings.initial_mode,
    ));
    let config_element = RwSignal::new(None::<ConfigEditorFactory<T>>);

    let publish = move |changed: ConfigChanged<T>| {
        if changed.error.is_none() {
            value.set(changed.config.clone());
        }
        if let Some(handler) = on_config_changed {
            handler.run(changed);
        }
    };

    // Parent assignments
    Effect::new(move |_| {
        let next = value.get();
        if state.with_untracked(|s| s.value() != &next) {
            state.update(|s| {
                s.set_value(next);
            });
        }
    });

    let set_value = Callback::new(move |config: T| {
        if let Some(changed) = state.try_update(|s| s.set_value(config)).flatten() {
            publish(changed);
        }
    });

    let on_code_change = Callback::new(move |text: String| {
        if let Some(changed) = state.try_update(|s| s.handle_code_changed(text)) {
            publish(changed);
        }
    });

    let element_type = Memo::new(move |_| state.with(|s| s.element_type().map(str::to_string)));

    Effect::new(move |_| {
        let Some(ty) = element_type.get() else {
            return;
        };
        let resolver = resolver.clone();
        spawn_local(async move {
            let factory = resolver.get_config_element(&ty).await;
            let capabilities = EditorCapabilities {
                has_config_element: factory.is_some(),
                config_form: resolver.get_config_form(&ty).await,
            };

            let is_current = state
                .try_with_untracked(|s| s.element_type() == Some(ty.as_str()))
                .unwrap_or(false);
            if !is_current {
                log::debug!("dropping stale editor resolution for {}", ty);
                return;
            }
            log::debug!(
                "resolved editor for {}: element={} form={}",
                ty,
                capabilities.has_config_element,
                capabilities.config_form.is_some()
            );
            config_element.set(factory);
            state.update(|s| {
                s.set_capabilities(&ty, capabilities);
            });
        });
    });

    let content_kind = Memo::new(move |_| state.with(|s| s.content_kind()));
    let mode = Memo::new(move |_| state.with(|s| s.mode()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let warnings = Memo::new(move |_| state.with(|s| s.warnings()));
    let config_form = Memo::new(move |_| state.with(|s| s.config_form().cloned()));
    let code_text = Signal::derive(move || state.with(|s| s.code_text()));
    let value_signal: Signal<T> = value.into();

    let loading_label = localizer.localize("ui.panel.lovelace.editor.loading");
    let default_content: DefaultContentFn = Arc::new(move || {
        let loading_label = loading_label.clone();
        view! {
            <div class="element-editor__content">
                {move || {
                    match content_kind.get() {
                        ContentKind::Loading => {
                            view! { <div class="element-editor__loading">{loading_label.clone()}</div> }
                                .into_any()
                        }
                        ContentKind::ConfigElement => match config_element.get() {
                            Some(factory) => factory(ConfigEditorProps {
                                value: value_signal,
                                on_change: set_value,
                            }),
                            None => ().into_any(),
                        },
                        ContentKind::Form => match config_form.get() {
                            Some(schema) => {
                                view! {
                                    <ConfigFormEditor
                                        schema=schema
                                        value=value_signal
                                        on_change=set_value
                                    />
                                }
                                    .into_any()
                            }
                            None => ().into_any(),
                        },
                        ContentKind::Fallback => {
                            view! { <CodeEditor text=code_text on_change=on_code_change /> }.into_any()
                        }
                    }
                }}
            </div>
        }
        .into_any()
    });

    let gui_content: DefaultContentFn = match render_content {
        Some(render) => {
            let context = EditorContext {
                value: value_signal,
                set_value,
                default_content: default_content.clone(),
            };
            Arc::new(move || render(context.clone()))
        }
        None => default_content,
    };

    let toggle_mode = Callback::new(move |_| {
        state.update(|s| {
            s.toggle_mode();
        });
    });
    let toggle_disabled = Signal::derive(move || mode.get() == EditorMode::Code && error.with(Option::is_some));
    let toggle_label = {
        let localizer = localizer.clone();
        move || match mode.get() {
            EditorMode::Gui => localizer.localize("ui.panel.lovelace.editor.edit_card.show_code_editor"),
            EditorMode::Code => {
                localizer.localize("ui.panel.lovelace.editor.edit_card.show_visual_editor")
            }
        }
    };
    let warnings_localizer = localizer.clone();
    let error_title = localizer.localize("ui.errors.config.error_detected");

    view! {
        <div class="element-editor">
            <div class="element-editor__toolbar">
                <Button
                    variant="ghost".to_string()
                    size="sm".to_string()
                    disabled=toggle_disabled
                    on_click=toggle_mode
                >
                    {toggle_label}
                </Button>
            </div>
            {move || match mode.get() {
                EditorMode::Gui => view! { <div class="gui-editor">{gui_content()}</div> }.into_any(),
                EditorMode::Code => {
                    view! { <CodeEditor text=code_text on_change=on_code_change /> }.into_any()
                }
            }}
            {move || {
                let items = warnings.get();
                let localizer = warnings_localizer.clone();
                (!items.is_empty()).then(|| view! {
                    <Alert alert_type="warning".to_string()>
                        <ul class="element-editor__warnings">
                            {items
                                .into_iter()
                                .map(|w| view! { <li>{w.message(&localizer)}</li> })
                                .collect_view()}
                        </ul>
                    </Alert>
                })
            }}
            {move || {
                let title = error_title.clone();
                error.get().map(|err| view! {
                    <Alert alert_type="error".to_string() title=title>{err}</Alert>
                })
            }}
        </div>
    }
}
