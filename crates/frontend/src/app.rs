use std::sync::Arc;

use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::demo::{demo_strings, register_demo_badges, BadgeEditorPage};
use crate::lovelace::create_element::{BadgeRegistry, SharedBadgeResolver};
use crate::shared::i18n::Localizer;
use crate::shared::settings::EditorSettings;

#[component]
pub fn App(settings: EditorSettings) -> impl IntoView {
    let registry = BadgeRegistry::with_builtins();
    register_demo_badges(&registry);

    // Provide settings, strings and badge lookup to every editor below.
    provide_context(Localizer::new(&settings.language).with_overrides(demo_strings()));
    provide_context(settings);
    provide_context::<SharedBadgeResolver>(Arc::new(registry.clone()));

    view! {
        <ConfigProvider>
            <BadgeEditorPage registry=registry />
        </ConfigProvider>
    }
}
