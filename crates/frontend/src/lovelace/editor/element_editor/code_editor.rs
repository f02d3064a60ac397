use leptos::prelude::*;

use crate::shared::components::ui::Textarea;

const MIN_ROWS: usize = 4;
const MAX_ROWS: usize = 30;

/// JSON editing surface shared by code mode and the no-editor fallback
#[component]
pub fn CodeEditor(
    #[prop(into)] text: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    // Sized once; resizing while typing would rebuild the textarea and drop focus.
    let rows = text
        .with_untracked(|t| t.lines().count())
        .clamp(MIN_ROWS, MAX_ROWS) as u32;

    view! {
        <div class="code-editor">
            <Textarea value=text on_input=on_change rows=rows class="code-editor__input" />
        </div>
    }
}
