use leptos::prelude::*;

/// Inline message box
#[component]
pub fn Alert(
    /// Alert type: "info" (default), "warning", or "error"
    #[prop(optional, into)]
    alert_type: MaybeProp<String>,
    /// Bold heading above the message
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Message body
    children: Children,
) -> impl IntoView {
    let type_class = move || match alert_type.get().as_deref().unwrap_or("info") {
        "warning" => "alert--warning",
        "error" => "alert--error",
        _ => "alert--info",
    };

    view! {
        <div class=move || format!("alert {}", type_class()) role="alert">
            {move || title.get().map(|t| view! { <div class="alert__title">{t}</div> })}
            <div class="alert__content">{children()}</div>
        </div>
    }
}
