//! English strings. The single source of truth for user-visible text.

pub fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        // ── Badge editor tabs ─────────────────────────────────────────────
        "ui.panel.lovelace.editor.edit_badge.tab_config" => "Config",
        "ui.panel.lovelace.editor.edit_badge.tab_visibility" => "Visibility",
        "ui.panel.lovelace.editor.loading" => "Loading editor…",
        "ui.panel.lovelace.editor.edit_badge.visibility.explanation" => {
            "The badge will be shown when ALL conditions below are fulfilled. If no conditions are set, the badge will always be shown."
        }

        // ── Element editor shell ──────────────────────────────────────────
        "ui.panel.lovelace.editor.edit_card.show_code_editor" => "Show code editor",
        "ui.panel.lovelace.editor.edit_card.show_visual_editor" => "Show visual editor",
        "ui.errors.config.editor_not_available" => {
            "No visual editor available for type \"{type}\"."
        }
        "ui.errors.config.key_not_expected" => {
            "Key \"{key}\" is not expected or not supported by the visual editor."
        }
        "ui.errors.config.error_detected" => "Configuration errors detected",

        // ── Badge form fields ─────────────────────────────────────────────
        "ui.panel.lovelace.editor.badge.entity" => "Entity",
        "ui.panel.lovelace.editor.badge.name" => "Name",
        "ui.panel.lovelace.editor.badge.icon" => "Icon",
        "ui.panel.lovelace.editor.badge.color" => "Color",
        "ui.panel.lovelace.editor.badge.show_name" => "Show name",
        "ui.panel.lovelace.editor.badge.show_state" => "Show state",
        "ui.panel.lovelace.editor.badge.show_icon" => "Show icon",

        // ── Conditions ────────────────────────────────────────────────────
        "ui.panel.lovelace.editor.condition-editor.add" => "Add condition",
        "ui.panel.lovelace.editor.condition-editor.delete" => "Delete",
        "ui.panel.lovelace.editor.condition-editor.condition.state.label" => "Entity state",
        "ui.panel.lovelace.editor.condition-editor.condition.numeric_state.label" => {
            "Entity numeric state"
        }
        "ui.panel.lovelace.editor.condition-editor.condition.screen.label" => "Screen",
        "ui.panel.lovelace.editor.condition-editor.condition.user.label" => "User",
        "ui.panel.lovelace.editor.condition-editor.condition.and.label" => "And",
        "ui.panel.lovelace.editor.condition-editor.condition.or.label" => "Or",
        "ui.panel.lovelace.editor.condition-editor.entity" => "Entity",
        "ui.panel.lovelace.editor.condition-editor.state" => "State",
        "ui.panel.lovelace.editor.condition-editor.state_not" => "State is not",
        "ui.panel.lovelace.editor.condition-editor.above" => "Above",
        "ui.panel.lovelace.editor.condition-editor.below" => "Below",
        "ui.panel.lovelace.editor.condition-editor.users" => "Users (comma separated ids)",
        "ui.panel.lovelace.editor.condition-editor.media_query" => "Media query",
        "ui.panel.lovelace.editor.condition-editor.breakpoint.mobile" => "Mobile",
        "ui.panel.lovelace.editor.condition-editor.breakpoint.tablet" => "Tablet",
        "ui.panel.lovelace.editor.condition-editor.breakpoint.desktop" => "Desktop",
        "ui.panel.lovelace.editor.condition-editor.breakpoint.wide" => "Wide",

        _ => return None,
    };
    Some(text)
}
