//! Tab state of the badge editor.

use contracts::lovelace::LovelaceBadgeConfig;

use crate::shared::i18n::Localizer;

const TAB_LABEL_PREFIX: &str = "ui.panel.lovelace.editor.edit_badge.tab_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTab {
    Config,
    Visibility,
    /// Identifier outside the displayed tabs; selecting it shows no content
    Unknown(String),
}

impl EditorTab {
    /// Tabs shown in the tab bar, in display order
    pub const DISPLAYED: [EditorTab; 2] = [EditorTab::Config, EditorTab::Visibility];

    pub fn id(&self) -> &str {
        match self {
            EditorTab::Config => "config",
            EditorTab::Visibility => "visibility",
            EditorTab::Unknown(id) => id.as_str(),
        }
    }

    pub fn label_key(&self) -> String {
        format!("{}{}", TAB_LABEL_PREFIX, self.id())
    }
}

impl From<&str> for EditorTab {
    fn from(id: &str) -> Self {
        match id {
            "config" => EditorTab::Config,
            "visibility" => EditorTab::Visibility,
            other => EditorTab::Unknown(other.to_string()),
        }
    }
}

/// Selected tab carried by a selection event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSelection {
    pub id: String,
}

/// Selection change reported by the tab bar. `value` is `None` when the bar
/// reports a change without a selected tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSelectedEvent {
    pub value: Option<TabSelection>,
}

impl TabSelectedEvent {
    pub fn selected(id: &str) -> Self {
        Self {
            value: Some(TabSelection { id: id.to_string() }),
        }
    }

    /// Event for the tab bar's selected value, empty meaning no selection
    pub fn from_selected_value(value: &str) -> Self {
        if value.is_empty() {
            Self::default()
        } else {
            Self::selected(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub tab: EditorTab,
    pub label: String,
    /// Receives focus when the dialog opens
    pub initial_focus: bool,
}

/// What the badge editor shows below the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabContent {
    /// The element editor's own content: custom editor, form or fallback
    Default,
    Visibility,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeEditorModel {
    active_tab: EditorTab,
}

impl Default for BadgeEditorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeEditorModel {
    pub fn new() -> Self {
        Self {
            active_tab: EditorTab::Config,
        }
    }

    pub fn active_tab(&self) -> &EditorTab {
        &self.active_tab
    }

    /// Switches to the selected tab. The identifier is taken as is.
    pub fn handle_tab_selected(&mut self, event: &TabSelectedEvent) {
        let Some(selection) = &event.value else {
            return;
        };
        log::debug!("badge editor tab: {}", selection.id);
        self.active_tab = EditorTab::from(selection.id.as_str());
    }

    pub fn tabs(&self, localizer: &Localizer) -> Vec<TabItem> {
        EditorTab::DISPLAYED
            .into_iter()
            .enumerate()
            .map(|(index, tab)| TabItem {
                label: localizer.localize(&tab.label_key()),
                initial_focus: index == 0,
                tab,
            })
            .collect()
    }

    /// Takes a whole config reported by a tab's sub-editor. The report ends
    /// here: the value goes to `assign`, and whatever owns the value
    /// publishes it.
    pub fn handle_child_value_changed<R>(
        &self,
        config: LovelaceBadgeConfig,
        assign: impl FnOnce(LovelaceBadgeConfig) -> R,
    ) -> R {
        log::debug!("badge editor: value changed on {} tab", self.active_tab.id());
        assign(config)
    }

    pub fn content(&self) -> TabContent {
        match self.active_tab {
            EditorTab::Config => TabContent::Default,
            EditorTab::Visibility => TabContent::Visibility,
            EditorTab::Unknown(_) => TabContent::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lovelace::editor::badge_editor::apply_visibility;
    use crate::lovelace::editor::element_editor::{ConfigChanged, EditorMode, ElementEditorState};
    use contracts::lovelace::{Condition, ConditionKind};

    #[test]
    fn test_starts_on_config() {
        let model = BadgeEditorModel::new();
        assert_eq!(model.active_tab(), &EditorTab::Config);
        assert_eq!(model.content(), TabContent::Default);
    }

    #[test]
    fn test_select_each_displayed_tab() {
        for tab in EditorTab::DISPLAYED {
            let mut model = BadgeEditorModel::new();
            model.handle_tab_selected(&TabSelectedEvent::selected(tab.id()));
            assert_eq!(model.active_tab(), &tab);
        }
    }

    #[test]
    fn test_event_without_selection_is_ignored() {
        let mut model = BadgeEditorModel::new();
        model.handle_tab_selected(&TabSelectedEvent::selected("visibility"));
        model.handle_tab_selected(&TabSelectedEvent::default());
        model.handle_tab_selected(&TabSelectedEvent::from_selected_value(""));
        assert_eq!(model.active_tab(), &EditorTab::Visibility);
    }

    #[test]
    fn test_visibility_content() {
        let mut model = BadgeEditorModel::new();
        model.handle_tab_selected(&TabSelectedEvent::selected("visibility"));
        assert_eq!(model.content(), TabContent::Visibility);
    }

    #[test]
    fn test_unknown_tab_is_accepted() {
        let mut model = BadgeEditorModel::new();
        model.handle_tab_selected(&TabSelectedEvent::selected("layout"));
        assert_eq!(model.active_tab(), &EditorTab::Unknown("layout".into()));
        assert_eq!(model.content(), TabContent::Empty);
        assert!(!EditorTab::DISPLAYED.contains(model.active_tab()));
    }

    #[test]
    fn test_tab_bar_is_fixed() {
        let mut model = BadgeEditorModel::new();
        model.handle_tab_selected(&TabSelectedEvent::selected("visibility"));
        let tabs = model.tabs(&Localizer::default());

        let ids: Vec<&str> = tabs.iter().map(|t| t.tab.id()).collect();
        assert_eq!(ids, vec!["config", "visibility"]);
        assert_eq!(tabs[0].label, "Config");
        assert_eq!(tabs[1].label, "Visibility");
        assert!(tabs[0].initial_focus && !tabs[1].initial_focus);
    }

    #[test]
    fn test_tab_labels_never_empty() {
        let tabs = BadgeEditorModel::new().tabs(&Localizer::new("fr"));
        assert!(tabs.iter().all(|t| !t.label.is_empty()));
    }

    #[test]
    fn test_child_change_becomes_the_value() {
        let config = LovelaceBadgeConfig::new("entity").with_option("entity", "sun.sun");
        let mut editor = ElementEditorState::new(config.clone(), EditorMode::Gui);
        let mut model = BadgeEditorModel::new();
        model.handle_tab_selected(&TabSelectedEvent::selected("visibility"));
        let mut published: Vec<ConfigChanged<LovelaceBadgeConfig>> = Vec::new();

        let carried = apply_visibility(&config, vec![Condition::default_for(ConditionKind::User)]);
        model.handle_child_value_changed(carried.clone(), |c| {
            published.extend(editor.set_value(c));
        });

        assert_eq!(editor.value(), &carried);
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].config, carried);
        assert_eq!(published[0].error, None);

        // the same value again publishes nothing
        model.handle_child_value_changed(carried, |c| {
            published.extend(editor.set_value(c));
        });
        assert_eq!(published.len(), 1);
    }
}
