//! Tabbed editor for a single badge: type-specific config or visibility rules.

pub mod model;
mod view;
pub mod visibility_editor;

pub use model::{BadgeEditorModel, EditorTab, TabContent, TabItem, TabSelectedEvent, TabSelection};
pub use view::BadgeElementEditor;
pub use visibility_editor::{apply_visibility, BadgeVisibilityEditor};
