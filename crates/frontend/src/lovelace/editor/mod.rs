pub mod badge_editor;
pub mod conditions;
pub mod element_editor;
pub mod form_editor;
