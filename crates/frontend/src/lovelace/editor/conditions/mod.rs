//! Editor for visibility conditions.

mod editor;
pub mod fields;
pub mod screen;

pub use editor::ConditionsEditor;
