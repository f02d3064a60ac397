//! Generic element editor: value ownership, GUI/code modes and capability
//! resolution shared by all element editors.

mod code_editor;
pub mod error;
pub mod resolver;
pub mod state;
mod view;

pub use code_editor::CodeEditor;
pub use error::EditorError;
pub use resolver::{
    ConfigEditorFactory, ConfigEditorProps, ConfigFormFactory, ConfigResolver, SharedResolver,
};
pub use state::{
    ConfigChanged, ContentKind, EditorCapabilities, EditorMode, EditorWarning, ElementConfig,
    ElementEditorState,
};
pub use view::{ContentRenderer, DefaultContentFn, EditorContext, ElementEditor};
