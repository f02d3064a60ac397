pub mod create_element;
pub mod editor;
