use thiserror::Error;

/// Problems with configuration typed into the code editor
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Configuration must be an object")]
    NotAnObject,
    #[error("Configuration is missing a \"type\"")]
    MissingType,
}
