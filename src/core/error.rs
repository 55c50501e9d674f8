use thiserror::Error;

/// Crate-level error for the engine facade. Module-local errors
/// ([`crate::catalog::StoreError`], [`crate::recommend::SelectionError`])
/// are bridged into it at the boundary.
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog store error: {0}")]
    Store(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::catalog::StoreError> for VitrineError {
    fn from(e: crate::catalog::StoreError) -> Self {
        VitrineError::Store(e.to_string())
    }
}

impl From<crate::recommend::SelectionError> for VitrineError {
    fn from(e: crate::recommend::SelectionError) -> Self {
        VitrineError::Selection(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VitrineError>;
