use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("duplicate {field} '{value}' in {collection}")]
    DuplicateKey { collection: &'static str, field: &'static str, value: String },
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(context: impl std::fmt::Display, err: impl std::fmt::Display) -> Self {
        Self::StorageUnavailable(format!("{context}: {err}"))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}
