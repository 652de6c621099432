use thiserror::Error;

use crate::types::ValidationReport;

#[derive(Debug, Error)]
pub enum ResidencyError {
    #[error("Invalid input: {0}")]
    Validation(ValidationReport),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ResidencyError {
    fn from(e: serde_json::Error) -> Self {
        ResidencyError::SerializationError(e.to_string())
    }
}
