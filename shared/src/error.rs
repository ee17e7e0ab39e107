//! Error types for content loading and document validation

use thiserror::Error;

/// Shared error type
#[derive(Debug, Error)]
pub enum SharedError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON (or has the wrong shape)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A source record lacks a field the document cannot be built without
    #[error("{kind} record is missing required field '{field}'")]
    MissingField { kind: &'static str, field: &'static str },

    /// A built document does not satisfy its schema
    #[error("Invalid {doc_type} document: {message}")]
    Validation { doc_type: String, message: String },
}

impl SharedError {
    /// Create a MissingField error
    pub fn missing_field(kind: &'static str, field: &'static str) -> Self {
        Self::MissingField { kind, field }
    }

    /// Create a Validation error
    pub fn validation(doc_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            doc_type: doc_type.into(),
            message: message.into(),
        }
    }
}

/// Result type for shared operations
pub type SharedResult<T> = Result<T, SharedError>;
