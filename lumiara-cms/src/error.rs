//! Client and importer error types

use thiserror::Error;

/// Content store client error
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Token rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Token lacks write access to the dataset
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Project or dataset not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Mutation rejected by the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Configuration error, raised before any work begins
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable unset or empty
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    /// Variable set but unusable
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Import run error
#[derive(Debug, Error)]
pub enum ImportError {
    /// Content file could not be loaded, or a record could not be mapped
    #[error("Content error: {0}")]
    Content(#[from] shared::SharedError),

    /// Content store call failed
    #[error("Content store error while writing {doc_type}: {source}")]
    Store {
        doc_type: &'static str,
        #[source]
        source: ClientError,
    },
}

impl ImportError {
    pub fn store(doc_type: &'static str, source: ClientError) -> Self {
        Self::Store { doc_type, source }
    }
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;
