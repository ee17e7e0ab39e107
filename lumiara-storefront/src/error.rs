//! Error types for storefront operations

use thiserror::Error;

/// Storefront error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Login rejected
    #[error("Wrong password")]
    WrongPassword,

    /// Unknown sort key
    #[error("Unknown sort order: {0}")]
    UnknownSort(String),
}

/// Result type for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
