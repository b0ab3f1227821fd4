//! Error types for identity operations

use thiserror::Error;

use crate::domain::{NetworkError, ValidationError};
use crate::registry::RegistryError;

/// Errors that can occur in identity operations
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Address or network value parsing error
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Address invariant violated
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Registry refused a name
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        IdentityError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for IdentityError {
    fn from(err: std::io::Error) -> Self {
        IdentityError::Io(err.to_string())
    }
}
