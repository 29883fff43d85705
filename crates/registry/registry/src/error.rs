//! Registry error types.

use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error type for schema registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The schema shape has no subject name to register or verify under.
    #[error("Unsupported schema type: {kind}")]
    UnsupportedSchemaType { kind: String },

    /// A remote registry call failed.
    #[error("Registry transport error: {message}")]
    Transport { message: String },
}

impl RegistryError {
    /// Creates a transport error from any displayable cause.
    pub fn transport(message: impl Into<String>) -> Self {
        RegistryError::Transport {
            message: message.into(),
        }
    }
}
