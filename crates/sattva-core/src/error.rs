//! Error types for the Sattva application.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire Sattva application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize)]
pub enum SattvaError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Input validation error (duplicate email, out-of-range value, ...)
    #[error("{0}")]
    Validation(String),

    /// Credential mismatch. One message for both wrong-email and
    /// wrong-password so the failure cause is not disclosed.
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SattvaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Migration error
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a credential mismatch
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SattvaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SattvaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SattvaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (migration framework boundary)
impl From<anyhow::Error> for SattvaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Migration(err.to_string())
    }
}

/// A type alias for `Result<T, SattvaError>`.
pub type Result<T> = std::result::Result<T, SattvaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The same error renders for wrong-email and wrong-password paths.
        let err = SattvaError::InvalidCredentials;
        let msg = err.to_string();
        assert!(!msg.contains("email address"));
        assert!(!msg.to_lowercase().contains("wrong password"));
        assert!(err.is_auth());
    }

    #[test]
    fn test_classification_helpers() {
        assert!(SattvaError::validation("duplicate").is_validation());
        assert!(SattvaError::not_found("user", "u-1").is_not_found());
        let parse: SattvaError = serde_json::from_str::<i32>("not json")
            .unwrap_err()
            .into();
        assert!(parse.is_serialization());
    }
}
