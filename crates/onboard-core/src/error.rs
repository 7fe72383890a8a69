//! Error types for the Onboard coordination layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every Onboard crate.
///
/// Collaborator traits return this type so that the application layer can
/// decide per step whether an error is absorbed, logged, or propagated.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OnboardError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Remote call failed (media store, push service)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Preference or cache storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A native push payload did not carry the field expected on its platform
    #[error("Malformed push payload: missing '{field}' for {platform}")]
    MalformedPayload { field: String, platform: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OnboardError {
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

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Creates a MalformedPayload error
    pub fn malformed_payload(field: impl Into<String>, platform: impl Into<String>) -> Self {
        Self::MalformedPayload {
            field: field.into(),
            platform: platform.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for OnboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for OnboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OnboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, OnboardError>`.
pub type Result<T> = std::result::Result<T, OnboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OnboardError::not_found("MediaObject", "42");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: MediaObject '42'");
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: OnboardError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, OnboardError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: OnboardError = io.into();
        assert!(matches!(err, OnboardError::Storage(_)));
    }
}
