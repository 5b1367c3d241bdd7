//! Error types for the QWeek application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire QWeek application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum QweekError {
    /// Required input is missing or malformed (e.g. an empty name on the entry form)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The name pair already has a saved result
    #[error("Participant already registered: {first_name} {last_name}")]
    DuplicateParticipant {
        first_name: String,
        last_name: String,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (participant store read/write failures)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A game trigger that the current state does not accept
    #[error("Invalid transition: cannot {action} while in {state}")]
    InvalidTransition {
        state: String,
        action: &'static str,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QweekError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a DuplicateParticipant error
    pub fn duplicate(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::DuplicateParticipant {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
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

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(state: impl ToString, action: &'static str) -> Self {
        Self::InvalidTransition {
            state: state.to_string(),
            action,
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a DuplicateParticipant error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateParticipant { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error comes from the storage layer.
    ///
    /// Returns true for `DataAccess`, `Io` and `Serialization` errors, which
    /// are all reported to the user as "could not read/write results".
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::DataAccess(_) | Self::Io { .. } | Self::Serialization { .. }
        )
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for QweekError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for QweekError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for QweekError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for QweekError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, QweekError>`.
pub type Result<T> = std::result::Result<T, QweekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_persistence() {
        let err: QweekError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(err.is_persistence());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_duplicate_message() {
        let err = QweekError::duplicate("Ana", "Lopez");
        assert!(err.is_duplicate());
        assert_eq!(err.to_string(), "Participant already registered: Ana Lopez");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = QweekError::invalid_transition("result1", "submit round 2");
        assert!(err.is_invalid_transition());
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot submit round 2 while in result1"
        );
    }
}
