//! Error types for family member records and the registry.

use thiserror::Error;

/// Errors that can occur during family member operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonError {
    /// A field value broke one of the record rules.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// No family member matched the lookup or search.
    #[error("Family member not found: {0}")]
    NotFound(String),

    /// A family member with the same id is already stored.
    #[error("Family member already exists: {0}")]
    Conflict(i64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl PersonError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        PersonError::InvalidValue {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
