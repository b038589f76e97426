//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not a business email address: {0}")]
    NotBusinessEmail(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

impl DomainError {
    /// Check if this error came from the business email gate
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::NotBusinessEmail(_))
    }
}
