//! Lead relay port
//!
//! Defines the interface for forwarding a captured lead to the third-party
//! email relay.

use async_trait::async_trait;
use shmixy_domain::LeadSubmission;
use thiserror::Error;

/// Errors that can occur while delivering a lead
///
/// The user only ever sees one generic failure message; the variants exist
/// for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Relay responded with status {status}")]
    Status { status: u16 },
}

/// Relay that forwards leads
///
/// Implementations make exactly one attempt per call: no retry, no backoff.
/// `Ok(())` means the relay answered with a status in the 2xx range.
#[async_trait]
pub trait LeadRelay: Send + Sync {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError>;
}
