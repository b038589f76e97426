//! Application layer for shmixy
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SubmissionParams;
pub use ports::{
    lead_relay::{LeadRelay, RelayError},
    notifier::{NoNotifier, Notifier},
    page_environment::PageEnvironment,
};
pub use use_cases::contact_form::{ContactFormController, SubmitError};
