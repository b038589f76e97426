//! Domain layer for shmixy
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Business email
//!
//! An address whose base domain (last two labels) is not one of a fixed set
//! of free/consumer mail providers. See [`email::is_business_email`].
//!
//! ## Contact form
//!
//! - **Idle**: fields editable, submit enabled only for a business email
//! - **Submitting**: one lead in flight, further submits have no effect

pub mod core;
pub mod email;
pub mod form;
pub mod notification;

// Re-export commonly used types
pub use crate::core::{error::DomainError, string::truncate};
pub use email::{
    EmailClassification, FREE_PROVIDER_DOMAINS, base_domain, blocked_domains, classify,
    extract_domain, is_blocked_domain, is_business_email,
};
pub use form::{
    BUSINESS_EMAIL_WARNING, ContactForm, DEFAULT_LEAD_SUBJECT, FormField, FormPhase, LeadFields,
    LeadSubmission, SUBMIT_LABEL, SUBMITTING_LABEL,
};
pub use notification::{Notification, NotificationVariant};
