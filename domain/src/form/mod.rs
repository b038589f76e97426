//! Contact form domain
//!
//! - [`entities::ContactForm`]: field state, email verdict, and submit lifecycle
//! - [`lead::LeadSubmission`]: the payload sent to the relay

pub mod entities;
pub mod lead;

pub use entities::{
    BUSINESS_EMAIL_WARNING, ContactForm, FormField, FormPhase, LeadFields, SUBMIT_LABEL,
    SUBMITTING_LABEL,
};
pub use lead::{DEFAULT_LEAD_SUBJECT, LeadSubmission};
