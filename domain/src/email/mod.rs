//! Email address classification.
//!
//! - [`classifier::is_business_email`]: the accept/reject predicate used by the contact form
//! - [`classifier::classify`]: the same decision with the base domain attached
//! - [`blocked`]: the fixed set of free-provider base domains

pub mod blocked;
pub mod classifier;

pub use blocked::{FREE_PROVIDER_DOMAINS, blocked_domains, is_blocked_domain};
pub use classifier::{
    EmailClassification, base_domain, classify, extract_domain, is_business_email,
};
