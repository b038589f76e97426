//! **Lead Relay**: HTTP delivery of captured leads
//!
//! [`HttpLeadRelay`] implements the
//! [`LeadRelay`](shmixy_application::LeadRelay) port with `reqwest`.
//!
//! # Wire format
//!
//! ```text
//! POST <endpoint>
//! Content-Type: application/json
//! Accept: application/json
//!
//! {"_subject": "...", "name": "...", "company": "...", "email": "...",
//!  "message": "...", "source": "...", "user_agent": "..."}
//! ```
//!
//! Any 2xx status is a delivery. The response body is not inspected.

mod http;

pub use http::{DEFAULT_RELAY_ENDPOINT, HttpLeadRelay};
