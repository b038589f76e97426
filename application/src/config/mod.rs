//! Application-level configuration.
//!
//! - [`SubmissionParams`]: values stamped onto every outbound lead

pub mod submission_params;

pub use submission_params::SubmissionParams;
