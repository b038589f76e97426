//! Submission parameters: lead payload settings.
//!
//! [`SubmissionParams`] groups the static values the
//! [`ContactFormController`](crate::use_cases::contact_form::ContactFormController)
//! stamps onto every [`LeadSubmission`](shmixy_domain::LeadSubmission).

use serde::{Deserialize, Serialize};
use shmixy_domain::DEFAULT_LEAD_SUBJECT;

/// Lead payload parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionParams {
    /// Subject line sent as `_subject`.
    pub subject: String,
}

impl Default for SubmissionParams {
    fn default() -> Self {
        Self {
            subject: DEFAULT_LEAD_SUBJECT.to_string(),
        }
    }
}

impl SubmissionParams {
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }
}
