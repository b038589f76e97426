//! Relay configuration from TOML (`[relay]` section)

use crate::relay::DEFAULT_RELAY_ENDPOINT;
use serde::{Deserialize, Serialize};
use shmixy_application::SubmissionParams;
use shmixy_domain::DEFAULT_LEAD_SUBJECT;

/// Raw relay configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRelayConfig {
    /// Form relay URL the lead is POSTed to
    pub endpoint: String,
    /// Subject line sent as `_subject`
    pub subject: String,
}

impl Default for FileRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            subject: DEFAULT_LEAD_SUBJECT.to_string(),
        }
    }
}

impl FileRelayConfig {
    pub fn submission_params(&self) -> SubmissionParams {
        SubmissionParams::default().with_subject(self.subject.clone())
    }
}
