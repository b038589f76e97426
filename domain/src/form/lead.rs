//! Lead submission payload

use super::entities::LeadFields;
use serde::{Deserialize, Serialize};

/// Default subject line attached to every lead.
pub const DEFAULT_LEAD_SUBJECT: &str = "New Shmixy Lead";

/// Payload forwarded to the email relay (Value Object)
///
/// Assembled at submit time from the form fields plus two values read from
/// the environment, and dropped once the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    #[serde(rename = "_subject")]
    pub subject: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
    /// Location of the page the lead was captured on
    pub source: String,
    /// Client identifier string
    pub user_agent: String,
}

impl LeadSubmission {
    pub fn new(
        subject: impl Into<String>,
        fields: LeadFields,
        source: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        let LeadFields {
            name,
            company,
            email,
            message,
        } = fields;

        Self {
            subject: subject.into(),
            name,
            company,
            email,
            message,
            source: source.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LeadSubmission {
        LeadSubmission::new(
            DEFAULT_LEAD_SUBJECT,
            LeadFields {
                name: "Jane Doe".to_string(),
                company: "Acme Inc.".to_string(),
                email: "jane@acme.com".to_string(),
                message: "Voice agent for support".to_string(),
            },
            "https://shmixy.com/#contact",
            "shmixy/0.1.0 (linux)",
        )
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "_subject",
                "company",
                "email",
                "message",
                "name",
                "source",
                "user_agent"
            ]
        );
        assert_eq!(json["_subject"], "New Shmixy Lead");
        assert_eq!(json["source"], "https://shmixy.com/#contact");
    }

    #[test]
    fn test_fields_carried_verbatim() {
        let lead = sample();
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.company, "Acme Inc.");
        assert_eq!(lead.email, "jane@acme.com");
        assert_eq!(lead.user_agent, "shmixy/0.1.0 (linux)");
    }
}
