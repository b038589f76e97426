//! reqwest-backed lead relay

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use shmixy_application::{LeadRelay, RelayError};
use shmixy_domain::LeadSubmission;
use tracing::debug;

/// Form relay endpoint used when none is configured.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/igindi18@gmail.com";

/// Lead relay that POSTs the submission as JSON.
///
/// The client is built without a request timeout, so a call runs until the
/// transport itself gives up.
pub struct HttpLeadRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeadRelay {
    /// Create a relay for `endpoint`, identifying as `user_agent`.
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a relay around an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LeadRelay for HttpLeadRelay {
    async fn deliver(&self, lead: &LeadSubmission) -> Result<(), RelayError> {
        debug!(endpoint = %self.endpoint, "Posting lead to relay");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(lead)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status {
                status: status.as_u16(),
            });
        }

        debug!(status = status.as_u16(), "Relay accepted lead");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shmixy_domain::{DEFAULT_LEAD_SUBJECT, LeadFields};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_lead() -> LeadSubmission {
        LeadSubmission::new(
            DEFAULT_LEAD_SUBJECT,
            LeadFields {
                name: "Jane Doe".to_string(),
                company: "Acme Inc.".to_string(),
                email: "jane@acme.com".to_string(),
                message: "Automate our support line".to_string(),
            },
            "https://shmixy.com/#contact",
            "shmixy-test/0.1",
        )
    }

    fn relay_for(server: &MockServer) -> HttpLeadRelay {
        HttpLeadRelay::new(format!("{}/ajax/leads", server.uri()), "shmixy-test/0.1").unwrap()
    }

    #[tokio::test]
    async fn test_posts_json_payload_with_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ajax/leads"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(body_json(json!({
                "_subject": "New Shmixy Lead",
                "name": "Jane Doe",
                "company": "Acme Inc.",
                "email": "jane@acme.com",
                "message": "Automate our support line",
                "source": "https://shmixy.com/#contact",
                "user_agent": "shmixy-test/0.1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "true"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay_for(&server).deliver(&sample_lead()).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_any_2xx_is_success_regardless_of_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        assert!(relay_for(&server).deliver(&sample_lead()).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = relay_for(&server).deliver(&sample_lead()).await;
        assert_eq!(result, Err(RelayError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_client_error_maps_to_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422))
            .mount(&server)
            .await;

        let result = relay_for(&server).deliver(&sample_lead()).await;
        assert_eq!(result, Err(RelayError::Status { status: 422 }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let relay = HttpLeadRelay::new("http://127.0.0.1:1/ajax/leads", "shmixy-test/0.1").unwrap();

        let result = relay.deliver(&sample_lead()).await;
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }
}
