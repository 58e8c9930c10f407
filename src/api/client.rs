use crate::api::models::SubmissionEnvelope;
use crate::core::controller::{SubmissionReceipt, WebhookSink};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;

/// The production n8n webhook. `--webhook-url` / `LEADGEN_WEBHOOK_URL`
/// can point the client at a staging or mock endpoint instead.
pub const PRODUCTION_WEBHOOK_URL: &str =
    "https://faheemkhanfida055.app.n8n.cloud/webhook-test/lead-generation";

const USER_AGENT: &str = concat!("leadgen-cli/", env!("CARGO_PKG_VERSION"));

/// Thin reqwest wrapper around the webhook endpoint. One POST per
/// submission; no retries, no custom timeout beyond the transport's
/// defaults, and the response body is never read.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    pub webhook_url: String,
}

impl WebhookClient {
    pub fn new(webhook_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::ClientInit {
                message: e.to_string(),
            })?;

        Ok(WebhookClient {
            client,
            webhook_url,
        })
    }

    /// POST the envelope as JSON. Any non-success status is an error;
    /// only the status class matters, the body is ignored.
    pub async fn post_submission(
        &self,
        envelope: &SubmissionEnvelope,
    ) -> Result<SubmissionReceipt, ApiError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                endpoint: self.webhook_url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(SubmissionReceipt {
                http_status: status.as_u16(),
            })
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: self.webhook_url.clone(),
            })
        }
    }
}

#[async_trait]
impl WebhookSink for WebhookClient {
    async fn deliver(&self, envelope: &SubmissionEnvelope) -> Result<SubmissionReceipt, ApiError> {
        self.post_submission(envelope).await
    }
}
