//! Slack incoming-webhook [`Transport`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use notifier::{NotificationMessage, NotifierError, Transport, TransportError};

use crate::{SlackPayload, SlackWebhookConfig};

/// Posts notifications to one Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhookTransport {
    url: Url,
    client: Client,
}

impl SlackWebhookTransport {
    /// Creates a transport for `config`.
    ///
    /// Fails with [`NotifierError::Configuration`] if the URL does not parse
    /// or the HTTP client cannot be built.
    pub fn new(config: &SlackWebhookConfig) -> Result<Self, NotifierError> {
        let url = Url::parse(&config.url).map_err(|e| NotifierError::Configuration {
            message: format!("invalid Slack webhook URL: {e}"),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NotifierError::Configuration {
                message: format!("could not build HTTP client: {e}"),
            })?;

        Ok(Self { url, client })
    }
}

fn request_error(e: reqwest::Error) -> TransportError {
    TransportError::Request {
        source: Box::new(e),
    }
}

#[async_trait]
impl Transport for SlackWebhookTransport {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn send(&self, message: &NotificationMessage) -> Result<String, TransportError> {
        let body = serde_json::to_vec(&SlackPayload::from(message)).map_err(|e| {
            TransportError::Serialization {
                message: e.to_string(),
            }
        })?;

        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().await.map_err(request_error)?;

        if !status.is_success() {
            warn!("Slack webhook failed: {} - {}", status, text);
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("Slack notification sent to {}", message.channel);
        Ok(text)
    }
}
