//! Transport used by `--dry-run`: renders the Slack payload instead of posting it.

use async_trait::async_trait;
use notifier::{NotificationMessage, Transport, TransportError};
use slack::SlackPayload;

pub struct DryRunTransport;

#[async_trait]
impl Transport for DryRunTransport {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    /// Returns the pretty-printed payload as the "response body".
    async fn send(&self, message: &NotificationMessage) -> Result<String, TransportError> {
        serde_json::to_string_pretty(&SlackPayload::from(message)).map_err(|e| {
            TransportError::Serialization {
                message: e.to_string(),
            }
        })
    }
}
