//! Herald Slack incoming-webhook transport.
//!
//! Implements the [`notifier::Transport`] trait by POSTing a legacy-attachment
//! payload to a Slack incoming webhook.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, payload encoding and timeout handling
//! live here. The [`notifier`] crate sees only [`notifier::Transport`].
//!
//! ## Delivery contract
//!
//! One request per message, no retries. A 2xx response yields the response
//! body (Slack answers `ok`); any other status becomes
//! [`notifier::TransportError::Rejected`].

mod config;
mod payload;
mod transport;

pub use config::{SlackWebhookConfig, SLACK_HOOKS_BASE_URL};
pub use payload::SlackPayload;
pub use transport::SlackWebhookTransport;
