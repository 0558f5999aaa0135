//! Slack webhook configuration.

use serde::{Deserialize, Serialize};

/// Host incoming-webhook paths are resolved against.
pub const SLACK_HOOKS_BASE_URL: &str = "https://hooks.slack.com";

/// Slack webhook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackWebhookConfig {
    /// Full incoming-webhook URL.
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl SlackWebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout(),
        }
    }

    /// Builds a config from a webhook path such as `/services/T000/B000/XXXX`.
    ///
    /// A missing leading slash is added.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        if path.starts_with('/') {
            Self::new(format!("{SLACK_HOOKS_BASE_URL}{path}"))
        } else {
            Self::new(format!("{SLACK_HOOKS_BASE_URL}/{path}"))
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
