//! Destination configuration handed to the classifier at construction time.
//!
//! Resolution (environment, flags, files) happens once at process start in the
//! composition root; this crate only sees the resolved values.

use serde::{Deserialize, Serialize};

use crate::{ChannelName, NotifierError};

/// Which configured destination a family posts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    /// The general infrastructure channel.
    Default,
    /// The channel reserved for `alert.notification` events.
    Alert,
}

/// Destination channel per [`DestinationKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destinations {
    default: ChannelName,
    alert: ChannelName,
}

impl Destinations {
    pub fn new(default: ChannelName, alert: ChannelName) -> Self {
        Self { default, alert }
    }

    /// Validates raw configuration values.
    ///
    /// Returns [`NotifierError::Configuration`] naming the first blank value.
    pub fn from_names(default: &str, alert: &str) -> Result<Self, NotifierError> {
        let default = ChannelName::new(default).ok_or_else(|| NotifierError::Configuration {
            message: "default destination channel is empty".to_string(),
        })?;
        let alert = ChannelName::new(alert).ok_or_else(|| NotifierError::Configuration {
            message: "alert destination channel is empty".to_string(),
        })?;
        Ok(Self::new(default, alert))
    }

    pub fn channel_for(&self, kind: DestinationKind) -> &ChannelName {
        match kind {
            DestinationKind::Default => &self.default,
            DestinationKind::Alert => &self.alert,
        }
    }
}
