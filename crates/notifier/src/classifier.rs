//! Source-tag classification and the formatter registry.
//!
//! The registry is a fixed table keyed by source tag. Each entry names the
//! family, the display name messages are posted under, the destination the
//! family posts to, and the formatter that renders it. Adding a family means
//! adding one row and one formatter module.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::formatters::{
    render, AlertFormatter, ClusterFormatter, EcsFormatter, PipelineFormatter, RenderFn, Rendered,
};
use crate::{
    DestinationKind, Destinations, InboundEvent, NotificationMessage, NotifierError, AWS_ICON_URL,
};

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// The event-producing families Herald understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFamily {
    CodePipeline,
    Ecs,
    Emr,
    Lambda,
    Alert,
}

impl EventFamily {
    /// Looks up the family registered for `source_tag` (exact match).
    pub fn from_source_tag(source_tag: &str) -> Option<Self> {
        entry_for(source_tag).map(|e| e.family)
    }

    /// The source tag this family is registered under.
    pub fn source_tag(self) -> &'static str {
        self.entry().source_tag
    }

    /// Name messages from this family are posted under.
    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    pub fn destination(self) -> DestinationKind {
        self.entry().destination
    }

    fn entry(self) -> &'static RegistryEntry {
        // Every variant has exactly one row; the index is the declaration order.
        &REGISTRY[self as usize]
    }
}

impl std::fmt::Display for EventFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source_tag())
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

struct RegistryEntry {
    source_tag: &'static str,
    family: EventFamily,
    display_name: &'static str,
    destination: DestinationKind,
    render: RenderFn,
}

/// Rows are in [`EventFamily`] declaration order.
static REGISTRY: [RegistryEntry; 5] = [
    RegistryEntry {
        source_tag: "aws.codepipeline",
        family: EventFamily::CodePipeline,
        display_name: "aws-codepipeline-webhook",
        destination: DestinationKind::Default,
        render: render::<PipelineFormatter>,
    },
    RegistryEntry {
        source_tag: "aws.ecs",
        family: EventFamily::Ecs,
        display_name: "AWS",
        destination: DestinationKind::Default,
        render: render::<EcsFormatter>,
    },
    RegistryEntry {
        source_tag: "aws.emr",
        family: EventFamily::Emr,
        display_name: "aws-emr",
        destination: DestinationKind::Default,
        render: render::<ClusterFormatter>,
    },
    RegistryEntry {
        source_tag: "aws.lambda",
        family: EventFamily::Lambda,
        display_name: "aws-lambda",
        destination: DestinationKind::Default,
        render: render::<ClusterFormatter>,
    },
    RegistryEntry {
        source_tag: "alert.notification",
        family: EventFamily::Alert,
        display_name: "aws-alert-notification",
        destination: DestinationKind::Alert,
        render: render::<AlertFormatter>,
    },
];

fn entry_for(source_tag: &str) -> Option<&'static RegistryEntry> {
    REGISTRY.iter().find(|e| e.source_tag == source_tag)
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why an event produced no message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    /// The source tag is missing or not in the registry.
    UnrecognizedSource {
        /// The normalized tag, if there was one.
        source: Option<String>,
    },
    /// The family's gate filtered the event out.
    Uninteresting { family: EventFamily, reason: String },
}

/// Result of classifying and formatting one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A complete message to hand to the transport.
    Message(NotificationMessage),
    /// Do not send; the event was expected traffic but not worth a message.
    Suppressed(Suppression),
    /// The family has nothing to say about this state (cluster events that
    /// are neither `FAILED` nor `COMPLETED`).
    NoOutput { family: EventFamily, reason: String },
}

impl Outcome {
    /// Returns the message, if there is one to send.
    pub fn message(&self) -> Option<&NotificationMessage> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_message(self) -> Option<NotificationMessage> {
        match self {
            Self::Message(m) => Some(m),
            _ => None,
        }
    }

    /// `true` for the suppression sentinel (unrecognized or uninteresting).
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed(_))
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Maps inbound events to notification outcomes.
///
/// Pure apart from logging: no I/O, no state between calls.
#[derive(Debug, Clone)]
pub struct Classifier {
    destinations: Destinations,
}

impl Classifier {
    pub fn new(destinations: Destinations) -> Self {
        Self { destinations }
    }

    /// Classifies `event` and runs the matching formatter.
    ///
    /// Unknown sources are not an error. The only error is
    /// [`NotifierError::MalformedEvent`] for a recognized event that lacks a
    /// field its formatter needs.
    pub fn classify(&self, event: &InboundEvent) -> Result<Outcome, NotifierError> {
        let Some(source_tag) = event.source_tag() else {
            info!(source = ?event.as_value().get("source"), "Ignored event without a usable source");
            return Ok(Outcome::Suppressed(Suppression::UnrecognizedSource { source: None }));
        };

        let Some(entry) = entry_for(source_tag) else {
            info!(source = source_tag, "Ignored event type");
            return Ok(Outcome::Suppressed(Suppression::UnrecognizedSource {
                source: Some(source_tag.to_string()),
            }));
        };

        let family = entry.family;
        match (entry.render)(event, source_tag)? {
            Rendered::Attachment(attachment) => {
                let message = NotificationMessage {
                    channel: self.destinations.channel_for(entry.destination).clone(),
                    icon: AWS_ICON_URL.to_string(),
                    display_name: entry.display_name.to_string(),
                    attachment,
                };
                debug!(%family, channel = %message.channel, text = message.text(), "Built notification");
                Ok(Outcome::Message(message))
            }
            Rendered::Suppressed(reason) => {
                info!(%family, %reason, "Ignoring event");
                Ok(Outcome::Suppressed(Suppression::Uninteresting { family, reason }))
            }
            Rendered::NoOutput(reason) => {
                info!(%family, %reason, "Nothing to send");
                Ok(Outcome::NoOutput { family, reason })
            }
        }
    }
}
