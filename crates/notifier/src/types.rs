//! Shared value types for outbound notifications.
//!
//! A [`NotificationMessage`] is always fully populated: formatters either build
//! one completely or return a non-message [`crate::Outcome`]. Transports decide
//! how these values map onto their wire format.

use serde::{Deserialize, Serialize};

use crate::ChannelName;

/// Icon shown next to every message Herald posts.
pub const AWS_ICON_URL: &str = "https://docs.aws.amazon.com/images/aws_logo_105x39.png";

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// Attachment accent color, derived from a success-state test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Green, `#3fb836`.
    Success,
    /// Red, `#b82004`.
    Failure,
}

impl Color {
    /// Picks [`Color::Success`] when `state` is a success state.
    pub fn for_state(state: &str) -> Self {
        if crate::status::is_success_state(state) {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Returns the color as a `#rrggbb` hex string.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Success => "#3fb836",
            Self::Failure => "#b82004",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

// ---------------------------------------------------------------------------
// Attachment fields
// ---------------------------------------------------------------------------

/// One titled value rendered inside an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    /// Layout hint: `true` lets the client place the field side by side with
    /// its neighbour.
    pub short: bool,
}

impl Field {
    /// A field rendered at half width.
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    /// A field rendered across the full width.
    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}

// ---------------------------------------------------------------------------

/// The body of a notification: headline text, optional color, ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub fields: Vec<Field>,
}

impl Attachment {
    /// Creates an uncolored attachment with no fields.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field value by title.
    pub fn field(&self, title: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.title == title)
            .map(|f| f.value.as_str())
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A complete chat notification ready to be handed to a [`crate::Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    /// Destination channel.
    pub channel: ChannelName,
    /// Avatar URL for the posting identity.
    pub icon: String,
    /// Name the message is posted under (e.g. `"aws-emr"`).
    pub display_name: String,
    /// The single attachment carrying text, color and fields.
    pub attachment: Attachment,
}

impl NotificationMessage {
    /// Convenience accessor for the attachment headline.
    pub fn text(&self) -> &str {
        &self.attachment.text
    }

    /// Convenience accessor for the attachment color.
    pub fn color(&self) -> Option<Color> {
        self.attachment.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::Success.hex(), "#3fb836");
        assert_eq!(Color::Failure.to_string(), "#b82004");
    }

    #[test]
    fn test_color_for_state() {
        assert_eq!(Color::for_state("SUCCEEDED"), Color::Success);
        assert_eq!(Color::for_state("FAILED"), Color::Failure);
    }

    #[test]
    fn test_attachment_builder_keeps_field_order() {
        let attachment = Attachment::new("hello")
            .with_color(Color::Failure)
            .with_field(Field::long("A", "1"))
            .with_field(Field::short("B", "2"));

        let titles: Vec<_> = attachment.fields.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert!(!attachment.fields[0].short);
        assert!(attachment.fields[1].short);
        assert_eq!(attachment.field("B"), Some("2"));
        assert_eq!(attachment.field("C"), None);
    }

    #[test]
    fn test_uncolored_attachment_omits_color() {
        let json = serde_json::to_value(Attachment::new("x")).unwrap();
        assert!(json.get("color").is_none());
    }
}
