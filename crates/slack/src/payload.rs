//! Slack legacy-attachment wire format.

use serde::Serialize;

use notifier::{Attachment, Field, NotificationMessage};

/// The JSON body posted to an incoming webhook.
///
/// Borrows from the [`NotificationMessage`] it was built from.
#[derive(Debug, Serialize)]
pub struct SlackPayload<'a> {
    channel: &'a str,
    icon_url: &'a str,
    username: &'a str,
    attachments: [SlackAttachment<'a>; 1],
}

#[derive(Debug, Serialize)]
struct SlackAttachment<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
    fields: Vec<SlackField<'a>>,
}

#[derive(Debug, Serialize)]
struct SlackField<'a> {
    title: &'a str,
    value: &'a str,
    short: bool,
}

impl<'a> From<&'a NotificationMessage> for SlackPayload<'a> {
    fn from(message: &'a NotificationMessage) -> Self {
        Self {
            channel: message.channel.as_str(),
            icon_url: &message.icon,
            username: &message.display_name,
            attachments: [SlackAttachment::from(&message.attachment)],
        }
    }
}

impl<'a> From<&'a Attachment> for SlackAttachment<'a> {
    fn from(attachment: &'a Attachment) -> Self {
        Self {
            text: &attachment.text,
            color: attachment.color.map(|c| c.hex()),
            fields: attachment.fields.iter().map(SlackField::from).collect(),
        }
    }
}

impl<'a> From<&'a Field> for SlackField<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            title: &field.title,
            value: &field.value,
            short: field.short,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier::{ChannelName, Color, AWS_ICON_URL};
    use serde_json::json;

    fn message(color: Option<Color>) -> NotificationMessage {
        let mut attachment = Attachment::new("cluster j-1 has failed")
            .with_field(Field::short("State", "FAILED"));
        attachment.color = color;
        NotificationMessage {
            channel: ChannelName::new("#infra").unwrap(),
            icon: AWS_ICON_URL.to_string(),
            display_name: "aws-emr".to_string(),
            attachment,
        }
    }

    #[test]
    fn test_payload_shape() {
        let message = message(Some(Color::Failure));
        let payload = serde_json::to_value(SlackPayload::from(&message)).unwrap();

        assert_eq!(
            payload,
            json!({
                "channel": "#infra",
                "icon_url": "https://docs.aws.amazon.com/images/aws_logo_105x39.png",
                "username": "aws-emr",
                "attachments": [{
                    "text": "cluster j-1 has failed",
                    "color": "#b82004",
                    "fields": [{ "title": "State", "value": "FAILED", "short": true }]
                }]
            })
        );
    }

    #[test]
    fn test_uncolored_payload_omits_color() {
        let message = message(None);
        let payload = serde_json::to_value(SlackPayload::from(&message)).unwrap();
        assert!(payload["attachments"][0].get("color").is_none());
    }
}
