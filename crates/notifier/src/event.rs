//! The inbound event envelope.
//!
//! Events arrive as loosely shaped JSON documents. [`InboundEvent`] keeps the
//! document as-is; the classifier only looks at `source`, and each formatter
//! deserializes the handful of fields it consumes into its own typed view.
//! Fields no formatter reads are never validated.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::NotifierError;

/// One structured infrastructure event, as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundEvent(Value);

impl InboundEvent {
    /// Wraps an already-parsed JSON document.
    pub fn from_value(document: Value) -> Self {
        Self(document)
    }

    /// Parses an event from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self)
    }

    /// Returns the raw event document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns the normalized source tag.
    ///
    /// `"aws.ecs"` and `["aws.ecs"]` both normalize to `"aws.ecs"`. A list
    /// contributes its first element. Missing, `null`, non-string and empty
    /// values yield `None`.
    pub fn source_tag(&self) -> Option<&str> {
        let tag = match self.0.get("source")? {
            Value::String(s) => s.as_str(),
            Value::Array(items) => items.first()?.as_str()?,
            _ => return None,
        };
        if tag.is_empty() {
            None
        } else {
            Some(tag)
        }
    }

    /// Deserializes the typed view a formatter needs.
    ///
    /// Missing or mistyped fields become [`NotifierError::MalformedEvent`].
    pub(crate) fn view<T: DeserializeOwned>(&self, source_tag: &str) -> Result<T, NotifierError> {
        T::deserialize(&self.0).map_err(|e| NotifierError::malformed(source_tag, e.to_string()))
    }
}

impl From<Value> for InboundEvent {
    fn from(document: Value) -> Self {
        Self::from_value(document)
    }
}

// ---------------------------------------------------------------------------

/// A value that producers send either bare or wrapped in a list.
///
/// EMR and Lambda cluster events carry `clusterId` and `state` as
/// single-element lists; some producers send the bare string instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// The bare value, or the first element of the list.
    pub(crate) fn first(&self) -> Option<&T> {
        match self {
            Self::One(v) => Some(v),
            Self::Many(items) => items.first(),
        }
    }
}

// ---------------------------------------------------------------------------

/// A JSON scalar rendered as text in a message field.
///
/// Alert producers send counts as numbers and descriptions as strings; both
/// end up as field text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    /// JSON `null`; renders as an empty field.
    Null,
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"source": "aws.ecs"}), Some("aws.ecs"))]
    #[case(json!({"source": ["aws.ecs"]}), Some("aws.ecs"))]
    #[case(json!({"source": ["aws.emr", "aws.ecs"]}), Some("aws.emr"))]
    #[case(json!({"source": ""}), None)]
    #[case(json!({"source": []}), None)]
    #[case(json!({"source": [""]}), None)]
    #[case(json!({"source": null}), None)]
    #[case(json!({"source": 7}), None)]
    #[case(json!({"source": [7]}), None)]
    #[case(json!({}), None)]
    #[case(json!("not an object"), None)]
    fn test_source_tag_normalization(#[case] document: Value, #[case] expected: Option<&str>) {
        let event = InboundEvent::from_value(document);
        assert_eq!(event.source_tag(), expected);
    }

    #[test]
    fn test_from_json() {
        let event = InboundEvent::from_json(r#"{"source":["aws.lambda"],"detail":{}}"#).unwrap();
        assert_eq!(event.source_tag(), Some("aws.lambda"));
        assert!(InboundEvent::from_json("{").is_err());
    }

    #[test]
    fn test_view_reports_missing_field() {
        #[derive(Debug, Deserialize)]
        struct View {
            #[allow(dead_code)]
            detail: Detail,
        }
        #[derive(Debug, Deserialize)]
        struct Detail {
            #[allow(dead_code)]
            stage: String,
        }

        let event = InboundEvent::from_value(json!({"source": "aws.codepipeline", "detail": {}}));
        let err = event.view::<View>("aws.codepipeline").unwrap_err();
        match err {
            NotifierError::MalformedEvent { source_tag, reason } => {
                assert_eq!(source_tag, "aws.codepipeline");
                assert!(reason.contains("stage"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_one_or_many_first() {
        let one: OneOrMany<String> = serde_json::from_value(json!("j-1")).unwrap();
        let many: OneOrMany<String> = serde_json::from_value(json!(["j-2", "j-3"])).unwrap();
        let empty: OneOrMany<String> = serde_json::from_value(json!([])).unwrap();

        assert_eq!(one.first().map(String::as_str), Some("j-1"));
        assert_eq!(many.first().map(String::as_str), Some("j-2"));
        assert_eq!(empty.first(), None);
    }

    #[rstest]
    #[case(json!("d1"), "d1")]
    #[case(json!(3), "3")]
    #[case(json!(2.5), "2.5")]
    #[case(json!(true), "true")]
    #[case(json!(null), "")]
    fn test_scalar_display(#[case] value: Value, #[case] expected: &str) {
        let scalar: Scalar = serde_json::from_value(value).unwrap();
        assert_eq!(scalar.to_string(), expected);
    }
}
