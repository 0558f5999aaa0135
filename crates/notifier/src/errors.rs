//! Error types for the Herald notification domain.
//!
//! [`NotifierError`] covers conditions that end a single invocation: an event
//! that cannot be formatted, invalid configuration, or a failed delivery.
//! Suppressed and unrecognized events are *not* errors; they are reported
//! through [`crate::Outcome`].
//!
//! [`TransportError`] is produced by [`crate::Transport`] implementations and
//! carried through [`NotifierError::Transport`] without interpretation.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Failure reported by a [`crate::Transport`] implementation.
///
/// The core never retries or reclassifies these; they surface to the caller
/// exactly as the transport produced them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its response could not be read
    /// (connection refused, DNS failure, timeout, broken body stream).
    #[error("Webhook request failed: {source}")]
    Request {
        /// Underlying client error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint answered with a non-success status code.
    #[error("Webhook rejected the message: {status} - {body}")]
    Rejected {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, usually a short reason such as `invalid_payload`.
        body: String,
    },

    /// The message could not be encoded into the transport's wire format.
    #[error("Could not encode message: {message}")]
    Serialization {
        /// Description of the encoding problem.
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Invocation-level errors
// ---------------------------------------------------------------------------

/// Errors that end a single classify-format-deliver invocation.
#[derive(Debug, Error)]
pub enum NotifierError {
    /// A recognized event is missing a field its formatter consumes, or the
    /// field has an unexpected shape.
    ///
    /// Raised before any transport call is attempted.
    #[error("Malformed '{source_tag}' event: {reason}")]
    MalformedEvent {
        /// Normalized source tag of the offending event.
        source_tag: String,
        /// What was missing or mistyped.
        reason: String,
    },

    /// Runtime configuration is invalid.
    ///
    /// Produced at start-up; no event is handled with an invalid configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// The transport failed to deliver a populated message.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl NotifierError {
    pub(crate) fn malformed(source_tag: &str, reason: impl Into<String>) -> Self {
        Self::MalformedEvent {
            source_tag: source_tag.to_string(),
            reason: reason.into(),
        }
    }
}
