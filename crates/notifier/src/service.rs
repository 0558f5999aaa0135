//! One invocation: classify, format, deliver at most once.

use tracing::{debug, info, Instrument};

use crate::{Classifier, InboundEvent, InvocationId, NotifierError, Outcome, Transport};

/// What happened to one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// The message was handed to the transport, which returned this body.
    Sent { response_body: String },
    /// Nothing was sent; the outcome says why.
    Skipped(Outcome),
}

impl Delivery {
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Sent { response_body } => Some(response_body),
            Self::Skipped(_) => None,
        }
    }
}

/// Ties a [`Classifier`] to a [`Transport`].
pub struct Notifier<T> {
    classifier: Classifier,
    transport: T,
}

impl<T: Transport> Notifier<T> {
    pub fn new(classifier: Classifier, transport: T) -> Self {
        Self {
            classifier,
            transport,
        }
    }

    /// Handles one event under a fresh [`InvocationId`].
    pub async fn handle(&self, event: &InboundEvent) -> Result<Delivery, NotifierError> {
        self.handle_with_id(InvocationId::new_random(), event).await
    }

    /// Handles one event.
    ///
    /// The transport is called at most once, and only for a populated
    /// message. Its error is returned unchanged inside
    /// [`NotifierError::Transport`].
    pub async fn handle_with_id(
        &self,
        invocation_id: InvocationId,
        event: &InboundEvent,
    ) -> Result<Delivery, NotifierError> {
        let span = tracing::info_span!(
            "handle_event",
            invocation_id = %invocation_id,
            source = event.source_tag().unwrap_or("<none>"),
        );

        async move {
            debug!(event = %event.as_value(), "Event");

            let message = match self.classifier.classify(event)? {
                Outcome::Message(message) => message,
                other => return Ok(Delivery::Skipped(other)),
            };

            info!(
                transport = self.transport.name(),
                channel = %message.channel,
                "Ready to post"
            );
            let response_body = self.transport.send(&message).await?;
            debug!(response = %response_body, "Posted");

            Ok::<_, NotifierError>(Delivery::Sent { response_body })
        }
        .instrument(span)
        .await
    }
}
