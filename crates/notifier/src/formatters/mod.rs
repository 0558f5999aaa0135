//! One formatter per event family.
//!
//! A formatter is a pair of pure functions over two typed views of the event:
//! [`Formatter::gate`] reads only the fields the family filter needs, and
//! [`Formatter::attachment`] builds the message body once the gate passes.
//! The body view is deserialized after the gate, so events that are filtered
//! out never have their body fields checked.
//! Channel, icon and display name are filled in by the classifier from the
//! registry entry, so formatters never see configuration.

mod alert;
mod cluster;
mod ecs;
mod pipeline;

pub(crate) use alert::AlertFormatter;
pub(crate) use cluster::ClusterFormatter;
pub(crate) use ecs::EcsFormatter;
pub(crate) use pipeline::PipelineFormatter;

use serde::de::DeserializeOwned;

use crate::{Attachment, InboundEvent, NotifierError};

/// Description of a missing or mistyped field, without the source tag.
pub(crate) type Malformed = String;

/// Result of a family's interest check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Gate {
    Notify,
    /// Recognized but uninteresting; carries the reason for the log.
    Suppress(String),
    /// The family has nothing to say about this event at all.
    NoOutput(String),
}

pub(crate) trait Formatter {
    /// Fields the interest check reads.
    type Filter: DeserializeOwned;
    /// Fields only the message body reads.
    type Body: DeserializeOwned;

    fn gate(filter: &Self::Filter) -> Result<Gate, Malformed>;

    fn attachment(filter: &Self::Filter, body: &Self::Body) -> Result<Attachment, Malformed>;
}

/// What a registry entry produced for one event.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Rendered {
    Attachment(Attachment),
    Suppressed(String),
    NoOutput(String),
}

/// Type-erased entry point stored in the registry.
pub(crate) type RenderFn = fn(&InboundEvent, &str) -> Result<Rendered, NotifierError>;

pub(crate) fn render<F: Formatter>(
    event: &InboundEvent,
    source_tag: &str,
) -> Result<Rendered, NotifierError> {
    let filter: F::Filter = event.view(source_tag)?;
    let malformed = |reason: Malformed| NotifierError::malformed(source_tag, reason);

    match F::gate(&filter).map_err(malformed)? {
        Gate::Notify => {
            let body: F::Body = event.view(source_tag)?;
            F::attachment(&filter, &body)
                .map(Rendered::Attachment)
                .map_err(malformed)
        }
        Gate::Suppress(reason) => Ok(Rendered::Suppressed(reason)),
        Gate::NoOutput(reason) => Ok(Rendered::NoOutput(reason)),
    }
}

/// First element of a list field that must not be empty.
pub(crate) fn first<'a, T>(items: Option<&'a T>, path: &str) -> Result<&'a T, Malformed> {
    items.ok_or_else(|| format!("`{path}` is empty"))
}
