//! Core notification domain for Herald.
//!
//! Herald turns one infrastructure event (CodePipeline, ECS, EMR, Lambda, or a
//! monitoring alert) into at most one chat notification. This crate holds the
//! classification and formatting rules and the [`Transport`] port; transport
//! crates implement the port, they never add formatting rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It decides *what* to send; infrastructure crates decide *how* to send it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`event`] | The inbound event envelope and source-tag normalization |
//! | [`classifier`] | Formatter registry, [`Classifier`], [`Outcome`] |
//! | `formatters` | One gate + attachment builder per event family |
//! | [`status`] | Success-state predicate |
//! | [`types`] | Message value types (`NotificationMessage`, `Attachment`, `Color`, ...) |
//! | [`config`] | Destination channels per family |
//! | [`transport`] | The [`Transport`] port |
//! | [`service`] | [`Notifier`]: one classify-and-deliver invocation |
//! | [`identifiers`] | `ChannelName`, `InvocationId` |
//! | [`errors`] | [`NotifierError`], [`TransportError`] |

pub mod classifier;
pub mod config;
pub mod errors;
pub mod event;
mod formatters;
pub mod identifiers;
pub mod service;
pub mod status;
pub mod transport;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use classifier::{Classifier, EventFamily, Outcome, Suppression};
pub use config::{DestinationKind, Destinations};
pub use errors::{NotifierError, TransportError};
pub use event::InboundEvent;
pub use identifiers::{ChannelName, InvocationId};
pub use service::{Delivery, Notifier};
pub use status::{is_success_state, SUCCESS_MARKERS};
pub use transport::Transport;
pub use types::{Attachment, Color, Field, NotificationMessage, AWS_ICON_URL};
