//! Delivery port.
//!
//! Implemented by infrastructure crates (e.g. `slack`). The domain crate only
//! knows that a message goes in and a response body or a [`TransportError`]
//! comes out.

use async_trait::async_trait;

use crate::{NotificationMessage, TransportError};

/// Delivers one complete [`NotificationMessage`].
///
/// Implementations own every network concern: endpoint, encoding, timeout.
/// They must not retry on the caller's behalf.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in logs (e.g. `"slack"`).
    fn name(&self) -> &'static str;

    /// Sends `message` and returns the response body.
    async fn send(&self, message: &NotificationMessage) -> Result<String, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn send(&self, message: &NotificationMessage) -> Result<String, TransportError> {
        (**self).send(message).await
    }
}
