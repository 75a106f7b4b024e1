use crate::{domain::Notification, dto::output::Delivery};
use async_trait::async_trait;

///
/// Routes a freshly appended notification to the active viewer's
/// presentation. Runs synchronously at append time; there is no
/// polling side.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryService: Send + Sync {
    ///
    /// Decide whether the current viewer gets a toast and a sound for
    /// the notification, and push eligible ones into presentation.
    ///
    async fn deliver(&self, notification: &Notification) -> Delivery;
}
