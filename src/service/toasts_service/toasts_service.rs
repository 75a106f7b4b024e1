use super::Toast;
use crate::domain::Notification;
use async_trait::async_trait;
use uuid::Uuid;

///
/// Queue of toasts visible to the active viewer. Each toast runs its
/// own expiry timer; none of the operations reach the event store.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ToastsService: Send + Sync {
    ///
    /// Show the notification at the head of the visible list. The
    /// toast dismisses itself after the configured lifespan unless
    /// dismissed earlier.
    ///
    async fn push(&self, notification: Notification);

    ///
    /// Hide the toast. Idempotent; a timer firing afterwards is a
    /// no-op.
    ///
    async fn dismiss(&self, id: Uuid);

    ///
    /// Dismiss the toast because the viewer clicked it, returning the
    /// related record id the shell should navigate to.
    ///
    async fn open(&self, id: Uuid) -> Option<Uuid>;

    /// Currently visible toasts, newest first.
    async fn visible(&self) -> Vec<Toast>;
}
