use crate::{
    domain::Notification,
    dto::{
        input::{ClearScope, NotificationDraft, NotificationFilter, Sender},
        output::Delivery,
    },
    error::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Create the notification, append it to the event log and route
    /// it to the active viewer's presentation.
    ///
    /// ### Returns
    /// The created notification and the delivery decision for the
    /// current viewer
    ///
    /// ### Errors
    /// - [Error::Validation] when content is empty
    ///
    async fn publish(
        &self,
        sender: Sender,
        draft: NotificationDraft,
    ) -> Result<(Notification, Delivery), Error>;

    ///
    /// Notifications visible to the viewer matching the filter,
    /// newest first.
    ///
    async fn find_notifications(
        &self,
        viewer: Uuid,
        filter: NotificationFilter,
    ) -> Vec<Notification>;

    /// Count of unread notifications visible to the viewer.
    async fn unread_count(&self, viewer: Uuid) -> usize;

    /// Most recent unread announcement visible to the viewer.
    async fn latest_announcement(&self, viewer: Uuid) -> Option<Notification>;

    ///
    /// Flip the notification's read flag to true. Unknown ids and
    /// already read notifications are no-ops, not errors.
    ///
    async fn mark_read(&self, id: Uuid);

    ///
    /// Remove notifications matching scope from the event log. Visible
    /// toasts are unaffected.
    ///
    async fn clear(&self, scope: ClearScope);
}
