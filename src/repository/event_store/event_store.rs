use crate::{domain::Notification, dto::input::ClearScope, repository::Error};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Append-only log of notifications, newest first.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    ///
    /// Append notification at the head of the log. The record arrives
    /// fully formed; identity fields are never touched afterwards.
    ///
    async fn append(&self, notification: Notification) -> Result<(), Error>;

    ///
    /// All notifications addressed to the viewer or broadcast to
    /// everyone, newest first. An unknown viewer yields an empty list.
    ///
    async fn find_for_recipient(&self, viewer: Uuid) -> Vec<Notification>;

    ///
    /// Flip the read flag of the notification to true.
    ///
    /// ### Errors
    /// - [Error::NoEntryUpdated] when notification with id does not exist
    ///
    async fn mark_read(&self, id: Uuid) -> Result<(), Error>;

    ///
    /// Remove notifications matching scope.
    ///
    async fn clear(&self, scope: ClearScope);

    ///
    /// The entire log, newest first, for snapshot export.
    ///
    async fn dump(&self) -> Vec<Notification>;
}
