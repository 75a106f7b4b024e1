use super::EventStore;
use crate::{
    domain::{Notification, Recipient},
    dto::input::ClearScope,
    repository::Error,
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

///
/// Event store backed by a plain vector held newest first, matching
/// the prepend order of the persisted snapshot shape.
///
pub struct InMemoryEventStore {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::with_notifications(Vec::new())
    }

    /// Rehydrate from a snapshot; `notifications` must be newest first.
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let notifications = Mutex::new(notifications);

        Self { notifications }
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, notification: Notification) -> Result<(), Error> {
        let mut notifications = self.notifications.lock().await;
        notifications.insert(0, notification);

        Ok(())
    }

    async fn find_for_recipient(&self, viewer: Uuid) -> Vec<Notification> {
        let notifications = self.notifications.lock().await;
        notifications
            .iter()
            .filter(|notification| notification.recipient.includes(viewer))
            .cloned()
            .collect()
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), Error> {
        let mut notifications = self.notifications.lock().await;
        let notification = notifications
            .iter_mut()
            .find(|notification| notification.id == id)
            .ok_or(Error::NoEntryUpdated)?;

        notification.read = true;

        Ok(())
    }

    async fn clear(&self, scope: ClearScope) {
        let mut notifications = self.notifications.lock().await;
        match scope {
            ClearScope::All => notifications.clear(),
            ClearScope::Mine(member_id) => notifications
                .retain(|notification| notification.recipient != Recipient::Member(member_id)),
        }
    }

    async fn dump(&self) -> Vec<Notification> {
        self.notifications.lock().await.clone()
    }
}
