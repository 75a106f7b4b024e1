use super::NotificationsService;
use crate::{
    domain::{Notification, NotificationKind},
    dto::{
        input::{ClearScope, NotificationDraft, NotificationFilter, Sender},
        output::Delivery,
    },
    error::Error,
    repository::{self, EventStore},
    service::delivery_service::DeliveryService,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    event_store: Arc<dyn EventStore>,
    delivery_service: Arc<dyn DeliveryService>,
}

impl NotificationsServiceImpl {
    pub fn new(
        event_store: Arc<dyn EventStore>,
        delivery_service: Arc<dyn DeliveryService>,
    ) -> Self {
        Self {
            event_store,
            delivery_service,
        }
    }

    fn validate_publish(draft: &NotificationDraft) -> Result<(), Error> {
        if draft.content.trim().is_empty() {
            return Err(Error::Validation("content is empty"));
        }

        Ok(())
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn publish(
        &self,
        sender: Sender,
        draft: NotificationDraft,
    ) -> Result<(Notification, Delivery), Error> {
        tracing::info!(kind = %draft.kind, "creating notification");
        tracing::trace!(?draft);

        Self::validate_publish(&draft)?;

        let notification = Notification {
            id: Uuid::new_v4(),
            recipient: draft.recipient,
            sender: sender.id,
            sender_name: sender.name,
            sender_avatar: sender.avatar,
            kind: draft.kind,
            content: draft.content,
            related_id: draft.related_id,
            timestamp: OffsetDateTime::now_utc(),
            read: false,
            sound: draft.sound,
        };

        self.event_store.append(notification.clone()).await?;

        let delivery = self.delivery_service.deliver(&notification).await;
        tracing::info!(id = %notification.id, ?delivery, "created notification");

        Ok((notification, delivery))
    }

    async fn find_notifications(
        &self,
        viewer: Uuid,
        filter: NotificationFilter,
    ) -> Vec<Notification> {
        let mut notifications = self.event_store.find_for_recipient(viewer).await;
        notifications.retain(|notification| filter.matches(notification));

        notifications
    }

    async fn unread_count(&self, viewer: Uuid) -> usize {
        self.event_store
            .find_for_recipient(viewer)
            .await
            .iter()
            .filter(|notification| !notification.read)
            .count()
    }

    async fn latest_announcement(&self, viewer: Uuid) -> Option<Notification> {
        self.event_store
            .find_for_recipient(viewer)
            .await
            .into_iter()
            .find(|notification| {
                !notification.read && notification.kind == NotificationKind::Announcement
            })
    }

    async fn mark_read(&self, id: Uuid) {
        match self.event_store.mark_read(id).await {
            Ok(()) => tracing::trace!(%id, "marked notification read"),
            Err(repository::Error::NoEntryUpdated) => {
                tracing::debug!(%id, "mark read skipped, notification not found");
            }
            Err(err) => tracing::warn!(%err, %id, "mark read failed"),
        }
    }

    async fn clear(&self, scope: ClearScope) {
        tracing::info!(?scope, "clearing notifications");

        self.event_store.clear(scope).await;
    }
}
