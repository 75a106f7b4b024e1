use super::DeliveryService;
use crate::{
    domain::{Notification, Recipient},
    dto::output::Delivery,
    service::{sounds_service::SoundsService, toasts_service::ToastsService},
    session::Session,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

///
/// Toast and sound fire iff the notification is a broadcast or is
/// addressed to the current viewer. Notifications for other members
/// still live in the shared event store; they surface for their
/// recipient through the notification center instead.
///
pub fn toast_eligible(recipient: &Recipient, viewer: Option<Uuid>) -> bool {
    match recipient {
        Recipient::All => true,
        Recipient::Member(id) => viewer == Some(*id),
    }
}

pub struct DeliveryServiceImpl {
    session: Arc<Session>,
    toasts_service: Arc<dyn ToastsService>,
    sounds_service: Arc<dyn SoundsService>,
}

impl DeliveryServiceImpl {
    pub fn new(
        session: Arc<Session>,
        toasts_service: Arc<dyn ToastsService>,
        sounds_service: Arc<dyn SoundsService>,
    ) -> Self {
        Self {
            session,
            toasts_service,
            sounds_service,
        }
    }
}

#[async_trait]
impl DeliveryService for DeliveryServiceImpl {
    async fn deliver(&self, notification: &Notification) -> Delivery {
        let viewer = self.session.viewer().await;
        let eligible = toast_eligible(&notification.recipient, viewer);

        if eligible {
            self.toasts_service.push(notification.clone()).await;
            self.sounds_service.play(notification.sound).await;
        }

        Delivery {
            toast: eligible,
            sound: eligible,
        }
    }
}
