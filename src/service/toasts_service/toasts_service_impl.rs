use super::{Toast, ToastsService};
use crate::domain::Notification;
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct ToastsServiceConfig {
    pub toast_lifespan: Duration,
}

pub struct ToastsServiceImpl {
    config: ToastsServiceConfig,
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastsServiceImpl {
    pub fn new(config: ToastsServiceConfig) -> Self {
        let toasts = Vec::new();
        let toasts = Mutex::new(toasts);
        let toasts = Arc::new(toasts);

        Self { config, toasts }
    }

    fn schedule_expiry(&self, id: Uuid) {
        let toasts = Arc::clone(&self.toasts);
        let lifespan = self.config.toast_lifespan;

        tokio::spawn(async move {
            tokio::time::sleep(lifespan).await;

            let mut toasts = toasts.lock().await;
            let count_before = toasts.len();
            toasts.retain(|toast| toast.notification.id != id);
            if toasts.len() < count_before {
                tracing::trace!(%id, "toast expired");
            }
        });
    }
}

#[async_trait]
impl ToastsService for ToastsServiceImpl {
    async fn push(&self, notification: Notification) {
        let id = notification.id;
        let toast = Toast {
            notification,
            shown_at: OffsetDateTime::now_utc(),
        };

        {
            let mut toasts = self.toasts.lock().await;
            toasts.insert(0, toast);
        }
        tracing::trace!(%id, "toast shown");

        self.schedule_expiry(id);
    }

    async fn dismiss(&self, id: Uuid) {
        let mut toasts = self.toasts.lock().await;
        toasts.retain(|toast| toast.notification.id != id);
    }

    async fn open(&self, id: Uuid) -> Option<Uuid> {
        let mut toasts = self.toasts.lock().await;
        let position = toasts
            .iter()
            .position(|toast| toast.notification.id == id)?;
        let toast = toasts.remove(position);

        toast.notification.related_id
    }

    async fn visible(&self) -> Vec<Toast> {
        self.toasts.lock().await.clone()
    }
}
