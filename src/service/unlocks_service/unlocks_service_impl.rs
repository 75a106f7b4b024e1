use super::UnlocksService;
use crate::domain::BadgeDefinition;
use async_trait::async_trait;
use tokio::sync::Mutex;

pub struct UnlocksServiceImpl {
    pending: Mutex<Option<BadgeDefinition>>,
}

impl UnlocksServiceImpl {
    pub fn new() -> Self {
        let pending = Mutex::new(None);

        Self { pending }
    }
}

impl Default for UnlocksServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UnlocksService for UnlocksServiceImpl {
    async fn announce(&self, badge: BadgeDefinition) {
        tracing::info!(badge_id = %badge.id, "badge unlock announced");

        *self.pending.lock().await = Some(badge);
    }

    async fn pending(&self) -> Option<BadgeDefinition> {
        *self.pending.lock().await
    }

    async fn dismiss(&self) {
        *self.pending.lock().await = None;
    }
}
