use crate::domain::BadgeDefinition;
use async_trait::async_trait;

///
/// Single slot backing the full-screen badge celebration. Separate
/// from the toast queue: only the member who just earned the badge
/// sees it, and a newer unlock replaces an undismissed one.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnlocksService: Send + Sync {
    async fn announce(&self, badge: BadgeDefinition);

    /// Badge waiting for its celebration, if any.
    async fn pending(&self) -> Option<BadgeDefinition>;

    /// Clear the slot. Idempotent.
    async fn dismiss(&self);
}
