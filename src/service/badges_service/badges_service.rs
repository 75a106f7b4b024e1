use crate::{domain::BadgeDefinition, dto::input::BadgeTrigger};
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BadgesService: Send + Sync {
    ///
    /// Re-evaluate award rules for the member after the triggering
    /// action was persisted. Badges the member already holds are
    /// skipped silently; so is an unknown member.
    ///
    /// ### Returns
    /// Definitions of the badges granted by this evaluation, in rule
    /// order
    ///
    async fn evaluate(&self, member_id: Uuid, trigger: BadgeTrigger) -> Vec<BadgeDefinition>;
}
