use super::{AwardedBadge, BadgeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

///
/// Member as consumed by the notification and badge engine. The wider
/// application owns the full profile; this record carries only the
/// fields the engine reads, plus the badge set it appends to.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Uuid,
    pub full_name: String,
    pub avatar: String,
    pub role: Role,
    #[serde(default)]
    pub badges: Vec<AwardedBadge>,
}

impl Member {
    pub fn has_badge(&self, badge_id: BadgeId) -> bool {
        self.badges.iter().any(|badge| badge.badge_id == badge_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Member,
}
