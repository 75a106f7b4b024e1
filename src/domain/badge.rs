use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use time::OffsetDateTime;

///
/// One-time achievement granted to a member. A member holds at most
/// one instance per [BadgeId].
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwardedBadge {
    #[serde(rename = "id")]
    pub badge_id: BadgeId,
    #[serde(rename = "timestamp", with = "time::serde::rfc3339")]
    pub awarded_at: OffsetDateTime,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeId {
    FirstPost,
    ActiveWriter,
    IdeaMaker,
    Influencer,
    Legend,
    Photographer,
    CreativeHero,
}

impl BadgeId {
    /// Static catalog entry for the badge.
    pub fn definition(self) -> BadgeDefinition {
        match self {
            BadgeId::FirstPost => BadgeDefinition {
                id: self,
                name: "First Steps",
                description: "Published your first post in the club",
                icon: "🚀",
                rarity: BadgeRarity::Common,
            },
            BadgeId::ActiveWriter => BadgeDefinition {
                id: self,
                name: "Active Pen",
                description: "Published 3 posts in the club",
                icon: "✍️",
                rarity: BadgeRarity::Rare,
            },
            BadgeId::IdeaMaker => BadgeDefinition {
                id: self,
                name: "Idea Maker",
                description: "Shared a creative idea in the idea bank",
                icon: "💡",
                rarity: BadgeRarity::Rare,
            },
            BadgeId::Influencer => BadgeDefinition {
                id: self,
                name: "Influencer",
                description: "Collected 5 likes across your posts",
                icon: "🌟",
                rarity: BadgeRarity::Epic,
            },
            BadgeId::Legend => BadgeDefinition {
                id: self,
                name: "Club Legend",
                description: "Reached the top of engagement and leadership",
                icon: "👑",
                rarity: BadgeRarity::Legendary,
            },
            BadgeId::Photographer => BadgeDefinition {
                id: self,
                name: "Eagle Eye",
                description: "Published a standout photo",
                icon: "📸",
                rarity: BadgeRarity::Common,
            },
            BadgeId::CreativeHero => BadgeDefinition {
                id: self,
                name: "Creative Hero",
                description: "Helped 5 members in the collaboration hub",
                icon: "🦸",
                rarity: BadgeRarity::Epic,
            },
        }
    }

    /// Every badge known to this build, in catalog order.
    pub fn catalog() -> impl Iterator<Item = BadgeDefinition> {
        BadgeId::iter().map(BadgeId::definition)
    }
}

///
/// Read-only reference data describing a badge. Not persisted; awarded
/// instances carry only the [BadgeId].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeDefinition {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: BadgeRarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}
