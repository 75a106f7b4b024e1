use super::BadgesService;
use crate::{
    domain::{AwardedBadge, BadgeDefinition, BadgeId, MediaKind, NotificationKind, Recipient, SoundCue},
    dto::input::{BadgeTrigger, NotificationDraft, Sender},
    repository::{self, FeedRepository, MembersRepository},
    service::{notifications_service::NotificationsService, unlocks_service::UnlocksService},
    session::Session,
};
use async_trait::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// Likes received across all posts needed for [BadgeId::Influencer].
const INFLUENCER_LIKES: usize = 5;

/// Posts authored needed for [BadgeId::ActiveWriter].
const ACTIVE_WRITER_POSTS: usize = 3;

pub struct BadgesServiceImpl {
    members_repository: Arc<dyn MembersRepository>,
    feed_repository: Arc<dyn FeedRepository>,
    notifications_service: Arc<dyn NotificationsService>,
    unlocks_service: Arc<dyn UnlocksService>,
    session: Arc<Session>,
}

impl BadgesServiceImpl {
    pub fn new(
        members_repository: Arc<dyn MembersRepository>,
        feed_repository: Arc<dyn FeedRepository>,
        notifications_service: Arc<dyn NotificationsService>,
        unlocks_service: Arc<dyn UnlocksService>,
        session: Arc<Session>,
    ) -> Self {
        Self {
            members_repository,
            feed_repository,
            notifications_service,
            unlocks_service,
            session,
        }
    }

    ///
    /// Badges whose rule holds for the member right now. Counters are
    /// recounted from the feed collections; nothing keeps running
    /// tallies between evaluations.
    ///
    async fn candidates(&self, member_id: Uuid, trigger: BadgeTrigger) -> Vec<BadgeId> {
        match trigger {
            BadgeTrigger::PostCreated { media } => {
                let posts = self.feed_repository.count_posts_by_author(member_id).await;

                let mut candidates = Vec::new();
                if posts == 1 {
                    candidates.push(BadgeId::FirstPost);
                }
                if posts == ACTIVE_WRITER_POSTS {
                    candidates.push(BadgeId::ActiveWriter);
                }
                if media == MediaKind::Image {
                    candidates.push(BadgeId::Photographer);
                }
                candidates
            }
            BadgeTrigger::IdeaCreated => vec![BadgeId::IdeaMaker],
            BadgeTrigger::LikeReceived => {
                let likes = self.feed_repository.count_likes_received(member_id).await;

                match likes >= INFLUENCER_LIKES {
                    true => vec![BadgeId::Influencer],
                    false => Vec::new(),
                }
            }
        }
    }

    ///
    /// Attach the badge, notify the member and, when they are looking
    /// at the screen, announce the celebration overlay.
    ///
    /// ### Returns
    /// false when the grant was suppressed (already held, unknown member)
    ///
    async fn grant(&self, member_id: Uuid, badge_id: BadgeId) -> bool {
        let badge = AwardedBadge {
            badge_id,
            awarded_at: OffsetDateTime::now_utc(),
        };
        let append_result = self.members_repository.append_badge(member_id, badge).await;
        match append_result {
            Ok(()) => {}
            Err(repository::Error::InsertUniqueViolation) => {
                tracing::trace!(%badge_id, "badge already held, grant suppressed");
                return false;
            }
            Err(err) => {
                tracing::warn!(%err, %badge_id, "badge grant skipped");
                return false;
            }
        }
        tracing::info!(%member_id, %badge_id, "awarded badge");

        let definition = badge_id.definition();

        if self.session.viewer().await == Some(member_id) {
            self.unlocks_service.announce(definition).await;
        }

        let draft = NotificationDraft {
            recipient: Recipient::Member(member_id),
            kind: NotificationKind::Badge,
            content: format!(
                "Congratulations! You earned the \"{}\" badge 🎉",
                definition.name
            ),
            related_id: None,
            sound: SoundCue::Success,
        };
        let publish_result = self
            .notifications_service
            .publish(Sender::system(), draft)
            .await;
        if let Err(err) = publish_result {
            tracing::warn!(%err, %badge_id, "badge notification not published");
        }

        true
    }
}

#[async_trait]
impl BadgesService for BadgesServiceImpl {
    #[tracing::instrument(name = "BadgeEvaluation", skip_all, fields(%member_id, ?trigger))]
    async fn evaluate(&self, member_id: Uuid, trigger: BadgeTrigger) -> Vec<BadgeDefinition> {
        tracing::trace!("evaluating award rules");

        let candidates = self.candidates(member_id, trigger).await;

        let mut granted = Vec::new();
        for badge_id in candidates {
            if self.grant(member_id, badge_id).await {
                granted.push(badge_id.definition());
            }
        }

        granted
    }
}
