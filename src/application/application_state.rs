use super::ApplicationEnv;
use crate::{
    domain::StateSnapshot,
    repository::{
        EventStore, FeedRepository, InMemoryEventStore, InMemoryFeedRepository,
        InMemoryMembersRepository, MembersRepository,
    },
    service::{
        badges_service::{BadgesService, BadgesServiceImpl},
        delivery_service::DeliveryServiceImpl,
        moderation_service::{
            ContentClassifier, ModerationService, ModerationServiceConfig, ModerationServiceImpl,
        },
        notifications_service::{NotificationsService, NotificationsServiceImpl},
        sounds_service::{AudioSink, SoundsServiceImpl},
        toasts_service::{ToastsService, ToastsServiceConfig, ToastsServiceImpl},
        unlocks_service::{UnlocksService, UnlocksServiceImpl},
    },
    session::Session,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub session: Arc<Session>,
    pub event_store: Arc<dyn EventStore>,
    pub members_repository: Arc<dyn MembersRepository>,
    pub feed_repository: Arc<dyn FeedRepository>,
    pub notifications_service: Arc<dyn NotificationsService>,
    pub toasts_service: Arc<dyn ToastsService>,
    pub unlocks_service: Arc<dyn UnlocksService>,
    pub badges_service: Arc<dyn BadgesService>,
    pub moderation_service: Arc<dyn ModerationService>,
}

impl ApplicationState {
    /// Serializable view of everything the repositories hold.
    pub async fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            members: self.members_repository.dump().await,
            posts: self.feed_repository.dump_posts().await,
            ideas: self.feed_repository.dump_ideas().await,
            notifications: self.event_store.dump().await,
        }
    }
}

pub fn create_state(
    env: &ApplicationEnv,
    snapshot: StateSnapshot,
    classifier: Arc<dyn ContentClassifier>,
    audio_sink: Arc<dyn AudioSink>,
) -> ApplicationState {
    tracing::info!("creating repositories");
    let event_store = InMemoryEventStore::with_notifications(snapshot.notifications);
    let event_store = Arc::new(event_store);
    let members_repository = InMemoryMembersRepository::with_members(snapshot.members);
    let members_repository = Arc::new(members_repository);
    let feed_repository = InMemoryFeedRepository::with_feed(snapshot.posts, snapshot.ideas);
    let feed_repository = Arc::new(feed_repository);

    tracing::info!("creating services");
    let session = Arc::new(Session::new());

    let config = ToastsServiceConfig {
        toast_lifespan: env.toast_lifespan,
    };
    let toasts_service = ToastsServiceImpl::new(config);
    let toasts_service = Arc::new(toasts_service);

    let sounds_service = SoundsServiceImpl::new(session.clone(), audio_sink);
    let sounds_service = Arc::new(sounds_service);

    let delivery_service = DeliveryServiceImpl::new(
        session.clone(),
        toasts_service.clone(),
        sounds_service.clone(),
    );
    let delivery_service = Arc::new(delivery_service);

    let notifications_service =
        NotificationsServiceImpl::new(event_store.clone(), delivery_service);
    let notifications_service = Arc::new(notifications_service);

    let unlocks_service = UnlocksServiceImpl::new();
    let unlocks_service = Arc::new(unlocks_service);

    let badges_service = BadgesServiceImpl::new(
        members_repository.clone(),
        feed_repository.clone(),
        notifications_service.clone(),
        unlocks_service.clone(),
        session.clone(),
    );
    let badges_service = Arc::new(badges_service);

    let config = ModerationServiceConfig {
        classifier_timeout: env.moderation_timeout,
    };
    let moderation_service = ModerationServiceImpl::new(config, classifier);
    let moderation_service = Arc::new(moderation_service);

    ApplicationState {
        session,
        event_store,
        members_repository,
        feed_repository,
        notifications_service,
        toasts_service,
        unlocks_service,
        badges_service,
        moderation_service,
    }
}
