#![allow(dead_code)]

use async_trait::async_trait;
use media_club_notifier::{
    application::{create_state, ApplicationEnv, ApplicationState},
    domain::{MediaKind, Member, Post, PostStatus, Role, StateSnapshot},
    service::{moderation_service::ContentClassifier, sounds_service::NullAudioSink},
};
use std::{sync::Arc, time::Duration};
use time::OffsetDateTime;
use uuid::Uuid;

pub fn test_env() -> ApplicationEnv {
    ApplicationEnv {
        log_directory: "./log".to_string(),
        log_filename: "media_club_notifier_tests.log".to_string(),
        toast_lifespan: Duration::from_millis(5000),
        moderation_timeout: Duration::from_secs(5),
    }
}

pub fn state_with(snapshot: StateSnapshot) -> ApplicationState {
    create_state(
        &test_env(),
        snapshot,
        Arc::new(ApproveAllClassifier),
        Arc::new(NullAudioSink),
    )
}

pub fn empty_state() -> ApplicationState {
    state_with(StateSnapshot::default())
}

pub fn member(full_name: &str) -> Member {
    Member {
        id: Uuid::new_v4(),
        full_name: full_name.to_string(),
        avatar: String::new(),
        role: Role::Member,
        badges: Vec::new(),
    }
}

pub fn post(author_id: Uuid, media: MediaKind) -> Post {
    Post {
        id: Uuid::new_v4(),
        author_id,
        media,
        likes: Vec::new(),
        status: PostStatus::Approved,
        timestamp: OffsetDateTime::now_utc(),
    }
}

/// Classifier standing in for a remote moderation backend.
pub struct ApproveAllClassifier;

#[async_trait]
impl ContentClassifier for ApproveAllClassifier {
    async fn classify(&self, _content: &str) -> anyhow::Result<bool> {
        Ok(true)
    }
}
