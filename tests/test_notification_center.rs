mod common;
pub use common::*;

use media_club_notifier::{
    domain::{NotificationKind, Recipient, SoundCue},
    dto::input::{ClearScope, NotificationDraft, NotificationFilter, Sender},
};
use uuid::Uuid;

fn draft(recipient: Recipient, kind: NotificationKind, content: &str) -> NotificationDraft {
    NotificationDraft {
        recipient,
        kind,
        content: content.to_string(),
        related_id: None,
        sound: SoundCue::Default,
    }
}

#[tokio::test]
async fn broadcast_announcement_reaches_every_member() {
    // an ALL announcement shows up for every viewer,
    // both in the unfiltered list and under the admin filter

    let state = empty_state();
    state
        .notifications_service
        .publish(
            Sender::system(),
            draft(
                Recipient::All,
                NotificationKind::Announcement,
                "club meeting on friday",
            ),
        )
        .await
        .unwrap();

    for _ in 0..2 {
        let viewer = Uuid::new_v4();

        let all = state
            .notifications_service
            .find_notifications(viewer, NotificationFilter::All)
            .await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].kind, NotificationKind::Announcement);

        let admin = state
            .notifications_service
            .find_notifications(viewer, NotificationFilter::Admin)
            .await;
        assert_eq!(admin.len(), 1);

        let announcement = state.notifications_service.latest_announcement(viewer).await;
        assert!(announcement.is_some());
    }
}

#[tokio::test]
async fn direct_notification_stays_private() {
    let recipient = Uuid::new_v4();
    let bystander = Uuid::new_v4();
    let author = member("Leo Grant");
    let state = empty_state();

    state
        .notifications_service
        .publish(
            Sender::from(&author),
            draft(
                Recipient::Member(recipient),
                NotificationKind::Like,
                "Leo Grant liked your post",
            ),
        )
        .await
        .unwrap();

    let for_recipient = state
        .notifications_service
        .find_notifications(recipient, NotificationFilter::All)
        .await;
    assert_eq!(for_recipient.len(), 1);

    let for_bystander = state
        .notifications_service
        .find_notifications(bystander, NotificationFilter::All)
        .await;
    assert!(for_bystander.is_empty());
}

#[tokio::test]
async fn newest_notification_listed_first() {
    let viewer = Uuid::new_v4();
    let state = empty_state();

    for content in ["first", "second", "third"] {
        state
            .notifications_service
            .publish(
                Sender::system(),
                draft(Recipient::All, NotificationKind::Activity, content),
            )
            .await
            .unwrap();
    }

    let notifications = state
        .notifications_service
        .find_notifications(viewer, NotificationFilter::All)
        .await;
    let contents = notifications
        .iter()
        .map(|notification| notification.content.as_str())
        .collect::<Vec<_>>();
    assert_eq!(contents, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn mark_read_updates_unread_count_and_is_idempotent() {
    let viewer = Uuid::new_v4();
    let state = empty_state();

    let (notification, _) = state
        .notifications_service
        .publish(
            Sender::system(),
            draft(Recipient::Member(viewer), NotificationKind::Comment, "hello"),
        )
        .await
        .unwrap();
    assert_eq!(state.notifications_service.unread_count(viewer).await, 1);

    state.notifications_service.mark_read(notification.id).await;
    state.notifications_service.mark_read(notification.id).await;
    state.notifications_service.mark_read(Uuid::new_v4()).await;

    assert_eq!(state.notifications_service.unread_count(viewer).await, 0);
    let unread = state
        .notifications_service
        .find_notifications(viewer, NotificationFilter::Unread)
        .await;
    assert!(unread.is_empty());
}

#[tokio::test]
async fn admin_filter_keeps_admin_and_announcement_kinds() {
    let viewer = Uuid::new_v4();
    let state = empty_state();

    for kind in [
        NotificationKind::Admin,
        NotificationKind::Announcement,
        NotificationKind::Like,
        NotificationKind::Badge,
    ] {
        state
            .notifications_service
            .publish(
                Sender::system(),
                draft(Recipient::Member(viewer), kind, "content"),
            )
            .await
            .unwrap();
    }

    let admin = state
        .notifications_service
        .find_notifications(viewer, NotificationFilter::Admin)
        .await;
    assert_eq!(admin.len(), 2);
    assert!(admin
        .iter()
        .all(|notification| notification.kind.is_administrative()));
}

#[tokio::test]
async fn clear_mine_leaves_other_members_notifications() {
    // clearing scoped to one member removes only their direct entries,
    // broadcasts and other members' notifications survive

    let viewer = Uuid::new_v4();
    let other = Uuid::new_v4();
    let state = empty_state();

    state
        .notifications_service
        .publish(
            Sender::system(),
            draft(Recipient::Member(viewer), NotificationKind::Comment, "mine"),
        )
        .await
        .unwrap();
    state
        .notifications_service
        .publish(
            Sender::system(),
            draft(Recipient::Member(other), NotificationKind::Comment, "theirs"),
        )
        .await
        .unwrap();
    state
        .notifications_service
        .publish(
            Sender::system(),
            draft(Recipient::All, NotificationKind::Announcement, "broadcast"),
        )
        .await
        .unwrap();

    state
        .notifications_service
        .clear(ClearScope::Mine(viewer))
        .await;

    let for_viewer = state
        .notifications_service
        .find_notifications(viewer, NotificationFilter::All)
        .await;
    assert_eq!(for_viewer.len(), 1);
    assert_eq!(for_viewer[0].recipient, Recipient::All);

    let for_other = state
        .notifications_service
        .find_notifications(other, NotificationFilter::All)
        .await;
    assert_eq!(for_other.len(), 2);
}

#[tokio::test]
async fn clear_all_empties_the_event_log() {
    let viewer = Uuid::new_v4();
    let state = empty_state();

    state
        .notifications_service
        .publish(
            Sender::system(),
            draft(Recipient::All, NotificationKind::Announcement, "broadcast"),
        )
        .await
        .unwrap();

    state.notifications_service.clear(ClearScope::All).await;

    assert!(state.event_store.dump().await.is_empty());
    assert_eq!(state.notifications_service.unread_count(viewer).await, 0);
}
