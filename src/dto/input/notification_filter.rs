use crate::domain::Notification;

///
/// Notification center filter tabs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationFilter {
    All,
    Unread,
    /// Administrative traffic regardless of read state.
    Admin,
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Admin => notification.kind.is_administrative(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::domain::{Actor, NotificationKind, Recipient, SoundCue};
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn notification(kind: NotificationKind, read: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient: Recipient::All,
            sender: Actor::System,
            sender_name: "Media Club".to_string(),
            sender_avatar: String::new(),
            kind,
            content: "content".to_string(),
            related_id: None,
            timestamp: OffsetDateTime::now_utc(),
            read,
            sound: SoundCue::Default,
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(NotificationFilter::All.matches(&notification(NotificationKind::Like, false)));
        assert!(NotificationFilter::All.matches(&notification(NotificationKind::Like, true)));
    }

    #[test]
    fn unread_rejects_read_notifications() {
        let filter = NotificationFilter::Unread;

        assert!(filter.matches(&notification(NotificationKind::Like, false)));
        assert!(!filter.matches(&notification(NotificationKind::Like, true)));
    }

    #[test]
    fn admin_matches_admin_and_announcement_regardless_of_read_state() {
        let filter = NotificationFilter::Admin;

        assert!(filter.matches(&notification(NotificationKind::Admin, false)));
        assert!(filter.matches(&notification(NotificationKind::Announcement, true)));
        assert!(!filter.matches(&notification(NotificationKind::Badge, false)));
    }
}
