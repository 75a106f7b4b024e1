use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;
use uuid::Uuid;

/// Marker used in place of a member id when a notification
/// is addressed to every member.
const ALL_RECIPIENTS: &str = "ALL";

/// Sender id of notifications produced by the application itself.
const SYSTEM_SENDER: &str = "SYSTEM";

///
/// Persisted record of a single event directed at one member or at
/// everyone. Identity fields never change after creation; only `read`
/// flips, once, from false to true.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "recipientId")]
    pub recipient: Recipient,
    #[serde(rename = "senderId")]
    pub sender: Actor,
    pub sender_name: String,
    pub sender_avatar: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub read: bool,
    #[serde(default)]
    pub sound: SoundCue,
}

///
/// Notification target. Serialized as the member id, or as the
/// `"ALL"` sentinel for broadcasts.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    All,
    Member(Uuid),
}

impl Recipient {
    pub fn includes(&self, member_id: Uuid) -> bool {
        match self {
            Recipient::All => true,
            Recipient::Member(id) => *id == member_id,
        }
    }
}

impl Serialize for Recipient {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Recipient::All => s.serialize_str(ALL_RECIPIENTS),
            Recipient::Member(id) => id.serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for Recipient {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let string = String::deserialize(d)?;
        if string == ALL_RECIPIENTS {
            return Ok(Recipient::All);
        }

        let id = Uuid::parse_str(&string).map_err(serde::de::Error::custom)?;
        Ok(Recipient::Member(id))
    }
}

///
/// Notification author. Serialized as the member id, or as the
/// `"SYSTEM"` sentinel for application generated notifications.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    System,
    Member(Uuid),
}

impl Serialize for Actor {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Actor::System => s.serialize_str(SYSTEM_SENDER),
            Actor::Member(id) => id.serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for Actor {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let string = String::deserialize(d)?;
        if string == SYSTEM_SENDER {
            return Ok(Actor::System);
        }

        let id = Uuid::parse_str(&string).map_err(serde::de::Error::custom)?;
        Ok(Actor::Member(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    Like,
    Comment,
    Admin,
    Message,
    Badge,
    Announcement,
    Reward,
    Activity,
}

impl NotificationKind {
    /// Whether the kind belongs to the ADMIN view of the
    /// notification center.
    pub fn is_administrative(&self) -> bool {
        matches!(self, NotificationKind::Admin | NotificationKind::Announcement)
    }

    /// Visual accent used by the presentation shell.
    pub fn accent(&self) -> Accent {
        match self {
            NotificationKind::Admin => Accent { icon: "shield", color: "red" },
            NotificationKind::Like => Accent { icon: "heart", color: "rose" },
            NotificationKind::Comment => Accent { icon: "message-circle", color: "indigo" },
            NotificationKind::Badge => Accent { icon: "award", color: "amber" },
            NotificationKind::Announcement => Accent { icon: "megaphone", color: "blue" },
            NotificationKind::Message
            | NotificationKind::Reward
            | NotificationKind::Activity => Accent { icon: "activity", color: "emerald" },
        }
    }
}

/// Icon and color pair resolved from the notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub icon: &'static str,
    pub color: &'static str,
}

///
/// Logical audio cue attached to a notification. Keys unknown to this
/// build of the application deserialize to [SoundCue::Default] so old
/// snapshots keep loading.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SoundCue {
    Success,
    Alert,
    Magic,
    #[default]
    #[serde(other)]
    Default,
}

#[cfg(test)]
mod test {
    use super::*;

    fn notification(recipient: Recipient) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            recipient,
            sender: Actor::System,
            sender_name: "Media Club".to_string(),
            sender_avatar: String::new(),
            kind: NotificationKind::Activity,
            content: "something happened".to_string(),
            related_id: None,
            timestamp: OffsetDateTime::now_utc(),
            read: false,
            sound: SoundCue::Default,
        }
    }

    #[test]
    fn recipient_broadcast_includes_everyone() {
        assert!(Recipient::All.includes(Uuid::new_v4()));
    }

    #[test]
    fn recipient_member_includes_only_that_member() {
        let member_id = Uuid::new_v4();
        let recipient = Recipient::Member(member_id);

        assert!(recipient.includes(member_id));
        assert!(!recipient.includes(Uuid::new_v4()));
    }

    #[test]
    fn notification_json_serialize_broadcast_sentinels() {
        let notification = notification(Recipient::All);

        let json = serde_json::to_string(&notification).unwrap();

        let object = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(object["recipientId"], "ALL");
        assert_eq!(object["senderId"], "SYSTEM");
        assert_eq!(object["type"], "ACTIVITY");
    }

    #[test]
    fn notification_json_roundtrip() {
        let notification = notification(Recipient::Member(Uuid::new_v4()));

        let json = serde_json::to_string(&notification).unwrap();
        let deserialized = serde_json::from_str::<Notification>(&json).unwrap();

        assert_eq!(deserialized, notification);
    }

    #[test]
    fn sound_cue_unknown_key_falls_back_to_default() {
        let cue = serde_json::from_str::<SoundCue>(r#""shutter""#).unwrap();

        assert_eq!(cue, SoundCue::Default);
    }

    #[test]
    fn recipient_invalid_id_rejected() {
        let result = serde_json::from_str::<Recipient>(r#""not-a-uuid""#);

        assert!(result.is_err());
    }
}
