use crate::domain::{NotificationKind, Recipient, SoundCue};
use uuid::Uuid;

///
/// Notification before the service assigns its identity. `content`
/// arrives fully formatted; nothing downstream templates it further.
///
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub recipient: Recipient,
    pub kind: NotificationKind,
    pub content: String,
    pub related_id: Option<Uuid>,
    pub sound: SoundCue,
}
