use crate::domain::{Actor, Member};

/// Default avatar shown next to application generated notifications.
const SYSTEM_AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/5402/5402751.png";

///
/// Snapshot of the acting party taken at publish time. Stored
/// denormalized on the notification so historical entries keep the
/// name and avatar the sender had back then.
///
#[derive(Debug, Clone)]
pub struct Sender {
    pub id: Actor,
    pub name: String,
    pub avatar: String,
}

impl Sender {
    /// Sender used for notifications the application produces itself.
    pub fn system() -> Self {
        Self {
            id: Actor::System,
            name: "Media Club".to_string(),
            avatar: SYSTEM_AVATAR.to_string(),
        }
    }
}

impl From<&Member> for Sender {
    fn from(member: &Member) -> Self {
        Self {
            id: Actor::Member(member.id),
            name: member.full_name.clone(),
            avatar: member.avatar.clone(),
        }
    }
}
