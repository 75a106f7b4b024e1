use crate::domain::Notification;
use time::OffsetDateTime;

///
/// Transient presentation entry for one notification. Lives only in
/// the visible queue; removing it never touches the event log.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: OffsetDateTime,
}
