use crate::{
    domain::{AwardedBadge, Member},
    repository::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Read access to the member list owned by the wider application.
/// The engine writes through it in exactly one way: appending a badge
/// to a member's badge set.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Option<Member>;

    ///
    /// Attach badge to the member. Keyed by badge id: a member holds
    /// at most one instance of each badge.
    ///
    /// ### Errors
    /// - [Error::NoEntryUpdated] when member with id does not exist
    /// - [Error::InsertUniqueViolation] when member already holds the badge
    ///
    async fn append_badge(&self, member_id: Uuid, badge: AwardedBadge) -> Result<(), Error>;

    /// All members, for snapshot export.
    async fn dump(&self) -> Vec<Member>;
}
