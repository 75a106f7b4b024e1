use crate::{
    domain::{Idea, Post},
    repository::Error,
};
use async_trait::async_trait;
use uuid::Uuid;

///
/// Posts and ideas as the badge engine sees them. Award rules never
/// keep running tallies; they recount from these collections on every
/// evaluation so deletions and edits cannot leave counters stale.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedRepository: Send + Sync {
    async fn insert_post(&self, post: Post);

    async fn insert_idea(&self, idea: Idea);

    ///
    /// Set or unset a member's like on the post.
    ///
    /// ### Errors
    /// - [Error::NoEntryUpdated] when post with id does not exist
    ///
    async fn set_like(&self, post_id: Uuid, member_id: Uuid, liked: bool) -> Result<(), Error>;

    /// Posts authored by the member, pending or approved alike.
    async fn count_posts_by_author(&self, author_id: Uuid) -> usize;

    /// Likes summed across every post the member authored.
    async fn count_likes_received(&self, author_id: Uuid) -> usize;

    async fn dump_posts(&self) -> Vec<Post>;

    async fn dump_ideas(&self) -> Vec<Idea>;
}
