use super::FeedRepository;
use crate::{
    domain::{Idea, Post},
    repository::Error,
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct InMemoryFeedRepository {
    posts: Mutex<Vec<Post>>,
    ideas: Mutex<Vec<Idea>>,
}

impl InMemoryFeedRepository {
    pub fn with_feed(posts: Vec<Post>, ideas: Vec<Idea>) -> Self {
        let posts = Mutex::new(posts);
        let ideas = Mutex::new(ideas);

        Self { posts, ideas }
    }
}

#[async_trait]
impl FeedRepository for InMemoryFeedRepository {
    async fn insert_post(&self, post: Post) {
        self.posts.lock().await.push(post);
    }

    async fn insert_idea(&self, idea: Idea) {
        self.ideas.lock().await.push(idea);
    }

    async fn set_like(&self, post_id: Uuid, member_id: Uuid, liked: bool) -> Result<(), Error> {
        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(Error::NoEntryUpdated)?;

        post.likes.retain(|id| *id != member_id);
        if liked {
            post.likes.push(member_id);
        }

        Ok(())
    }

    async fn count_posts_by_author(&self, author_id: Uuid) -> usize {
        let posts = self.posts.lock().await;
        posts.iter().filter(|post| post.author_id == author_id).count()
    }

    async fn count_likes_received(&self, author_id: Uuid) -> usize {
        let posts = self.posts.lock().await;
        posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .map(|post| post.likes.len())
            .sum()
    }

    async fn dump_posts(&self) -> Vec<Post> {
        self.posts.lock().await.clone()
    }

    async fn dump_ideas(&self) -> Vec<Idea> {
        self.ideas.lock().await.clone()
    }
}
