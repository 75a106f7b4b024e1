use super::MembersRepository;
use crate::{
    domain::{AwardedBadge, Member},
    repository::Error,
};
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct InMemoryMembersRepository {
    members: Mutex<Vec<Member>>,
}

impl InMemoryMembersRepository {
    pub fn with_members(members: Vec<Member>) -> Self {
        let members = Mutex::new(members);

        Self { members }
    }
}

#[async_trait]
impl MembersRepository for InMemoryMembersRepository {
    async fn find(&self, id: Uuid) -> Option<Member> {
        let members = self.members.lock().await;
        members.iter().find(|member| member.id == id).cloned()
    }

    async fn append_badge(&self, member_id: Uuid, badge: AwardedBadge) -> Result<(), Error> {
        let mut members = self.members.lock().await;
        let member = members
            .iter_mut()
            .find(|member| member.id == member_id)
            .ok_or(Error::NoEntryUpdated)?;

        if member.has_badge(badge.badge_id) {
            return Err(Error::InsertUniqueViolation);
        }

        member.badges.push(badge);

        Ok(())
    }

    async fn dump(&self) -> Vec<Member> {
        self.members.lock().await.clone()
    }
}
