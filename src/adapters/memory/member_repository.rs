use crate::domain::member::Member;
use crate::domain::value_objects::{MemberId, MemberName};
use crate::ports::member_repository::{
    InsertOutcome, MemberRepository as MemberRepositoryTrait, Result,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// In-memory implementation of MemberRepository
///
/// Holds the canonical collection as a `Mutex`-guarded `Vec`, so
/// `find_all` returns insertion order without extra sorting.
///
/// The duplicate scan and the push happen under a single lock guard,
/// which keeps the name-uniqueness check atomic against concurrent
/// registrations.
pub struct MemberRepository {
    members: Mutex<Vec<Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    /// Insert-if-absent: scan for the name and push under one lock guard
    async fn insert(
        &self,
        name: MemberName,
        registered_at: DateTime<Utc>,
    ) -> Result<InsertOutcome> {
        let mut members = self.members.lock().unwrap();

        if members.iter().any(|m| m.name == name) {
            return Ok(InsertOutcome::NameTaken);
        }

        let member = Member::register(name, registered_at);
        members.push(member.clone());
        Ok(InsertOutcome::Inserted(member))
    }

    async fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| m.member_id == member_id).cloned())
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.iter().find(|m| &m.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        let members = self.members.lock().unwrap();
        Ok(members.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> MemberName {
        MemberName::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let repo = MemberRepository::new();

        let outcome = repo.insert(name("spring"), Utc::now()).await.unwrap();
        let member = match outcome {
            InsertOutcome::Inserted(member) => member,
            InsertOutcome::NameTaken => panic!("fresh name must be inserted"),
        };

        let found = repo.find_by_id(member.member_id).await.unwrap();
        assert_eq!(found, Some(member));
    }

    #[tokio::test]
    async fn test_insert_rejects_taken_name() {
        let repo = MemberRepository::new();

        repo.insert(name("spring"), Utc::now()).await.unwrap();
        let second = repo.insert(name("spring"), Utc::now()).await.unwrap();

        assert_eq!(second, InsertOutcome::NameTaken);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_name_exact_match() {
        let repo = MemberRepository::new();
        repo.insert(name("spring"), Utc::now()).await.unwrap();

        let hit = repo.find_by_name(&name("spring")).await.unwrap();
        assert!(hit.is_some());

        let miss = repo.find_by_name(&name("Spring")).await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = MemberRepository::new();
        for raw in ["a", "b", "c"] {
            repo.insert(name(raw), Utc::now()).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_find_by_id_miss_is_none() {
        let repo = MemberRepository::new();
        let found = repo.find_by_id(MemberId::new()).await.unwrap();
        assert!(found.is_none());
    }
}
