//! Process-local participant store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use qweek_core::QweekError;
use qweek_core::error::Result;
use qweek_core::participant::{NewParticipant, Participant, ParticipantRepository};

/// Keeps participants in memory, in insertion order. Contents are lost when
/// the process exits.
#[derive(Default)]
pub struct InMemoryParticipantRepository {
    participants: RwLock<Vec<Participant>>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with existing records.
    pub fn with_participants(participants: Vec<Participant>) -> Self {
        Self {
            participants: RwLock::new(participants),
        }
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn list(&self) -> Result<Vec<Participant>> {
        Ok(self.participants.read().await.clone())
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Participant>> {
        Ok(self
            .participants
            .read()
            .await
            .iter()
            .find(|p| p.matches_name(first_name, last_name))
            .cloned())
    }

    async fn add(&self, participant: NewParticipant) -> Result<Participant> {
        let created = participant.into_participant(Uuid::new_v4().to_string(), Utc::now());
        self.participants.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let mut participants = self.participants.write().await;
        let position = participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| QweekError::not_found("participant", id))?;
        participants.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_participant(first: &str, last: &str) -> NewParticipant {
        NewParticipant {
            first_name: first.to_string(),
            last_name: last.to_string(),
            score: 5,
            total: 10,
            time_seconds: None,
        }
    }

    #[tokio::test]
    async fn test_add_find_delete() {
        let repo = InMemoryParticipantRepository::new();
        let ana = repo.add(new_participant("Ana", "Lopez")).await.unwrap();
        repo.add(new_participant("Luis", "Diaz")).await.unwrap();

        assert_eq!(
            repo.find_by_name("ANA", " lopez").await.unwrap().unwrap().id,
            ana.id
        );

        repo.delete_by_id(&ana.id).await.unwrap();
        assert!(repo.find_by_name("Ana", "Lopez").await.unwrap().is_none());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryParticipantRepository::new();
        assert!(repo.delete_by_id("nope").await.unwrap_err().is_not_found());
    }
}
