//! Admin use cases: results table, deletion and export.

use std::path::Path;
use std::sync::Arc;

use qweek_core::error::Result;
use qweek_core::participant::{Participant, ParticipantRepository};

use crate::csv_export::participants_to_csv;

pub const DELETED_MESSAGE: &str = "Participación eliminada correctamente.";
pub const DELETE_FAILED_MESSAGE: &str = "No se pudo eliminar la participación.";

pub struct AdminService {
    repository: Arc<dyn ParticipantRepository>,
}

impl AdminService {
    pub fn new(repository: Arc<dyn ParticipantRepository>) -> Self {
        Self { repository }
    }

    /// All participants, newest first.
    pub async fn list_participants(&self) -> Result<Vec<Participant>> {
        let mut participants = self.repository.list().await?;
        participants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(participants)
    }

    /// Deletes one participant.
    ///
    /// # Errors
    ///
    /// Returns `QweekError::NotFound` if no participant has this id.
    pub async fn delete_participant(&self, id: &str) -> Result<()> {
        self.repository.delete_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to delete participant {}: {}", id, e);
            e
        })
    }

    /// The results table as CSV, in listing order.
    pub async fn export_csv(&self) -> Result<String> {
        Ok(participants_to_csv(&self.list_participants().await?))
    }

    /// Writes the CSV export to `path`; returns the number of rows written.
    pub async fn export_to_file(&self, path: &Path) -> Result<usize> {
        let participants = self.list_participants().await?;
        tokio::fs::write(path, participants_to_csv(&participants)).await?;
        tracing::info!(
            "Exported {} participants to {}",
            participants.len(),
            path.display()
        );
        Ok(participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use qweek_infrastructure::InMemoryParticipantRepository;
    use tempfile::TempDir;

    fn participant(id: &str, minutes_ago: i64) -> Participant {
        Participant {
            id: id.to_string(),
            first_name: format!("First {}", id),
            last_name: "Last".to_string(),
            score: 5,
            total: 10,
            time_seconds: None,
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    fn service() -> AdminService {
        let repository = InMemoryParticipantRepository::with_participants(vec![
            participant("old", 30),
            participant("new", 1),
            participant("mid", 10),
        ]);
        AdminService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let ids: Vec<String> = service()
            .list_participants()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn test_delete_and_missing_id() {
        let service = service();
        service.delete_participant("mid").await.unwrap();
        assert_eq!(service.list_participants().await.unwrap().len(), 2);

        let err = service.delete_participant("mid").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_export_follows_listing_order() {
        let csv = service().export_csv().await.unwrap();
        let rows: Vec<&str> = csv.split('\n').skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("First new;"));
        assert!(rows[2].starts_with("First old;"));
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("qweek-results.csv");

        let rows = service().export_to_file(&path).await.unwrap();
        assert_eq!(rows, 3);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }
}
