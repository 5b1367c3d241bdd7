//! Flat JSON file participant store.
//!
//! All participants live in one JSON array. Every mutation is a locked
//! read-modify-write through `AtomicJsonFile`, run on tokio's blocking pool.
//!
//! File location: `{data_dir}/participants.json` unless configured otherwise.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use qweek_core::QweekError;
use qweek_core::error::Result;
use qweek_core::participant::{NewParticipant, Participant, ParticipantRepository};

use crate::paths::QweekPaths;
use crate::storage::AtomicJsonFile;

type ParticipantFile = AtomicJsonFile<Vec<Participant>>;

/// File-based participant repository.
pub struct JsonFileParticipantRepository {
    file: Arc<ParticipantFile>,
    /// Serialises writers within this process; the file lock covers other processes.
    write_lock: Mutex<()>,
}

impl JsonFileParticipantRepository {
    /// Creates a repository at the default location under the data directory.
    pub fn new() -> Result<Self> {
        let path = QweekPaths::new(None).participants_file()?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository backed by the given file.
    pub fn with_path(path: PathBuf) -> Self {
        tracing::debug!("Participant file store at {}", path.display());
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn run<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&ParticipantFile) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| QweekError::internal(format!("Storage task failed: {}", e)))?
    }
}

#[async_trait]
impl ParticipantRepository for JsonFileParticipantRepository {
    async fn list(&self) -> Result<Vec<Participant>> {
        self.run(|file| Ok(file.load()?.unwrap_or_default()))
            .await
            .map_err(|e| {
                tracing::error!("Failed to read participants: {}", e);
                e
            })
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Participant>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|p| p.matches_name(first_name, last_name)))
    }

    async fn add(&self, participant: NewParticipant) -> Result<Participant> {
        let created = participant.into_participant(Uuid::new_v4().to_string(), Utc::now());
        let record = created.clone();

        let _guard = self.write_lock.lock().await;
        self.run(move |file| {
            file.update(Vec::new(), |participants: &mut Vec<Participant>| {
                participants.push(record);
                Ok::<_, QweekError>(())
            })
        })
        .await?;

        tracing::info!(
            "Saved participant {} ({} {})",
            created.id,
            created.first_name,
            created.last_name
        );
        Ok(created)
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        let _guard = self.write_lock.lock().await;
        self.run(move |file| {
            file.update(Vec::new(), |participants: &mut Vec<Participant>| {
                let before = participants.len();
                participants.retain(|p| p.id != id);
                if participants.len() == before {
                    return Err(QweekError::not_found("participant", id.as_str()));
                }
                Ok(())
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repository() -> (JsonFileParticipantRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonFileParticipantRepository::with_path(temp_dir.path().join("participants.json"));
        (repo, temp_dir)
    }

    fn new_participant(first: &str, last: &str, score: u32) -> NewParticipant {
        NewParticipant {
            first_name: first.to_string(),
            last_name: last.to_string(),
            score,
            total: 10,
            time_seconds: Some(61),
        }
    }

    #[tokio::test]
    async fn test_missing_file_lists_empty() {
        let (repo, _temp_dir) = create_test_repository();
        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.find_by_name("Ana", "Lopez").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_and_find() {
        let (repo, _temp_dir) = create_test_repository();

        let saved = repo.add(new_participant("Ana", "Lopez", 7)).await.unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.time_seconds, Some(61));

        let found = repo.find_by_name(" ana", "LOPEZ ").await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let (repo, temp_dir) = create_test_repository();
        repo.add(new_participant("Ana", "Lopez", 7)).await.unwrap();
        repo.add(new_participant("Luis", "Diaz", 4)).await.unwrap();

        let reopened =
            JsonFileParticipantRepository::with_path(temp_dir.path().join("participants.json"));
        let all = reopened.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }

    #[tokio::test]
    async fn test_delete() {
        let (repo, _temp_dir) = create_test_repository();
        let ana = repo.add(new_participant("Ana", "Lopez", 7)).await.unwrap();
        let luis = repo.add(new_participant("Luis", "Diaz", 4)).await.unwrap();

        repo.delete_by_id(&ana.id).await.unwrap();

        let remaining = repo.list().await.unwrap();
        assert_eq!(remaining, vec![luis]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let (repo, _temp_dir) = create_test_repository();
        repo.add(new_participant("Ana", "Lopez", 7)).await.unwrap();

        let err = repo.delete_by_id("no-such-id").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reads_camel_case_file() {
        let (repo, _temp_dir) = create_test_repository();
        std::fs::write(
            repo.path(),
            r#"[{"id":"x1","firstName":"Ana","lastName":"Lopez","score":9,"total":10,"createdAt":"2025-10-01T09:30:00Z"}]"#,
        )
        .unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].score, 9);
        assert_eq!(all[0].time_seconds, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_persistence_error() {
        let (repo, _temp_dir) = create_test_repository();
        std::fs::write(repo.path(), "{not json").unwrap();

        let err = repo.list().await.unwrap_err();
        assert!(err.is_persistence());
    }
}
