//! Builds the configured participant store.

use std::sync::Arc;

use qweek_core::config::{StoreBackend, StoreConfig};
use qweek_core::error::Result;
use qweek_core::participant::ParticipantRepository;

use crate::document_store_participant_repository::DocumentStoreParticipantRepository;
use crate::json_file_participant_repository::JsonFileParticipantRepository;
use crate::memory_participant_repository::InMemoryParticipantRepository;
use crate::paths::QweekPaths;

/// Creates the repository selected by `config.backend`.
///
/// The `file` backend uses `config.file_path`, falling back to the
/// participants file under the data directory.
pub fn build_participant_repository(
    config: &StoreConfig,
    paths: &QweekPaths,
) -> Result<Arc<dyn ParticipantRepository>> {
    tracing::info!("Using '{}' participant store", config.backend);

    let repository: Arc<dyn ParticipantRepository> = match config.backend {
        StoreBackend::File => {
            let path = match &config.file_path {
                Some(path) => path.clone(),
                None => paths.participants_file()?,
            };
            Arc::new(JsonFileParticipantRepository::with_path(path))
        }
        StoreBackend::Document => {
            Arc::new(DocumentStoreParticipantRepository::new(&config.document)?)
        }
        StoreBackend::Memory => Arc::new(InMemoryParticipantRepository::new()),
    };
    Ok(repository)
}
