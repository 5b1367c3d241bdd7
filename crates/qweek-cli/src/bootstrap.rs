//! Composition root: configuration, then the participant store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use qweek_core::config::{QweekConfig, StoreBackend};
use qweek_core::participant::ParticipantRepository;
use qweek_infrastructure::{ConfigService, QweekPaths, build_participant_repository};

/// Store settings given on the command line; they win over config and env.
#[derive(Debug, Default, Clone)]
pub struct StoreOverrides {
    pub backend: Option<StoreBackend>,
    pub data_file: Option<PathBuf>,
}

impl StoreOverrides {
    pub fn apply(self, config: &mut QweekConfig) {
        if let Some(backend) = self.backend {
            config.store.backend = backend;
        }
        if let Some(data_file) = self.data_file {
            config.store.file_path = Some(data_file);
        }
    }
}

pub struct AppContext {
    pub config: QweekConfig,
    pub repository: Arc<dyn ParticipantRepository>,
}

pub fn resolve_paths(home: Option<&Path>) -> QweekPaths {
    QweekPaths::new(home)
}

pub fn bootstrap(
    paths: QweekPaths,
    config_path: Option<PathBuf>,
    overrides: StoreOverrides,
) -> Result<AppContext> {
    let config_service = match config_path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(&paths).context("Failed to resolve config directory")?,
    };

    let mut config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    overrides.apply(&mut config);

    tracing::info!(
        "[Bootstrap] Config loaded from {} (store: {})",
        config_service.path().display(),
        config.store.backend
    );

    let repository = build_participant_repository(&config.store, &paths)
        .context("Failed to set up the participant store")?;

    Ok(AppContext { config, repository })
}
