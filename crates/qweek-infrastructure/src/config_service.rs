//! Configuration service implementation.
//!
//! Loads `config.toml` from the config directory, then applies `QWEEK_*`
//! environment overrides:
//!
//! | Variable                   | Field                        |
//! |----------------------------|------------------------------|
//! | `QWEEK_STORE_BACKEND`      | `store.backend`              |
//! | `QWEEK_DATA_FILE`          | `store.file_path`            |
//! | `QWEEK_DOCUMENT_PROJECT`   | `store.document.project_id`  |
//! | `QWEEK_DOCUMENT_API_KEY`   | `store.document.api_key`     |
//! | `QWEEK_DOCUMENT_BASE_URL`  | `store.document.base_url`    |

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use qweek_core::config::QweekConfig;
use qweek_core::error::Result;

use crate::paths::QweekPaths;

pub const ENV_STORE_BACKEND: &str = "QWEEK_STORE_BACKEND";
pub const ENV_DATA_FILE: &str = "QWEEK_DATA_FILE";
pub const ENV_DOCUMENT_PROJECT: &str = "QWEEK_DOCUMENT_PROJECT";
pub const ENV_DOCUMENT_API_KEY: &str = "QWEEK_DOCUMENT_API_KEY";
pub const ENV_DOCUMENT_BASE_URL: &str = "QWEEK_DOCUMENT_BASE_URL";

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration, loaded on first access.
    config: Arc<RwLock<Option<QweekConfig>>>,
}

impl ConfigService {
    /// Creates a service reading `config.toml` from the resolved config directory.
    pub fn new(paths: &QweekPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    /// Creates a service reading the given file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file is created with the defaults.
    pub fn get_config(&self) -> Result<QweekConfig> {
        if let Ok(read_lock) = self.config.read()
            && let Some(cached) = read_lock.as_ref()
        {
            return Ok(cached.clone());
        }

        let mut loaded = Self::load_config(&self.path)?;
        apply_env_overrides(&mut loaded, |key| std::env::var(key).ok())?;

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(path: &Path) -> Result<QweekConfig> {
        if !path.exists() {
            let default_config = QweekConfig::default();
            if let Err(e) = Self::save_config(path, &default_config) {
                tracing::warn!("Could not write default config to {}: {}", path.display(), e);
            } else {
                tracing::info!("Created default config at {}", path.display());
            }
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)?;
        let config: QweekConfig = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn save_config(path: &Path, config: &QweekConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(config)?)?;
        Ok(())
    }
}

/// Applies environment overrides using `lookup` to read variables.
///
/// Empty values are ignored.
///
/// # Errors
///
/// Returns `QweekError::Config` for an unknown backend name.
pub fn apply_env_overrides<F>(config: &mut QweekConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(backend) = get(ENV_STORE_BACKEND) {
        config.store.backend = backend.parse()?;
    }
    if let Some(file) = get(ENV_DATA_FILE) {
        config.store.file_path = Some(PathBuf::from(file));
    }
    if let Some(project) = get(ENV_DOCUMENT_PROJECT) {
        config.store.document.project_id = project;
    }
    if let Some(key) = get(ENV_DOCUMENT_API_KEY) {
        config.store.document.api_key = Some(key);
    }
    if let Some(url) = get(ENV_DOCUMENT_BASE_URL) {
        config.store.document.base_url = url;
    }
    Ok(())
}
