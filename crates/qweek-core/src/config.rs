//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default so an empty or missing file yields a working setup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QweekError;

/// Which participant store backend to build at startup.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One JSON file on local disk.
    #[default]
    File,
    /// Hosted document database collection.
    Document,
    /// Process-local, lost on exit.
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreBackend::File => "file",
            StoreBackend::Document => "document",
            StoreBackend::Memory => "memory",
        };
        f.write_str(name)
    }
}

impl FromStr for StoreBackend {
    type Err = QweekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StoreBackend::File),
            "document" | "firestore" => Ok(StoreBackend::Document),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(QweekError::config(format!(
                "Unknown store backend '{}' (expected file, document or memory)",
                other
            ))),
        }
    }
}

/// Connection settings for the hosted document database.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentStoreConfig {
    #[serde(default = "default_document_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_document_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_collection() -> String {
    "participants".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for DocumentStoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_document_base_url(),
            project_id: String::new(),
            collection: default_collection(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Participant store settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Results file for the `file` backend; the platform data directory is
    /// used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    #[serde(default)]
    pub document: DocumentStoreConfig,
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct QweekConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: QweekConfig = toml::from_str("").unwrap();
        assert_eq!(config, QweekConfig::default());
        assert_eq!(config.store.backend, StoreBackend::File);
        assert_eq!(config.store.document.collection, "participants");
    }

    #[test]
    fn test_parse_document_store() {
        let config: QweekConfig = toml::from_str(
            r#"
            [store]
            backend = "document"

            [store.document]
            project_id = "qweek-prod"
            api_key = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.backend, StoreBackend::Document);
        assert_eq!(config.store.document.project_id, "qweek-prod");
        assert_eq!(config.store.document.api_key.as_deref(), Some("secret"));
        assert_eq!(
            config.store.document.base_url,
            "https://firestore.googleapis.com/v1"
        );
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("File".parse::<StoreBackend>().unwrap(), StoreBackend::File);
        assert_eq!(
            "firestore".parse::<StoreBackend>().unwrap(),
            StoreBackend::Document
        );
        assert!("sqlite".parse::<StoreBackend>().unwrap_err().is_config());
    }
}
