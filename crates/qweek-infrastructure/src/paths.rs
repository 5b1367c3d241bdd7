//! Unified path management for QWeek files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/qweek/             # Config directory (platform default)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── qweek.log.YYYY-MM-DD
//!
//! ~/.local/share/qweek/        # Data directory
//! └── participants.json        # Results of the `file` store backend
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "qweek";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for qweek_core::QweekError {
    fn from(err: PathError) -> Self {
        qweek_core::QweekError::config(err.to_string())
    }
}

/// Path resolver for QWeek.
///
/// With no base directory, paths follow the platform conventions via `dirs`
/// (XDG on Linux). With a base directory every path lives under it, which is
/// what tests and `--home` use.
#[derive(Debug, Clone, Default)]
pub struct QweekPaths {
    base_dir: Option<PathBuf>,
}

impl QweekPaths {
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the configuration directory (e.g. `~/.config/qweek/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory (e.g. `~/.local/share/qweek/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the default results file of the `file` store backend.
    pub fn participants_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("participants.json"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_under_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = QweekPaths::new(Some(temp_dir.path()));

        let config_file = paths.config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(temp_dir.path()));

        let participants = paths.participants_file().unwrap();
        assert!(participants.ends_with("participants.json"));
        assert!(participants.starts_with(paths.data_dir().unwrap()));

        let logs_dir = paths.logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(paths.config_dir().unwrap()));
    }

    #[test]
    fn test_platform_dirs_end_with_app_name() {
        let paths = QweekPaths::new(None);
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with(APP_DIR));
        }
    }
}
