//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe concurrent access to a single JSON document
//! on disk: writes go to a temporary file that is renamed over the target,
//! and read-modify-write cycles hold an exclusive advisory lock.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use qweek_core::QweekError;

/// Errors that can occur during atomic JSON operations.
#[derive(Debug)]
pub enum AtomicJsonError {
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
    /// File locking error.
    LockError(String),
}

impl std::fmt::Display for AtomicJsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            AtomicJsonError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicJsonError {}

impl From<std::io::Error> for AtomicJsonError {
    fn from(e: std::io::Error) -> Self {
        AtomicJsonError::IoError(e)
    }
}

impl From<serde_json::Error> for AtomicJsonError {
    fn from(e: serde_json::Error) -> Self {
        AtomicJsonError::JsonError(e)
    }
}

impl From<AtomicJsonError> for QweekError {
    fn from(e: AtomicJsonError) -> Self {
        match e {
            AtomicJsonError::IoError(err) => err.into(),
            AtomicJsonError::JsonError(err) => err.into(),
            AtomicJsonError::LockError(message) => QweekError::data_access(message),
        }
    }
}

/// A handle to a JSON file with atomic replace semantics.
///
/// Provides:
/// - **Atomicity**: Updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: File locking prevents concurrent read-modify-write cycles
/// - **Durability**: Explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicJsonError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the file atomically.
    pub fn save(&self, data: &T) -> Result<(), AtomicJsonError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a locked read-modify-write.
    ///
    /// `f` receives the current data (or `default_value` when the file does
    /// not exist yet). If it returns `Ok`, the data is written back and its
    /// output is returned; on `Err` nothing is written.
    pub fn update<F, R, E>(&self, default_value: T, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<AtomicJsonError>,
    {
        let _lock = self.acquire_lock()?;

        let mut data = self.load()?.unwrap_or(default_value);
        let output = f(&mut data)?;
        self.save(&data)?;

        Ok(output)
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicJsonError> {
        let parent = self.path.parent().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            ))
        })?;

        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicJsonError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicJsonError> {
        FileLock::acquire(&self.path)
    }
}

/// Exclusive lock on a sidecar `.lock` file, released when dropped.
///
/// The sidecar is never removed so that all writers contend on the same inode.
struct FileLock {
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicJsonError> {
        use fs2::FileExt;

        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| AtomicJsonError::LockError(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        use fs2::FileExt;
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Counter>::new(temp_dir.path().join("counter.json"));

        let counter = Counter {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&counter).unwrap();

        assert_eq!(file.load().unwrap(), Some(counter));
    }

    #[test]
    fn test_load_missing_or_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let file = AtomicJsonFile::<Counter>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_returns_output_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<u32>>::new(temp_dir.path().join("nested/list.json"));

        let len = file
            .update(Vec::new(), |list| {
                list.push(7);
                Ok::<_, AtomicJsonError>(list.len())
            })
            .unwrap();
        assert_eq!(len, 1);

        file.update(Vec::new(), |list| {
            list.push(8);
            Ok::<_, AtomicJsonError>(())
        })
        .unwrap();
        assert_eq!(file.load().unwrap(), Some(vec![7, 8]));
    }

    #[test]
    fn test_failed_update_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<u32>>::new(temp_dir.path().join("list.json"));
        file.save(&vec![1]).unwrap();

        let result: Result<(), QweekError> = file.update(Vec::new(), |list| {
            list.clear();
            Err(QweekError::not_found("item", "1"))
        });
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(file.load().unwrap(), Some(vec![1]));
    }

    #[test]
    fn test_no_temp_file_left_behind_and_lock_file_kept() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        let file = AtomicJsonFile::<Vec<u32>>::new(path.clone());

        file.update(Vec::new(), |list| {
            list.push(1);
            Ok::<_, AtomicJsonError>(())
        })
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".list.json.tmp").exists());
        assert!(temp_dir.path().join("list.lock").exists());
    }

    #[test]
    fn test_concurrent_writers_are_serialised() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::thread;
        use std::time::Duration;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..3u32)
            .map(|n| {
                let path = path.clone();
                let inside = Arc::clone(&inside);
                let max_inside = Arc::clone(&max_inside);
                thread::spawn(move || {
                    // A separate handle per writer, as separate processes would have
                    let file = AtomicJsonFile::<Vec<u32>>::new(path);
                    file.update(Vec::new(), |list| {
                        let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                        max_inside.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(100));
                        list.push(n);
                        inside.fetch_sub(1, Ordering::SeqCst);
                        Ok::<_, AtomicJsonError>(())
                    })
                    .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        let mut stored = AtomicJsonFile::<Vec<u32>>::new(path).load().unwrap().unwrap();
        stored.sort_unstable();
        assert_eq!(stored, vec![0, 1, 2]);
    }
}
