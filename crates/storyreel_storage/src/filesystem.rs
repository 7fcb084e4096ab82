//! Filesystem-based blob storage implementation.
//!
//! Keys map directly onto paths below a root directory, so the data root of
//! a deployment looks like:
//!
//! ```text
//! data/
//! ├── stories/
//! │   └── lost_city.json
//! └── slides/
//!     └── lost_city/
//!         └── chapter1/
//!             ├── slide_1.png
//!             └── slide_2.png
//! ```

use crate::{BlobStore, StorageKey};
use std::path::{Path, PathBuf};
use storyreel_error::{StorageError, StorageErrorKind, StoryreelResult};
use uuid::Uuid;

/// Filesystem storage backend.
///
/// Writes go to a uniquely named temp file in the target directory and are
/// then renamed into place, so a crashed or concurrent write never leaves a
/// half-written record behind.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StoryreelResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::CreateDir {
                path: base_path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self { base_path })
    }

    /// Root directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.base_path.join(key.to_path())
    }

    fn read_error(path: &Path, key: &StorageKey, e: std::io::Error) -> StorageError {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(key.to_string()))
        } else {
            StorageError::new(StorageErrorKind::Read {
                key: format!("{} ({})", key, path.display()),
                reason: e.to_string(),
            })
        }
    }

    /// Walks `dir` collecting every file below it as a key under `prefix`.
    async fn collect_files(
        &self,
        dir: PathBuf,
        prefix: StorageKey,
        keys: &mut Vec<StorageKey>,
    ) -> StoryreelResult<()> {
        let mut pending = vec![(dir, prefix)];
        while let Some((dir, prefix)) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir)
                .await
                .map_err(|e| Self::read_error(&dir, &prefix, e))?;
            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| Self::read_error(&dir, &prefix, e))?
            {
                let name = entry.file_name().to_string_lossy().to_string();
                // Skip in-flight temp files and anything that is not a valid key segment
                if name.starts_with('.') {
                    continue;
                }
                let Ok(child) = prefix.join(&name) else {
                    continue;
                };
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| Self::read_error(&entry.path(), &child, e))?;
                if file_type.is_dir() {
                    pending.push((entry.path(), child));
                } else if file_type.is_file() {
                    keys.push(child);
                }
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl BlobStore for FileSystemStorage {
    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn get(&self, key: &StorageKey) -> StoryreelResult<Vec<u8>> {
        let path = self.path_for(key);
        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| Self::read_error(&path, key, e))?;

        tracing::debug!(path = %path.display(), size = data.len(), "Read blob");
        Ok(data)
    }

    #[tracing::instrument(skip(self, data), fields(key = %key, size = data.len()))]
    async fn put(&self, key: &StorageKey, data: &[u8]) -> StoryreelResult<()> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::CreateDir {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_file_name(format!(".{}.{}.tmp", key.file_name(), Uuid::new_v4()));
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write {
                key: key.to_string(),
                reason: format!("{}: {}", temp_path.display(), e),
            })
        })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::Write {
                key: key.to_string(),
                reason: format!("rename to {}: {}", path.display(), e),
            })
            .into());
        }

        tracing::debug!(path = %path.display(), "Stored blob");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(prefix = %prefix))]
    async fn list(&self, prefix: &StorageKey) -> StoryreelResult<Vec<StorageKey>> {
        let dir = self.path_for(prefix);
        if !tokio::fs::try_exists(&dir).await.unwrap_or(false) {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        self.collect_files(dir, prefix.clone(), &mut keys).await?;
        keys.sort();

        tracing::debug!(count = keys.len(), "Listed blobs");
        Ok(keys)
    }

    #[tracing::instrument(skip(self), fields(key = %key))]
    async fn exists(&self, key: &StorageKey) -> StoryreelResult<bool> {
        let path = self.path_for(key);
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
