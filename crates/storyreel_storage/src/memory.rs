//! In-memory blob storage.

use crate::{BlobStore, StorageKey};
use std::collections::BTreeMap;
use storyreel_error::{StorageError, StorageErrorKind, StoryreelResult};
use tokio::sync::RwLock;

/// Blob store backed by an ordered map.
///
/// Used by tests and by short-lived runs that need no persistence.
///
/// # Examples
///
/// ```
/// use storyreel_storage::{BlobStore, InMemoryStorage, StorageKey};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStorage::new();
/// let key: StorageKey = "stories/a.json".parse().unwrap();
/// store.put(&key, b"{}").await.unwrap();
/// assert_eq!(store.get(&key).await.unwrap(), b"{}");
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    blobs: RwLock<BTreeMap<StorageKey, Vec<u8>>>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether the store holds no blobs.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BlobStore for InMemoryStorage {
    async fn get(&self, key: &StorageKey) -> StoryreelResult<Vec<u8>> {
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(key.to_string())).into())
    }

    async fn put(&self, key: &StorageKey, data: &[u8]) -> StoryreelResult<()> {
        self.blobs.write().await.insert(key.clone(), data.to_vec());
        tracing::trace!(key = %key, size = data.len(), "Stored blob in memory");
        Ok(())
    }

    async fn list(&self, prefix: &StorageKey) -> StoryreelResult<Vec<StorageKey>> {
        Ok(self
            .blobs
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix) && *key != prefix)
            .cloned()
            .collect())
    }

    async fn exists(&self, key: &StorageKey) -> StoryreelResult<bool> {
        Ok(self.blobs.read().await.contains_key(key))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
