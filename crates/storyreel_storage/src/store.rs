//! Storage trait definition.

use crate::StorageKey;
use storyreel_error::StoryreelResult;

/// Trait for pluggable blob storage backends.
///
/// Story records and slide images are both opaque bytes addressed by a
/// [`StorageKey`]. A `put` replaces any previous value under the key and is
/// atomic: readers see either the old bytes or the new ones.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a storage `NotFound` error when nothing is stored under the key.
    async fn get(&self, key: &StorageKey) -> StoryreelResult<Vec<u8>>;

    /// Store `data` under `key`, replacing any previous value.
    async fn put(&self, key: &StorageKey, data: &[u8]) -> StoryreelResult<()>;

    /// Keys stored under `prefix`, sorted.
    ///
    /// A missing prefix lists as empty rather than failing.
    async fn list(&self, prefix: &StorageKey) -> StoryreelResult<Vec<StorageKey>>;

    /// Whether anything is stored under `key`.
    async fn exists(&self, key: &StorageKey) -> StoryreelResult<bool>;

    /// Backend name (e.g., "filesystem", "memory").
    fn backend_name(&self) -> &'static str;
}
