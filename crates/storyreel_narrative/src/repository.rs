//! Story persistence.

use std::sync::Arc;
use storyreel_core::{STORY_FILE_EXTENSION, Story};
use storyreel_error::{
    JsonError, LedgerError, LedgerErrorKind, StoryreelErrorKind, StoryreelResult,
};
use storyreel_storage::{BlobStore, StorageKey};

/// Storage prefix all story records live under.
pub const STORIES_PREFIX: &str = "stories";

/// Reads and writes story records as pretty JSON under `stories/{slug}.json`.
#[derive(Clone)]
pub struct StoryRepository {
    store: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for StoryRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryRepository")
            .field("store", &self.store.backend_name())
            .finish()
    }
}

impl StoryRepository {
    /// Repository over `store`.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Underlying blob store.
    pub fn store(&self) -> &Arc<dyn BlobStore> {
        &self.store
    }

    /// Storage key for a record filename.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerErrorKind::InvalidFilename`] unless `filename` is a
    /// single path segment ending in `.json`.
    pub fn key_for(filename: &str) -> StoryreelResult<StorageKey> {
        let invalid = || LedgerError::new(LedgerErrorKind::InvalidFilename(filename.to_string()));
        let stem = filename
            .strip_suffix(STORY_FILE_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(invalid)?;
        if stem.is_empty() || filename.contains(['/', '\\']) {
            return Err(invalid().into());
        }
        StorageKey::new(&format!("{}/{}", STORIES_PREFIX, filename))
            .map_err(|_| invalid().into())
    }

    /// Whether a record exists under `filename`.
    pub async fn exists(&self, filename: &str) -> StoryreelResult<bool> {
        self.store.exists(&Self::key_for(filename)?).await
    }

    /// Loads the record stored under `filename`.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerErrorKind::StoryNotFound`] when nothing is stored
    /// there and with a JSON error when the record is malformed.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, filename: &str) -> StoryreelResult<Story> {
        let key = Self::key_for(filename)?;
        let bytes = self.store.get(&key).await.map_err(|e| {
            let missing = matches!(e.kind(), StoryreelErrorKind::Storage(err) if err.is_not_found());
            if missing {
                LedgerError::new(LedgerErrorKind::StoryNotFound(filename.to_string())).into()
            } else {
                e
            }
        })?;

        let story: Story = serde_json::from_slice(&bytes)
            .map_err(|e| JsonError::new(key.to_string(), e.to_string()))?;
        story.check_chapter_sequence()?;

        tracing::debug!(chapters = story.chapters().len(), "Loaded story");
        Ok(story)
    }

    /// Writes `story` under its own filename, replacing any previous record.
    pub async fn save(&self, story: &Story) -> StoryreelResult<String> {
        self.save_as(&story.filename(), story).await
    }

    /// Writes `story` under `filename`, replacing any previous record.
    ///
    /// Records loaded under a name other than the one their title derives
    /// to must be written back with this, so updates land in the same record.
    #[tracing::instrument(skip(self, story), fields(story = %story.title()))]
    pub async fn save_as(&self, filename: &str, story: &Story) -> StoryreelResult<String> {
        let key = Self::key_for(filename)?;
        let bytes = serde_json::to_vec_pretty(story)
            .map_err(|e| JsonError::new(key.to_string(), e.to_string()))?;
        self.store.put(&key, &bytes).await?;

        tracing::debug!(filename = %filename, chapters = story.chapters().len(), "Saved story");
        Ok(filename.to_string())
    }

    /// Writes a new record, refusing to replace an existing one.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerErrorKind::StoryExists`] when the filename is taken.
    pub async fn create(&self, story: &Story) -> StoryreelResult<String> {
        let filename = story.filename();
        if self.exists(&filename).await? {
            return Err(LedgerError::new(LedgerErrorKind::StoryExists(filename)).into());
        }
        self.save(story).await
    }

    /// Filenames of all stored stories, sorted.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> StoryreelResult<Vec<String>> {
        let prefix = StorageKey::new(STORIES_PREFIX)?;
        let mut names: Vec<String> = self
            .store
            .list(&prefix)
            .await?
            .into_iter()
            .filter(|key| key.segments().len() == 2)
            .map(|key| key.file_name().to_string())
            .filter(|name| Self::key_for(name).is_ok())
            .collect();
        names.sort();
        Ok(names)
    }
}
