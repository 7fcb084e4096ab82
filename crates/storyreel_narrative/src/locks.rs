//! Per-story serialization.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

/// One async mutex per story filename.
///
/// Holding the guard for a story serializes every load, modify and save
/// sequence on that story. Different stories never contend.
#[derive(Debug, Clone, Default)]
pub struct StoryLocks {
    locks: Arc<RwLock<HashMap<String, Arc<Mutex<()>>>>>,
}

impl StoryLocks {
    /// Empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `story`.
    pub async fn lock(&self, story: &str) -> OwnedMutexGuard<()> {
        let existing = self.locks.read().await.get(story).cloned();
        let mutex = match existing {
            Some(mutex) => mutex,
            None => self
                .locks
                .write()
                .await
                .entry(story.to_string())
                .or_default()
                .clone(),
        };
        tracing::trace!(story, "Waiting for story lock");
        mutex.lock_owned().await
    }

    /// Number of stories that have been locked at least once.
    pub async fn len(&self) -> usize {
        self.locks.read().await.len()
    }

    /// Whether no story has been locked yet.
    pub async fn is_empty(&self) -> bool {
        self.locks.read().await.is_empty()
    }
}
