//! Storage keys.

use std::path::PathBuf;
use std::str::FromStr;
use storyreel_error::{StorageError, StorageErrorKind};

/// Relative, `/`-separated key naming one blob.
///
/// Keys never start with `/`, never contain empty, `.` or `..` segments and
/// never contain backslashes, so every backend can map them under its root
/// without escaping it.
///
/// # Examples
///
/// ```
/// use storyreel_storage::StorageKey;
///
/// let key: StorageKey = "stories/lost_city.json".parse().unwrap();
/// assert_eq!(key.file_name(), "lost_city.json");
/// assert!("../etc/passwd".parse::<StorageKey>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", segments.join("/"))]
pub struct StorageKey {
    segments: Vec<String>,
}

impl StorageKey {
    /// Parses and validates a key.
    #[track_caller]
    pub fn new(key: &str) -> Result<Self, StorageError> {
        let invalid = || StorageError::new(StorageErrorKind::InvalidKey(key.to_string()));
        if key.is_empty() || key.starts_with('/') || key.contains('\\') {
            return Err(invalid());
        }
        let mut segments = Vec::new();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(invalid());
            }
            segments.push(segment.to_string());
        }
        Ok(Self { segments })
    }

    /// Key made by appending one more segment.
    #[track_caller]
    pub fn join(&self, segment: &str) -> Result<Self, StorageError> {
        Self::new(&format!("{}/{}", self, segment))
    }

    /// Last segment.
    pub fn file_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether `prefix` names this key or one of its ancestors.
    pub fn starts_with(&self, prefix: &StorageKey) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Relative filesystem path for this key.
    pub fn to_path(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl FromStr for StorageKey {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
