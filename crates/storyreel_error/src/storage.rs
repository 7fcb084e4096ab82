//! Blob store error types.

/// What went wrong inside a blob store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// A directory on the way to a blob could not be created
    #[display("Cannot create directory {}: {}", path, reason)]
    CreateDir {
        /// Directory path
        path: String,
        /// I/O failure
        reason: String,
    },
    /// Blob bytes could not be written or moved into place
    #[display("Cannot write {}: {}", key, reason)]
    Write {
        /// Storage key
        key: String,
        /// I/O failure
        reason: String,
    },
    /// Blob bytes could not be read
    #[display("Cannot read {}: {}", key, reason)]
    Read {
        /// Storage key
        key: String,
        /// I/O failure
        reason: String,
    },
    /// Nothing is stored under the key
    #[display("Not found: {}", _0)]
    NotFound(String),
    /// Key is empty, absolute, or escapes the storage root
    #[display("Invalid storage key: {}", _0)]
    InvalidKey(String),
}

/// Blob store error with the call site that raised it.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("stories/a.json".to_string()));
/// assert!(err.is_not_found());
/// assert!(format!("{}", err).contains("Not found: stories/a.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the key simply had nothing stored under it.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, StorageErrorKind::NotFound(_))
    }
}
