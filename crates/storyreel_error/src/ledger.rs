//! Story ledger error types.

use crate::ErrorCategory;

/// Specific error conditions for story and chapter bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LedgerErrorKind {
    /// No persisted story under this filename
    #[display("Story not found: {}", _0)]
    StoryNotFound(String),
    /// The story has no chapter with this number
    #[display("Chapter {} not found in story '{}'", chapter, story)]
    ChapterNotFound {
        /// Story title or filename
        story: String,
        /// Requested chapter number, as given
        chapter: i64,
    },
    /// Title produced an empty slug
    #[display("Title '{}' does not produce a usable story identity", _0)]
    EmptySlug(String),
    /// A story with this filename already exists
    #[display("Story already exists: {}", _0)]
    StoryExists(String),
    /// Story filename is not a plain `{slug}.json` name
    #[display("Invalid story filename: {}", _0)]
    InvalidFilename(String),
}

impl LedgerErrorKind {
    /// Coarse category for this condition.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerErrorKind::StoryNotFound(_) | LedgerErrorKind::ChapterNotFound { .. } => {
                ErrorCategory::NotFound
            }
            LedgerErrorKind::EmptySlug(_) | LedgerErrorKind::InvalidFilename(_) => {
                ErrorCategory::BadInput
            }
            LedgerErrorKind::StoryExists(_) => ErrorCategory::Conflict,
        }
    }
}

/// Error type for ledger operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{LedgerError, LedgerErrorKind};
///
/// let err = LedgerError::new(LedgerErrorKind::ChapterNotFound {
///     story: "Lost City".into(),
///     chapter: 4,
/// });
/// assert!(format!("{}", err).contains("Chapter 4"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ledger Error: {} at line {} in {}", kind, line, file)]
pub struct LedgerError {
    /// The specific error condition
    pub kind: LedgerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LedgerError {
    /// Create a new LedgerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LedgerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
