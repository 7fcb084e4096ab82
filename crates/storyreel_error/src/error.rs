//! Top-level error wrapper types.

use crate::{
    CompletionError, ConfigError, JsonError, LedgerError, SlideError, StorageError,
    StorageErrorKind, ValidationError,
};

/// Coarse status category shown to users alongside the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorCategory {
    /// A story, chapter or slide identity did not resolve
    #[display("not found")]
    NotFound,
    /// Malformed or missing input
    #[display("bad input")]
    BadInput,
    /// The request conflicts with existing state
    #[display("conflict")]
    Conflict,
    /// The completion provider failed
    #[display("upstream error")]
    Upstream,
    /// Anything else
    #[display("internal error")]
    Internal,
}

/// Every error condition the workspace can produce.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ConfigError, ConfigErrorKind, StoryreelError};
///
/// let err: StoryreelError = ConfigError::new(ConfigErrorKind::Load("missing [storage] section".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// Storage backend error
    #[from(StorageError)]
    Storage(StorageError),
    /// Story ledger error (unknown story or chapter, bad identity)
    #[from(LedgerError)]
    Ledger(LedgerError),
    /// Completion provider error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Slide rendering error
    #[from(SlideError)]
    Slide(SlideError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Input validation error
    #[from(ValidationError)]
    Validation(ValidationError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ValidationError, ValidationErrorKind};
///
/// fn check_title(title: &str) -> StoryreelResult<()> {
///     if title.is_empty() {
///         Err(ValidationError::new(ValidationErrorKind::MissingField("title".into())))?
///     }
///     Ok(())
/// }
///
/// assert!(check_title("").is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }

    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self.kind() {
            StoryreelErrorKind::Ledger(err) => err.kind.category(),
            StoryreelErrorKind::Completion(_) => ErrorCategory::Upstream,
            StoryreelErrorKind::Validation(_) => ErrorCategory::BadInput,
            StoryreelErrorKind::Storage(err) => match err.kind {
                StorageErrorKind::NotFound(_) => ErrorCategory::NotFound,
                StorageErrorKind::InvalidKey(_) => ErrorCategory::BadInput,
                _ => ErrorCategory::Internal,
            },
            StoryreelErrorKind::Slide(_)
            | StoryreelErrorKind::Config(_)
            | StoryreelErrorKind::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Human-readable message without the location suffix.
    pub fn detail(&self) -> String {
        match self.kind() {
            StoryreelErrorKind::Storage(err) => err.kind.to_string(),
            StoryreelErrorKind::Ledger(err) => err.kind.to_string(),
            StoryreelErrorKind::Completion(err) => err.kind.to_string(),
            StoryreelErrorKind::Slide(err) => err.kind.to_string(),
            StoryreelErrorKind::Config(err) => err.kind.to_string(),
            StoryreelErrorKind::Json(err) => format!("{}: {}", err.record, err.message),
            StoryreelErrorKind::Validation(err) => err.kind().to_string(),
        }
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyreel operations.
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CompletionErrorKind, LedgerErrorKind, StorageErrorKind, ValidationErrorKind,
    };

    #[test]
    fn test_categories() {
        let cases: Vec<(StoryreelError, ErrorCategory)> = vec![
            (
                LedgerError::new(LedgerErrorKind::StoryNotFound("a.json".into())).into(),
                ErrorCategory::NotFound,
            ),
            (
                LedgerError::new(LedgerErrorKind::StoryExists("a.json".into())).into(),
                ErrorCategory::Conflict,
            ),
            (
                CompletionError::new(CompletionErrorKind::EmptyResponse).into(),
                ErrorCategory::Upstream,
            ),
            (
                ValidationError::new(ValidationErrorKind::MissingField("title".into())).into(),
                ErrorCategory::BadInput,
            ),
            (
                StorageError::new(StorageErrorKind::NotFound("slides/x.png".into())).into(),
                ErrorCategory::NotFound,
            ),
            (
                StorageError::new(StorageErrorKind::InvalidKey("../x".into())).into(),
                ErrorCategory::BadInput,
            ),
            (
                StorageError::new(StorageErrorKind::Write {
                    key: "stories/a.json".into(),
                    reason: "disk full".into(),
                })
                .into(),
                ErrorCategory::Internal,
            ),
            (
                JsonError::new("stories/a.json", "trailing comma").into(),
                ErrorCategory::Internal,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.category(), expected, "{}", err);
        }
    }

    #[test]
    fn test_detail_drops_location() {
        let err: StoryreelError =
            LedgerError::new(LedgerErrorKind::StoryNotFound("lost_city.json".into())).into();
        assert_eq!(err.detail(), "Story not found: lost_city.json");
        assert!(err.to_string().contains(" at line "));

        let err: StoryreelError = JsonError::new("stories/a.json", "trailing comma").into();
        assert_eq!(err.detail(), "stories/a.json: trailing comma");
    }
}
