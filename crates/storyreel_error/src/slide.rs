//! Slide rendering error types.

/// Kinds of slide errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SlideErrorKind {
    /// Canvas could not be set up (zero-sized, margins too wide)
    #[display("Invalid canvas: {}", _0)]
    InvalidCanvas(String),
    /// PNG encoding failed
    #[display("Failed to encode slide: {}", _0)]
    Encode(String),
    /// A render worker panicked or was cancelled
    #[display("Render worker failed: {}", _0)]
    Worker(String),
}

/// Slide error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Slide Error: {} at line {} in {}", kind, line, file)]
pub struct SlideError {
    /// The kind of error that occurred
    pub kind: SlideErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SlideError {
    /// Create a new slide error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SlideErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
