//! Story record encoding errors.

/// A story record that could not be encoded, decoded or trusted.
///
/// `record` names the storage key or story the problem was found in.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", record, message, line, file)]
pub struct JsonError {
    /// Record the error concerns
    pub record: String,
    /// Parser or invariant message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError about `record` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyreel_error::JsonError;
    ///
    /// let err = JsonError::new("stories/lost_city.json", "expected value at line 1 column 1");
    /// assert_eq!(err.record, "stories/lost_city.json");
    /// assert!(err.to_string().contains("expected value"));
    /// ```
    #[track_caller]
    pub fn new(record: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            record: record.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
