//! Configuration and process setup error types.

/// What went wrong while configuring the process.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to load configuration: {}", _0)]
    Load(String),
    /// A configuration value has the wrong shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// The log filter or subscriber could not be installed
    #[display("Failed to set up logging: {}", _0)]
    Logging(String),
    /// The HTTP listener could not be bound or stopped serving
    #[display("Server error on {}: {}", bind, reason)]
    Server {
        /// Listen address
        bind: String,
        /// Underlying failure
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use storyreel_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("slides.width: invalid type".into()));
/// assert!(err.to_string().contains("slides.width"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
