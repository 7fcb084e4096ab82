//! Error types for Storyreel.
//!
//! This crate provides the foundation error types used throughout the Storyreel workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error also maps onto a coarse [`ErrorCategory`], which outer layers
//! (HTTP, CLI) use to pick a status without matching on individual kinds.
//!
//! # Examples
//!
//! ```
//! use storyreel_error::{ErrorCategory, LedgerError, LedgerErrorKind, StoryreelResult};
//!
//! fn load_story() -> StoryreelResult<String> {
//!     Err(LedgerError::new(LedgerErrorKind::StoryNotFound("lost_city.json".into())))?
//! }
//!
//! let err = load_story().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::NotFound);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod json;
mod ledger;
mod slide;
mod storage;
mod validation;

pub use completion::{CompletionError, CompletionErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ErrorCategory, StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use json::JsonError;
pub use ledger::{LedgerError, LedgerErrorKind};
pub use slide::{SlideError, SlideErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
