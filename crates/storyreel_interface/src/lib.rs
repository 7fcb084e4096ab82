//! Trait definitions for Storyreel.
//!
//! The narration layer talks to language models only through
//! [`CompletionDriver`], so the HTTP client, test doubles and any future
//! provider are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::CompletionDriver;
