//! Core data types for Storyreel.
//!
//! This crate holds the story record (title, setting, cast, cumulative summary
//! and the append-only chapter list), the ledger rules that keep chapter
//! numbering dense, and the request/response types exchanged with a
//! completion provider.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ledger;
mod message;
mod request;
mod role;
mod setup;
mod story;

pub use ledger::summary_line;
pub use message::{Message, MessageBuilder};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, CompletionResponseBuilder,
};
pub use role::Role;
pub use setup::{StorySetup, StorySetupBuilder};
pub use story::{
    Chapter, Character, CharacterBuilder, STORY_FILE_EXTENSION, Story, story_filename, story_slug,
};
