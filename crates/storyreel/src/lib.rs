//! Storyreel: serialized AI fiction rendered as vertical slides.
//!
//! A story is a title, a setting and a cast. Each chapter is generated by a
//! chat-completions model from the story so far, summarized by a second call,
//! and appended to a ledger persisted as JSON. Any chapter can be paginated
//! into 1080x1920 PNG slides.
//!
//! # Architecture
//!
//! - `storyreel_error` - Error kinds and categories
//! - `storyreel_core` - Story, chapter and completion request types
//! - `storyreel_interface` - The `CompletionDriver` trait
//! - `storyreel_storage` - Blob stores (filesystem, in-memory)
//! - `storyreel_models` - OpenAI-compatible completion client
//! - `storyreel_slides` - Pagination, layout and rendering
//! - `storyreel_narrative` - Chapter orchestration and the story service
//! - `storyreel_server` - HTTP API
//!
//! This crate re-exports the public surface and adds configuration and
//! logging for the `storyreel` binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyreel::{FileSystemStorage, OpenAiClient, StoryService, StoryreelConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoryreelConfig::load(None)?;
//!     let store = Arc::new(FileSystemStorage::new(&config.storage.root)?);
//!     let client = Arc::new(OpenAiClient::new(config.model_config())?);
//!     let service = StoryService::new(store, client, config.slides.clone());
//!
//!     for name in service.list_stories().await? {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{
    LoggingSection, ModelSection, ServerSection, StorageSection, StoryreelConfig,
};
pub use logging::{default_directives, init_logging};

pub use storyreel_core::*;
pub use storyreel_error::*;
pub use storyreel_interface::*;
pub use storyreel_models::{ModelConfig, ModelConfigBuilder, OpenAiClient};
pub use storyreel_narrative::{
    GeneratedChapter, NarrationOrchestrator, StoryLocks, StoryRepository, StoryService,
};
pub use storyreel_server::{ApiState, create_router, serve};
pub use storyreel_slides::{
    FontResolver, ResolvedFont, SlideConfig, SlideDeck, SlideRenderer, paginate,
};
pub use storyreel_storage::{BlobStore, FileSystemStorage, InMemoryStorage, StorageKey};
