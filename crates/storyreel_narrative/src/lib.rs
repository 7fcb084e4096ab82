//! Chapter narration and story orchestration for Storyreel.
//!
//! This crate turns the story ledger into a running service:
//!
//! - **Prompts**: the chapter and summary prompts built from story state
//! - **Orchestrator**: two sequential completion calls per chapter, committed
//!   only when both succeed
//! - **Repository**: story records persisted as JSON in a blob store
//! - **Locks**: per-story serialization of chapter generation
//! - **Service**: the operations the HTTP API and CLI expose
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storyreel_narrative::StoryService;
//! use storyreel_slides::SlideConfig;
//! use storyreel_storage::FileSystemStorage;
//!
//! # async fn example(driver: Arc<dyn storyreel_interface::CompletionDriver>) -> storyreel_error::StoryreelResult<()> {
//! let store = Arc::new(FileSystemStorage::new("./data")?);
//! let service = StoryService::new(store, driver, SlideConfig::default());
//!
//! let chapter = service.generate_chapter("lost_city.json", None).await?;
//! println!("Chapter {}: {}", chapter.chapter_number(), chapter.summary());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod locks;
mod orchestrator;
mod prompt;
mod repository;
mod service;

pub use locks::StoryLocks;
pub use orchestrator::{GeneratedChapter, NarrationOrchestrator};
pub use prompt::{
    DEFAULT_INSTRUCTION, STORYTELLER_SYSTEM, SUMMARIZER_SYSTEM, chapter_prompt, roster,
    summary_prompt,
};
pub use repository::{STORIES_PREFIX, StoryRepository};
pub use service::StoryService;
