//! Chapter generation.
//!
//! One chapter costs two sequential completion calls: the chapter itself,
//! then a summary of it. Nothing is committed unless both succeed.

use crate::{
    DEFAULT_INSTRUCTION, STORYTELLER_SYSTEM, SUMMARIZER_SYSTEM, chapter_prompt, summary_prompt,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyreel_core::{CompletionRequest, Story};
use storyreel_error::{CompletionError, CompletionErrorKind, StoryreelResult};
use storyreel_interface::CompletionDriver;

/// Text and summary of a chapter that has been generated but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeneratedChapter {
    /// Number the chapter will receive when appended
    chapter_number: u32,
    /// Chapter text
    content: String,
    /// Summary of the chapter text
    summary: String,
}

impl GeneratedChapter {
    /// Splits into `(content, summary)`.
    pub fn into_parts(self) -> (String, String) {
        (self.content, self.summary)
    }
}

/// Generates chapters with an injected completion driver.
pub struct NarrationOrchestrator<D: CompletionDriver> {
    driver: D,
}

impl<D: CompletionDriver> NarrationOrchestrator<D> {
    /// Create an orchestrator calling `driver`.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The completion driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generates the next chapter of `story` and its summary.
    ///
    /// `instruction` defaults to "Continue the story." when absent or blank.
    /// The story is not modified.
    ///
    /// # Errors
    ///
    /// Any completion failure is returned as-is; an empty completion is a
    /// [`CompletionErrorKind::EmptyResponse`].
    #[tracing::instrument(
        skip(self, story, instruction),
        fields(story = %story.title(), chapter = story.next_chapter_number(), model = self.driver.model_name())
    )]
    pub async fn generate_next(
        &self,
        story: &Story,
        instruction: Option<&str>,
    ) -> StoryreelResult<GeneratedChapter> {
        let chapter_number = story.next_chapter_number();
        let instruction = instruction
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_INSTRUCTION);

        let prompt = chapter_prompt(story, chapter_number, instruction);
        let content = self.complete(STORYTELLER_SYSTEM, prompt).await?;
        tracing::debug!(chars = content.len(), "Generated chapter text");

        let summary = self
            .complete(SUMMARIZER_SYSTEM, summary_prompt(chapter_number, &content))
            .await?;
        tracing::debug!(chars = summary.len(), "Summarized chapter");

        Ok(GeneratedChapter {
            chapter_number,
            content,
            summary,
        })
    }

    /// Generates the next chapter and appends it to `story`.
    ///
    /// On error `story` is left exactly as it was.
    pub async fn continue_story(
        &self,
        story: &mut Story,
        instruction: Option<&str>,
    ) -> StoryreelResult<GeneratedChapter> {
        let generated = self.generate_next(story, instruction).await?;
        story.append_chapter(generated.content.clone(), generated.summary.clone());
        tracing::info!(
            story = %story.title(),
            chapter = generated.chapter_number,
            "Committed chapter"
        );
        Ok(generated)
    }

    async fn complete(&self, system: &str, prompt: String) -> StoryreelResult<String> {
        let request = CompletionRequest::framed(system, prompt);
        let response = self.driver.complete(&request).await.inspect_err(|e| {
            tracing::warn!(provider = self.driver.provider_name(), error = %e, "Completion failed");
        })?;

        let text = response.text.trim();
        if text.is_empty() {
            return Err(CompletionError::new(CompletionErrorKind::EmptyResponse).into());
        }
        Ok(text.to_string())
    }
}
