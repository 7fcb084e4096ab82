//! The operations exposed over HTTP and the command line.

use crate::{GeneratedChapter, NarrationOrchestrator, StoryLocks, StoryRepository};
use std::sync::Arc;
use storyreel_core::{STORY_FILE_EXTENSION, Story, StorySetup};
use storyreel_error::StoryreelResult;
use storyreel_interface::CompletionDriver;
use storyreel_slides::{SlideConfig, SlideDeck};
use storyreel_storage::BlobStore;
use tracing::{info, instrument};

/// Story creation, chapter generation, retrieval and slide generation.
///
/// Chapter generation and story creation take the per-story lock for their
/// whole load, generate and save sequence, so concurrent requests against
/// one story append chapters one after another.
pub struct StoryService {
    repository: StoryRepository,
    orchestrator: NarrationOrchestrator<Arc<dyn CompletionDriver>>,
    slides: SlideDeck,
    locks: StoryLocks,
}

impl std::fmt::Debug for StoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryService")
            .field("repository", &self.repository)
            .field("provider", &self.orchestrator.driver().provider_name())
            .field("model", &self.orchestrator.driver().model_name())
            .field("slides", &self.slides)
            .finish()
    }
}

impl StoryService {
    /// Service storing records and slides in `store` and generating with `driver`.
    ///
    /// Resolves the slide font once, here.
    pub fn new(
        store: Arc<dyn BlobStore>,
        driver: Arc<dyn CompletionDriver>,
        slide_config: SlideConfig,
    ) -> Self {
        let slides = SlideDeck::from_config(Arc::clone(&store), slide_config);
        Self::with_slide_deck(store, driver, slides)
    }

    /// Service with an already configured slide deck.
    pub fn with_slide_deck(
        store: Arc<dyn BlobStore>,
        driver: Arc<dyn CompletionDriver>,
        slides: SlideDeck,
    ) -> Self {
        info!(
            storage = store.backend_name(),
            provider = driver.provider_name(),
            model = driver.model_name(),
            "Creating story service"
        );
        Self {
            repository: StoryRepository::new(store),
            orchestrator: NarrationOrchestrator::new(driver),
            slides,
            locks: StoryLocks::new(),
        }
    }

    /// Story repository.
    pub fn repository(&self) -> &StoryRepository {
        &self.repository
    }

    /// Creates a story and returns its record filename.
    ///
    /// # Errors
    ///
    /// Bad input for a blank title or character name, conflict when a story
    /// with the same filename already exists.
    #[instrument(skip(self, setup), fields(title = %setup.title))]
    pub async fn create_story(&self, setup: StorySetup) -> StoryreelResult<String> {
        let story = setup.into_story()?;
        let filename = story.filename();
        StoryRepository::key_for(&filename)?;

        let _guard = self.locks.lock(&filename).await;
        let filename = self.repository.create(&story).await?;
        info!(filename = %filename, "Created story");
        Ok(filename)
    }

    /// Generates, commits and persists the next chapter of a story.
    ///
    /// # Errors
    ///
    /// Not found for an unknown story, upstream for any completion failure.
    /// On failure the stored story is left unchanged.
    #[instrument(skip(self, prompt), fields(story = %filename))]
    pub async fn generate_chapter(
        &self,
        filename: &str,
        prompt: Option<&str>,
    ) -> StoryreelResult<GeneratedChapter> {
        StoryRepository::key_for(filename)?;
        let _guard = self.locks.lock(filename).await;

        let mut story = self.repository.load(filename).await?;
        let generated = self.orchestrator.continue_story(&mut story, prompt).await?;
        self.repository.save_as(filename, &story).await?;

        info!(chapter = generated.chapter_number(), "Generated chapter");
        Ok(generated)
    }

    /// Full story record.
    pub async fn get_story(&self, filename: &str) -> StoryreelResult<Story> {
        self.repository.load(filename).await
    }

    /// Filenames of all stories, sorted.
    pub async fn list_stories(&self) -> StoryreelResult<Vec<String>> {
        self.repository.list().await
    }

    /// Renders one chapter as slides and returns their paths in order.
    ///
    /// # Errors
    ///
    /// Not found for an unknown story or chapter number.
    #[instrument(skip(self), fields(story = %filename, chapter = chapter_number))]
    pub async fn generate_slides(
        &self,
        filename: &str,
        chapter_number: u32,
    ) -> StoryreelResult<Vec<String>> {
        let story = self.repository.load(filename).await?;
        let chapter = story.find_chapter(chapter_number)?;
        let stem = filename
            .strip_suffix(STORY_FILE_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(filename);

        let keys = self
            .slides
            .generate(stem, chapter_number, chapter.content())
            .await?;
        Ok(keys.iter().map(ToString::to_string).collect())
    }

    /// Raw PNG bytes of a generated slide.
    pub async fn get_slide(&self, path: &str) -> StoryreelResult<Vec<u8>> {
        self.slides.load(path).await
    }
}
