//! Slide deck generation for a chapter.

use crate::{FontResolver, SlideConfig, SlideRenderer, encode_png, paginate};
use std::sync::Arc;
use storyreel_error::{SlideError, SlideErrorKind, StorageError, StoryreelResult};
use storyreel_storage::{BlobStore, StorageKey};
use tracing::{debug, info, instrument};

/// Storage prefix all slides live under.
pub const SLIDES_PREFIX: &str = "slides";

/// Storage key of one slide: `slides/{story_stem}/chapter{n}/slide_{i}.png`.
///
/// # Examples
///
/// ```
/// use storyreel_slides::slide_key;
///
/// let key = slide_key("lost_city", 2, 1).unwrap();
/// assert_eq!(key.to_string(), "slides/lost_city/chapter2/slide_1.png");
/// assert!(slide_key("../etc", 1, 1).is_err());
/// ```
pub fn slide_key(story_stem: &str, chapter_number: u32, index: usize) -> Result<StorageKey, StorageError> {
    StorageKey::new(&format!(
        "{}/{}/chapter{}/slide_{}.png",
        SLIDES_PREFIX, story_stem, chapter_number, index
    ))
}

/// Paginates chapter text, renders every page and stores the images.
#[derive(Clone)]
pub struct SlideDeck {
    store: Arc<dyn BlobStore>,
    renderer: Arc<SlideRenderer>,
}

impl std::fmt::Debug for SlideDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideDeck")
            .field("store", &self.store.backend_name())
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl SlideDeck {
    /// Deck writing to `store` with an existing renderer.
    pub fn new(store: Arc<dyn BlobStore>, renderer: Arc<SlideRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Deck for a slide configuration, resolving its font once.
    pub fn from_config(store: Arc<dyn BlobStore>, config: SlideConfig) -> Self {
        let font = FontResolver::from_config(&config).resolve();
        Self::new(store, Arc::new(SlideRenderer::new(config, Arc::new(font))))
    }

    /// Renderer used for every slide.
    pub fn renderer(&self) -> &SlideRenderer {
        &self.renderer
    }

    /// Renders `text` as slides for one chapter and returns their keys in order.
    ///
    /// Pages are rendered in parallel on blocking workers and written only
    /// after every page rendered, so a failure leaves previously stored
    /// slides untouched. Existing slides at the same indices are overwritten.
    #[instrument(skip(self, text), fields(story = %story_stem, chapter = chapter_number))]
    pub async fn generate(
        &self,
        story_stem: &str,
        chapter_number: u32,
        text: &str,
    ) -> StoryreelResult<Vec<StorageKey>> {
        let chunks = paginate(text, *self.renderer.config().max_chars());
        let keys = (1..=chunks.len())
            .map(|index| slide_key(story_stem, chapter_number, index))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(pages = chunks.len(), "Paginated chapter");

        let workers = chunks.into_iter().map(|chunk| {
            let renderer = Arc::clone(&self.renderer);
            tokio::task::spawn_blocking(move || -> Result<Vec<u8>, SlideError> {
                let image = renderer.render(&chunk)?;
                encode_png(&image)
            })
        });
        let encoded = futures::future::try_join_all(workers)
            .await
            .map_err(|e| SlideError::new(SlideErrorKind::Worker(e.to_string())))?
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        for (key, png) in keys.iter().zip(&encoded) {
            self.store.put(key, png).await?;
        }

        info!(slides = keys.len(), "Generated slides");
        Ok(keys)
    }

    /// Raw PNG bytes of a slide, addressed relative to the slides root.
    ///
    /// `path` may also carry the `slides/` prefix returned by [`SlideDeck::generate`].
    #[instrument(skip(self))]
    pub async fn load(&self, path: &str) -> StoryreelResult<Vec<u8>> {
        let relative = path
            .strip_prefix(SLIDES_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(path);
        let key = StorageKey::new(&format!("{}/{}", SLIDES_PREFIX, relative))?;
        self.store.get(&key).await
    }
}
