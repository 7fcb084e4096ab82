//! End-to-end story service tests over in-memory storage.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use storyreel_core::{CharacterBuilder, CompletionRequest, CompletionResponse, StorySetup};
use storyreel_error::{
    CompletionError, CompletionErrorKind, ErrorCategory, StoryreelResult,
};
use storyreel_interface::CompletionDriver;
use storyreel_narrative::{STORYTELLER_SYSTEM, StoryService};
use storyreel_slides::SlideConfig;
use storyreel_storage::{BlobStore, InMemoryStorage, StorageKey};

/// Answers chapter prompts with numbered prose and summary prompts with a
/// numbered summary. Summaries can be switched to fail.
#[derive(Default)]
struct ScriptedDriver {
    chapters: AtomicUsize,
    summaries: AtomicUsize,
    fail_summaries: AtomicBool,
}

#[async_trait]
impl CompletionDriver for ScriptedDriver {
    async fn complete(&self, req: &CompletionRequest) -> StoryreelResult<CompletionResponse> {
        tokio::task::yield_now().await;
        if req.system_prompt() == Some(STORYTELLER_SYSTEM) {
            let n = self.chapters.fetch_add(1, Ordering::SeqCst) + 1;
            return Ok(CompletionResponse::from_text(format!(
                "The expedition pressed on. Day {} began in fog. Nobody spoke.",
                n
            )));
        }
        if self.fail_summaries.load(Ordering::SeqCst) {
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: 503,
                body: "overloaded".into(),
            })
            .into());
        }
        let n = self.summaries.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(CompletionResponse::from_text(format!("Summary number {}.", n)))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

fn small_slides() -> SlideConfig {
    SlideConfig::default()
        .with_width(320)
        .with_height(480)
        .with_margin(20)
        .with_font_paths(Vec::new())
        .with_bitmap_scale(1)
        .with_max_chars(40)
}

fn service() -> (StoryService, Arc<InMemoryStorage>, Arc<ScriptedDriver>) {
    let store = Arc::new(InMemoryStorage::new());
    let driver = Arc::new(ScriptedDriver::default());
    let service = StoryService::new(store.clone(), driver.clone(), small_slides());
    (service, store, driver)
}

fn lost_city() -> StorySetup {
    StorySetup {
        title: "Lost City".into(),
        setting: "A jungle ruin".into(),
        characters: vec![
            CharacterBuilder::default()
                .name("Mara")
                .description("a cartographer")
                .build()
                .unwrap(),
        ],
    }
}

#[tokio::test]
async fn test_lost_city_two_chapters() {
    let (service, _, _) = service();

    let filename = service.create_story(lost_city()).await.unwrap();
    assert_eq!(filename, "lost_city.json");

    let first = service.generate_chapter(&filename, None).await.unwrap();
    let second = service
        .generate_chapter(&filename, Some("Find the gate."))
        .await
        .unwrap();
    assert_eq!(*first.chapter_number(), 1);
    assert_eq!(*second.chapter_number(), 2);

    let story = service.get_story(&filename).await.unwrap();
    assert_eq!(story.chapters().len(), 2);
    assert_eq!(
        story.summary(),
        "\nChapter 1 summary: Summary number 1.\nChapter 2 summary: Summary number 2."
    );
    assert_eq!(story.chapters()[1].content(), second.content());
}

#[tokio::test]
async fn test_failed_summary_leaves_record_untouched() {
    let (service, store, driver) = service();
    let filename = service.create_story(lost_city()).await.unwrap();
    service.generate_chapter(&filename, None).await.unwrap();

    let key = StorageKey::new("stories/lost_city.json").unwrap();
    let before = store.get(&key).await.unwrap();

    driver.fail_summaries.store(true, Ordering::SeqCst);
    let err = service.generate_chapter(&filename, None).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Upstream);

    assert_eq!(store.get(&key).await.unwrap(), before);
    assert_eq!(service.get_story(&filename).await.unwrap().chapters().len(), 1);
}

#[tokio::test]
async fn test_concurrent_generation_numbers_chapters_densely() {
    let (service, _, _) = service();
    let service = Arc::new(service);
    let filename = service.create_story(lost_city()).await.unwrap();

    let tasks = (0..5).map(|_| {
        let service = Arc::clone(&service);
        let filename = filename.clone();
        tokio::spawn(async move { service.generate_chapter(&filename, None).await })
    });
    let mut numbers: Vec<u32> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|joined| *joined.unwrap().unwrap().chapter_number())
        .collect();
    numbers.sort();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

    let story = service.get_story(&filename).await.unwrap();
    let stored: Vec<u32> = story.chapters().iter().map(|c| *c.chapter_number()).collect();
    assert_eq!(stored, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_duplicate_story_is_conflict() {
    let (service, _, _) = service();
    service.create_story(lost_city()).await.unwrap();
    let err = service.create_story(lost_city()).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Conflict);
}

#[tokio::test]
async fn test_blank_title_is_bad_input() {
    let (service, store, _) = service();
    let mut setup = lost_city();
    setup.title = "  ".into();
    let err = service.create_story(setup).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::BadInput);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_unknown_story_and_chapter_are_not_found() {
    let (service, _, driver) = service();
    let err = service.generate_chapter("missing.json", None).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(driver.chapters.load(Ordering::SeqCst), 0);

    let filename = service.create_story(lost_city()).await.unwrap();
    let err = service.generate_slides(&filename, 1).await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[tokio::test]
async fn test_listing_is_sorted() {
    let (service, _, _) = service();
    for title in ["Zebra Crossing", "Alpha Centauri", "Lost City"] {
        let mut setup = lost_city();
        setup.title = title.into();
        service.create_story(setup).await.unwrap();
    }
    assert_eq!(
        service.list_stories().await.unwrap(),
        vec!["alpha_centauri.json", "lost_city.json", "zebra_crossing.json"]
    );
}

#[tokio::test]
async fn test_slides_for_a_chapter() {
    let (service, _, _) = service();
    let filename = service.create_story(lost_city()).await.unwrap();
    service.generate_chapter(&filename, None).await.unwrap();

    let paths = service.generate_slides(&filename, 1).await.unwrap();
    assert!(paths.len() > 1);
    for (i, path) in paths.iter().enumerate() {
        assert_eq!(path, &format!("slides/lost_city/chapter1/slide_{}.png", i + 1));
        let png = service.get_slide(path).await.unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    let relative = service
        .get_slide("lost_city/chapter1/slide_1.png")
        .await
        .unwrap();
    assert!(!relative.is_empty());
}

#[tokio::test]
async fn test_chapters_append_to_the_requested_record() {
    let (service, store, _) = service();
    let story = lost_city().into_story().unwrap();
    let key = StorageKey::new("stories/Lost_City.json").unwrap();
    store
        .put(&key, &serde_json::to_vec_pretty(&story).unwrap())
        .await
        .unwrap();

    let first = service.generate_chapter("Lost_City.json", None).await.unwrap();
    let second = service.generate_chapter("Lost_City.json", None).await.unwrap();
    assert_eq!(*first.chapter_number(), 1);
    assert_eq!(*second.chapter_number(), 2);

    let stored = service.get_story("Lost_City.json").await.unwrap();
    assert_eq!(stored.chapters().len(), 2);
    assert_eq!(service.list_stories().await.unwrap(), vec!["Lost_City.json"]);
}
