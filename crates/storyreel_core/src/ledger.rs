//! Chapter ledger rules.
//!
//! A story moves through exactly one kind of transition: appending the next
//! sequential chapter. Chapter `n` is always the `n`-th element of the list,
//! and every append extends the cumulative summary with a labeled line, so
//! the summary can always be rebuilt by replaying the chapters.

use crate::{Chapter, Character, Story, story_filename, story_slug};
use chrono::{DateTime, Utc};
use storyreel_error::{JsonError, LedgerError, LedgerErrorKind, StoryreelResult};
use tracing::debug;

/// Labeled summary segment appended for chapter `number`.
///
/// # Examples
///
/// ```
/// use storyreel_core::summary_line;
///
/// assert_eq!(summary_line(2, "They cross the river."), "\nChapter 2 summary: They cross the river.");
/// ```
pub fn summary_line(number: u32, summary: &str) -> String {
    format!("\nChapter {} summary: {}", number, summary)
}

impl Story {
    /// Starts a new story with no chapters.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerErrorKind::EmptySlug`] when the title yields an
    /// empty slug.
    pub fn create(
        title: impl Into<String>,
        setting: impl Into<String>,
        characters: Vec<Character>,
    ) -> StoryreelResult<Self> {
        Self::create_at(title, setting, characters, Utc::now())
    }

    /// Like [`Story::create`] with an explicit creation time.
    pub fn create_at(
        title: impl Into<String>,
        setting: impl Into<String>,
        characters: Vec<Character>,
        created_at: DateTime<Utc>,
    ) -> StoryreelResult<Self> {
        let title = title.into();
        if story_slug(&title).is_empty() {
            return Err(LedgerError::new(LedgerErrorKind::EmptySlug(title)).into());
        }
        debug!(title = %title, characters = characters.len(), "Creating story");
        Ok(Self::from_parts(title, setting.into(), characters, created_at))
    }

    /// Filesystem-safe identity of this story.
    pub fn slug(&self) -> String {
        story_slug(self.title())
    }

    /// Record filename, `{slug}.json`.
    pub fn filename(&self) -> String {
        story_filename(self.title())
    }

    /// Number the next appended chapter will receive.
    pub fn next_chapter_number(&self) -> u32 {
        self.chapters().len() as u32 + 1
    }

    /// Appends the next sequential chapter and extends the summary.
    pub fn append_chapter(
        &mut self,
        content: impl Into<String>,
        summary: impl Into<String>,
    ) -> &Chapter {
        self.append_chapter_at(content, summary, Utc::now())
    }

    /// Like [`Story::append_chapter`] with an explicit creation time.
    pub fn append_chapter_at(
        &mut self,
        content: impl Into<String>,
        summary: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> &Chapter {
        let number = self.next_chapter_number();
        let summary = summary.into();
        let line = summary_line(number, &summary);
        self.push_chapter(
            Chapter::new(number, content.into(), summary, created_at),
            &line,
        );
        debug!(story = %self.title(), chapter = number, "Appended chapter");
        &self.chapters()[number as usize - 1]
    }

    /// Looks up a chapter by its 1-based number.
    ///
    /// # Errors
    ///
    /// Fails with [`LedgerErrorKind::ChapterNotFound`] for any number outside
    /// `1..=chapters.len()`.
    pub fn find_chapter(&self, number: u32) -> StoryreelResult<&Chapter> {
        self.chapters()
            .iter()
            .find(|chapter| *chapter.chapter_number() == number)
            .ok_or_else(|| {
                LedgerError::new(LedgerErrorKind::ChapterNotFound {
                    story: self.title().clone(),
                    chapter: number.into(),
                })
                .into()
            })
    }

    /// Summary rebuilt from the chapter list.
    pub fn replayed_summary(&self) -> String {
        self.chapters()
            .iter()
            .map(|chapter| summary_line(*chapter.chapter_number(), chapter.summary()))
            .collect()
    }

    /// Checks that a loaded record still satisfies the ledger invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] naming the first chapter whose number breaks
    /// the `1..=n` sequence.
    pub fn check_chapter_sequence(&self) -> StoryreelResult<()> {
        for (index, chapter) in self.chapters().iter().enumerate() {
            let expected = index as u32 + 1;
            if *chapter.chapter_number() != expected {
                return Err(JsonError::new(
                    self.filename(),
                    format!(
                        "chapter {} found at position {}",
                        chapter.chapter_number(),
                        expected
                    ),
                )
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharacterBuilder;
    use chrono::TimeZone;

    fn lost_city() -> Story {
        let mara = CharacterBuilder::default()
            .name("Mara")
            .description("a cartographer")
            .build()
            .unwrap();
        Story::create("Lost City", "A jungle ruin", vec![mara]).unwrap()
    }

    #[test]
    fn test_create_derives_slug_and_filename() {
        let story = lost_city();
        assert_eq!(story.slug(), "lost_city");
        assert_eq!(story.filename(), "lost_city.json");
        assert_eq!(story.summary(), "");
        assert!(story.chapters().is_empty());
        assert_eq!(story.next_chapter_number(), 1);
    }

    #[test]
    fn test_create_rejects_empty_slug() {
        let err = Story::create("", "Nowhere", vec![]).unwrap_err();
        assert!(matches!(
            err.kind(),
            storyreel_error::StoryreelErrorKind::Ledger(e)
                if matches!(e.kind, LedgerErrorKind::EmptySlug(_))
        ));
    }

    #[test]
    fn test_append_numbers_densely_and_extends_summary() {
        let mut story = lost_city();
        let summaries = ["Mara finds a map.", "The map is a fake.", "A second map."];
        for (i, summary) in summaries.iter().enumerate() {
            let chapter = story.append_chapter(format!("Chapter body {}", i + 1), *summary);
            assert_eq!(*chapter.chapter_number(), i as u32 + 1);
        }

        let numbers: Vec<u32> = story
            .chapters()
            .iter()
            .map(|c| *c.chapter_number())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let expected: String = summaries
            .iter()
            .enumerate()
            .map(|(i, s)| format!("\nChapter {} summary: {}", i + 1, s))
            .collect();
        assert_eq!(story.summary(), &expected);
        assert_eq!(story.replayed_summary(), expected);
    }

    #[test]
    fn test_find_chapter_in_and_out_of_range() {
        let mut story = lost_city();
        story.append_chapter("one", "first");
        story.append_chapter("two", "second");

        assert_eq!(story.find_chapter(2).unwrap().content(), "two");
        for missing in [0, 3, 99] {
            let err = story.find_chapter(missing).unwrap_err();
            assert_eq!(err.category(), storyreel_error::ErrorCategory::NotFound);
        }
    }

    #[test]
    fn test_append_chapter_at_stamps_given_time() {
        let mut story = lost_city();
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let chapter = story.append_chapter_at("text", "sum", when);
        assert_eq!(chapter.created_at(), &when);
    }

    #[test]
    fn test_check_chapter_sequence_detects_gaps() {
        let mut story = lost_city();
        story.append_chapter("one", "first");
        story.append_chapter("two", "second");
        assert!(story.check_chapter_sequence().is_ok());

        let mut json = serde_json::to_value(&story).unwrap();
        json["chapters"][1]["chapter_number"] = serde_json::json!(5);
        let tampered: Story = serde_json::from_value(json).unwrap();
        assert!(tampered.check_chapter_sequence().is_err());
    }
}
