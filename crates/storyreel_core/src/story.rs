//! Story, character and chapter records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Extension of persisted story records.
pub const STORY_FILE_EXTENSION: &str = "json";

/// Filesystem-safe identity derived from a story title.
///
/// Lowercases the title, turns spaces into underscores and slashes into dashes.
///
/// # Examples
///
/// ```
/// use storyreel_core::story_slug;
///
/// assert_eq!(story_slug("Lost City"), "lost_city");
/// assert_eq!(story_slug("Either/Or"), "either-or");
/// ```
pub fn story_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "_").replace('/', "-")
}

/// Record filename for a title: `{slug}.json`.
pub fn story_filename(title: &str) -> String {
    format!("{}.{}", story_slug(title), STORY_FILE_EXTENSION)
}

/// A member of the story's cast.
///
/// Only `name` is required; the other fields default to empty text.
///
/// # Examples
///
/// ```
/// use storyreel_core::CharacterBuilder;
///
/// let mara = CharacterBuilder::default()
///     .name("Mara")
///     .traits("stubborn, curious")
///     .build()
///     .unwrap();
/// assert_eq!(mara.description, "");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Character {
    /// Character name
    pub name: String,
    /// Physical or general description
    #[serde(default)]
    #[builder(default)]
    pub description: String,
    /// Personality traits
    #[serde(default)]
    #[builder(default)]
    pub traits: String,
    /// Backstory
    #[serde(default)]
    #[builder(default)]
    pub backstory: String,
}

impl Character {
    /// One roster line: `"{name} - {description} {traits} {backstory}"`.
    pub fn roster_line(&self) -> String {
        format!(
            "{} - {} {} {}",
            self.name, self.description, self.traits, self.backstory
        )
    }
}

/// One generated chapter. Chapters are created only by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Chapter {
    /// When the chapter was committed
    created_at: DateTime<Utc>,
    /// 1-based position in the story
    chapter_number: u32,
    /// Full chapter text
    content: String,
    /// Model-written summary of this chapter
    summary: String,
}

impl Chapter {
    pub(crate) fn new(
        chapter_number: u32,
        content: String,
        summary: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            created_at,
            chapter_number,
            content,
            summary,
        }
    }
}

/// A story and its append-only chapter ledger.
///
/// Fields are read-only from outside the crate; the only mutation is
/// [`Story::append_chapter`], which keeps chapter numbers dense and the
/// cumulative summary in step with the chapter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Story {
    /// Title as entered at setup
    title: String,
    /// Setting description
    setting: String,
    /// When the story was created
    created_at: DateTime<Utc>,
    /// Labeled chapter summaries, concatenated in chapter order
    #[serde(default)]
    summary: String,
    /// Cast, in setup order
    #[serde(default)]
    characters: Vec<Character>,
    /// Chapters, in number order
    #[serde(default)]
    chapters: Vec<Chapter>,
}

impl Story {
    pub(crate) fn from_parts(
        title: String,
        setting: String,
        characters: Vec<Character>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            setting,
            created_at,
            summary: String::new(),
            characters,
            chapters: Vec::new(),
        }
    }

    pub(crate) fn push_chapter(&mut self, chapter: Chapter, summary_line: &str) {
        self.summary.push_str(summary_line);
        self.chapters.push(chapter);
    }
}
