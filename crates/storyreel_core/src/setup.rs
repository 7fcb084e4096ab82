//! Story setup input.

use crate::{Character, Story};
use serde::{Deserialize, Serialize};
use storyreel_error::{StoryreelResult, ValidationError, ValidationErrorKind};

/// Everything needed to start a story.
///
/// This is the body accepted by the story-creation endpoint and the
/// `new --setup` command.
///
/// # Examples
///
/// ```
/// use storyreel_core::{Character, StorySetup};
///
/// let setup: StorySetup = serde_json::from_str(
///     r#"{"title": "Lost City", "setting": "A jungle ruin",
///         "characters": [{"name": "Mara"}]}"#,
/// ).unwrap();
///
/// let story = setup.into_story().unwrap();
/// assert_eq!(story.filename(), "lost_city.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct StorySetup {
    /// Story title
    pub title: String,
    /// Setting description
    #[serde(default)]
    #[builder(default)]
    pub setting: String,
    /// Cast
    #[serde(default)]
    #[builder(default)]
    pub characters: Vec<Character>,
}

impl StorySetup {
    /// Checks that the title and every character name carry text.
    pub fn validate(&self) -> StoryreelResult<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::MissingField("title".into())).into());
        }
        if let Some(index) = self
            .characters
            .iter()
            .position(|c| c.name.trim().is_empty())
        {
            return Err(ValidationError::new(ValidationErrorKind::InvalidField {
                field: format!("characters[{}].name", index),
                reason: "name must not be blank".into(),
            })
            .into());
        }
        Ok(())
    }

    /// Validates and turns the setup into a chapterless story.
    pub fn into_story(self) -> StoryreelResult<Story> {
        self.validate()?;
        Story::create(self.title, self.setting, self.characters)
    }
}
