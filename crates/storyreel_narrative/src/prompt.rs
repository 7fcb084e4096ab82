//! Prompt construction.

use storyreel_core::{Character, Story};

/// System framing for chapter generation.
pub const STORYTELLER_SYSTEM: &str = "You are a helpful storyteller AI.";

/// System framing for chapter summarization.
pub const SUMMARIZER_SYSTEM: &str =
    "You are a helpful assistant that summarizes fiction chapters.";

/// Continuation instruction used when the caller gives none.
pub const DEFAULT_INSTRUCTION: &str = "Continue the story.";

/// Cast as one line per character, in story order.
pub fn roster(characters: &[Character]) -> String {
    characters
        .iter()
        .map(Character::roster_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking for chapter `number` of `story`.
///
/// # Examples
///
/// ```
/// use storyreel_core::Story;
/// use storyreel_narrative::chapter_prompt;
///
/// let story = Story::create("Lost City", "A jungle ruin", vec![]).unwrap();
/// let prompt = chapter_prompt(&story, 1, "Begin.");
/// assert!(prompt.starts_with("You are an AI storyteller. Write Chapter 1 of the story titled 'Lost City'."));
/// assert!(prompt.ends_with("Story so far:\n\n\nBegin."));
/// ```
pub fn chapter_prompt(story: &Story, number: u32, instruction: &str) -> String {
    format!(
        "You are an AI storyteller. Write Chapter {} of the story titled '{}'.\n\
         Setting: {}\n\
         Characters:\n\
         {}\n\
         Story so far:\n\
         {}\n\n\
         {}",
        number,
        story.title(),
        story.setting(),
        roster(story.characters()),
        story.summary().trim(),
        instruction
    )
}

/// Prompt asking for a summary of chapter `number`.
pub fn summary_prompt(number: u32, chapter_text: &str) -> String {
    format!(
        "Summarize Chapter {} of the story below in a clear and concise narrative style. \
         Focus on major events, emotional developments, and character progression:\n\n{}",
        number, chapter_text
    )
}
