//! Sentence-preserving text pagination.

use unicode_segmentation::UnicodeSegmentation;

/// Default character budget per slide.
pub const DEFAULT_MAX_CHARS: usize = 400;

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "gen", "col", "capt", "lt",
    "sgt", "mt", "vs", "e.g", "i.e",
];

fn ends_with_abbreviation(segment: &str) -> bool {
    segment
        .strip_suffix('.')
        .and_then(|rest| rest.split_whitespace().next_back())
        .map(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()))
        .is_some_and(|word| ABBREVIATIONS.contains(&word.to_lowercase().as_str()))
}

/// Trimmed sentences of `text`, in order.
///
/// Unicode sentence boundaries, with segments ending in a known abbreviation
/// such as "Mr." or "Dr." joined to the segment that follows.
///
/// # Examples
///
/// ```
/// use storyreel_slides::sentences;
///
/// assert_eq!(
///     sentences("Mr. Smith went home. Dr. Jones stayed."),
///     vec!["Mr. Smith went home.", "Dr. Jones stayed."]
/// );
/// ```
pub fn sentences(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut joining = false;

    for segment in text
        .split_sentence_bounds()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        match out.last_mut() {
            Some(last) if joining => {
                last.push(' ');
                last.push_str(segment);
            }
            _ => out.push(segment.to_string()),
        }
        joining = out.last().is_some_and(|last| ends_with_abbreviation(last));
    }

    out
}

/// Splits `text` into slide-sized chunks of whole sentences.
///
/// Sentences come from [`sentences`] and are packed greedily: a sentence joins the current chunk (after a single
/// space) when the result stays within `max_chars` characters, otherwise the
/// current chunk is closed and the sentence starts a new one. A sentence
/// longer than `max_chars` becomes its own oversized chunk and is never cut.
///
/// Lengths count `char`s, not bytes.
///
/// # Examples
///
/// ```
/// use storyreel_slides::paginate;
///
/// assert_eq!(paginate("A. B. C.", 3), vec!["A.", "B.", "C."]);
/// assert_eq!(paginate("A. B. C.", 5), vec!["A. B.", "C."]);
/// assert!(paginate("   ", 400).is_empty());
/// ```
pub fn paginate(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in sentences(text) {
        let sentence = sentence.as_str();
        let sentence_len = sentence.chars().count();

        if current.is_empty() {
            current.push_str(sentence);
            current_len = sentence_len;
        } else if current_len + 1 + sentence_len <= max_chars {
            current.push(' ');
            current.push_str(sentence);
            current_len += 1 + sentence_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(sentence);
            current_len = sentence_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    tracing::trace!(chunks = chunks.len(), max_chars, "Paginated text");
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAPTER: &str = "The rain had not stopped for three days. Mara pulled her hood \
        lower and stepped into the ruin. Somewhere below, water dripped onto stone! \
        Was anyone still down there? She lit the lamp and began to climb down, one \
        rung at a time, counting under her breath.";

    #[test]
    fn test_each_sentence_alone_when_budget_is_tight() {
        assert_eq!(paginate("A. B. C.", 3), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        for n in [1, 3, 400] {
            assert!(paginate("", n).is_empty());
            assert!(paginate(" \n\t ", n).is_empty());
        }
    }

    #[test]
    fn test_chunks_reconstruct_sentences_in_order() {
        for max in [100, 120, 200, 400] {
            let chunks = paginate(CHAPTER, max);
            assert!(!chunks.is_empty());
            assert_eq!(chunks.join(" "), sentences(CHAPTER).join(" "));
            for chunk in &chunks {
                assert!(chunk.chars().count() <= max, "{chunk:?} exceeds {max}");
                assert_eq!(chunk.trim(), chunk);
            }
        }
    }

    #[test]
    fn test_oversized_sentence_is_kept_whole() {
        let long = "This sentence is far longer than the tiny budget allows.";
        let text = format!("Hi. {} Bye.", long);
        let chunks = paginate(&text, 10);
        assert_eq!(chunks, vec!["Hi.", long, "Bye."]);
    }

    #[test]
    fn test_oversized_first_sentence_has_no_empty_chunk_before_it() {
        let chunks = paginate("An opening sentence that is too long. Ok.", 8);
        assert_eq!(chunks, vec!["An opening sentence that is too long.", "Ok."]);
    }

    #[test]
    fn test_budget_counts_chars_not_bytes() {
        // Each sentence is 3 chars but 5 bytes
        let chunks = paginate("Çà. Éè.", 9);
        assert_eq!(chunks, vec!["Çà. Éè."]);
    }

    #[test]
    fn test_honorifics_do_not_end_sentences() {
        assert_eq!(
            paginate("Mr. Smith went home. Dr. Jones stayed.", 8),
            vec!["Mr. Smith went home.", "Dr. Jones stayed."]
        );
        assert_eq!(
            paginate("She met Mrs. Alvarez at St. Jude's. Then it rained.", 20),
            vec!["She met Mrs. Alvarez at St. Jude's.", "Then it rained."]
        );
    }

    #[test]
    fn test_single_letters_still_end_sentences() {
        assert_eq!(sentences("A. B. C."), vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_default_budget_fits_short_chapter_on_one_slide() {
        let text = "One. Two. Three.";
        assert_eq!(paginate(text, DEFAULT_MAX_CHARS), vec![text]);
    }
}
