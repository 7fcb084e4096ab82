//! Greedy word-wrap and vertical placement.

use crate::GlyphMetrics;

/// One line of text positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    /// Line text
    pub text: String,
    /// Top edge of the line in pixels
    pub y: u32,
    /// Measured height of the line
    pub height: u32,
}

/// Wraps `text` into lines narrower than `max_width` pixels.
///
/// Words are split on whitespace and added to the current line while the
/// trial line measures strictly less than `max_width`. A word that does not
/// fit starts a new line; a single word wider than `max_width` stays on a
/// line of its own. Empty lines are never produced.
pub fn wrap_lines<M: GlyphMetrics + ?Sized>(text: &str, max_width: u32, metrics: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let trial = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if metrics.text_width(&trial) < max_width {
            line = trial;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = word.to_string();
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Places lines top to bottom starting at a third of the canvas height.
///
/// Each line advances the cursor by its measured height plus `line_gap`.
/// Lines are not checked against the canvas height; anything below the frame
/// is clipped when drawn.
pub fn place_lines<M: GlyphMetrics + ?Sized>(
    lines: Vec<String>,
    canvas_height: u32,
    line_gap: u32,
    metrics: &M,
) -> Vec<PlacedLine> {
    let mut y = canvas_height / 3;
    lines
        .into_iter()
        .map(|text| {
            let height = metrics.line_height(&text);
            let placed = PlacedLine { text, y, height };
            y = y.saturating_add(height).saturating_add(line_gap);
            placed
        })
        .collect()
}
