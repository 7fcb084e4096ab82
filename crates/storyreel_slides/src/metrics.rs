//! Font measurement used by layout.

/// Pixel measurements the layout engine needs from a font.
///
/// Layout is written against this trait so word-wrap behaves the same
/// whether the active font is a scalable outline font or the bitmap
/// fallback.
pub trait GlyphMetrics {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Height of one rendered line of `text` in pixels.
    fn line_height(&self, text: &str) -> u32;
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn text_width(&self, text: &str) -> u32 {
        (**self).text_width(text)
    }

    fn line_height(&self, text: &str) -> u32 {
        (**self).line_height(text)
    }
}
