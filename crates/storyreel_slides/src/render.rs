//! Slide rendering and PNG encoding.

use crate::{
    BITMAP_GLYPH_SIZE, PlacedLine, ResolvedFont, SlideConfig, place_lines, wrap_lines,
};
use ab_glyph::{Font, PxScale, ScaleFont, point};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::Arc;
use storyreel_error::{SlideError, SlideErrorKind};

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Draws text chunks onto fixed-size portrait canvases.
///
/// White text on black, wrapped to the canvas width minus both margins and
/// drawn from a third of the way down. Rendering is deterministic for a
/// given font.
#[derive(Debug, Clone)]
pub struct SlideRenderer {
    config: SlideConfig,
    font: Arc<ResolvedFont>,
}

impl SlideRenderer {
    /// Renderer drawing with `font`.
    pub fn new(config: SlideConfig, font: Arc<ResolvedFont>) -> Self {
        Self { config, font }
    }

    /// Slide configuration.
    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Active font.
    pub fn font(&self) -> &ResolvedFont {
        &self.font
    }

    /// Lines `chunk` occupies on a canvas of the given size.
    pub fn layout(&self, chunk: &str, canvas_width: u32, canvas_height: u32) -> Vec<PlacedLine> {
        let max_width = canvas_width.saturating_sub(self.config.margin().saturating_mul(2));
        let lines = wrap_lines(chunk, max_width, self.font.as_ref());
        place_lines(lines, canvas_height, *self.config.line_gap(), self.font.as_ref())
    }

    /// Renders `chunk` on the configured canvas.
    pub fn render(&self, chunk: &str) -> Result<RgbImage, SlideError> {
        self.render_on(chunk, *self.config.width(), *self.config.height())
    }

    /// Renders `chunk` on a canvas of the given size.
    ///
    /// # Errors
    ///
    /// Fails with [`SlideErrorKind::InvalidCanvas`] when the canvas is empty or
    /// the margins leave no room for text.
    pub fn render_on(
        &self,
        chunk: &str,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<RgbImage, SlideError> {
        let margin = *self.config.margin();
        if canvas_width == 0 || canvas_height == 0 {
            return Err(SlideError::new(SlideErrorKind::InvalidCanvas(format!(
                "{}x{} canvas has no pixels",
                canvas_width, canvas_height
            ))));
        }
        if canvas_width <= margin.saturating_mul(2) {
            return Err(SlideError::new(SlideErrorKind::InvalidCanvas(format!(
                "margin {} leaves no room on a {} px wide canvas",
                margin, canvas_width
            ))));
        }

        let mut image = RgbImage::from_pixel(canvas_width, canvas_height, BACKGROUND);
        let lines = self.layout(chunk, canvas_width, canvas_height);
        for line in &lines {
            match self.font.as_ref() {
                ResolvedFont::Scalable { font, scale, .. } => {
                    draw_outline_line(&mut image, font, *scale, &line.text, margin, line.y)
                }
                ResolvedFont::FixedSize { scale } => {
                    draw_bitmap_line(&mut image, *scale, &line.text, margin, line.y)
                }
            }
        }

        tracing::trace!(lines = lines.len(), capability = %self.font.capability(), "Rendered slide");
        Ok(image)
    }
}

/// Encodes a rendered slide as PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, SlideError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| SlideError::new(SlideErrorKind::Encode(e.to_string())))?;
    Ok(bytes)
}

/// Lightens a pixel towards white by `coverage`; pixels off the canvas are clipped.
fn plot(image: &mut RgbImage, x: i64, y: i64, coverage: f32) {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return;
    }
    let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    for channel in pixel.0.iter_mut() {
        *channel = (*channel).max(value);
    }
}

fn draw_outline_line<F: Font>(
    image: &mut RgbImage,
    font: &F,
    scale: PxScale,
    text: &str,
    x: u32,
    y: u32,
) {
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;
    let mut previous = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                plot(
                    image,
                    bounds.min.x as i64 + gx as i64,
                    bounds.min.y as i64 + gy as i64,
                    coverage,
                );
            });
        }
    }
}

fn bitmap_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_line(image: &mut RgbImage, scale: u32, text: &str, x: u32, y: u32) {
    let advance = BITMAP_GLYPH_SIZE * scale;
    for (index, c) in text.chars().enumerate() {
        let origin_x = x as i64 + index as i64 * advance as i64;
        for (row, bits) in bitmap_glyph(c).iter().enumerate() {
            for col in 0..BITMAP_GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let block_x = origin_x + (col * scale) as i64;
                let block_y = y as i64 + (row as u32 * scale) as i64;
                for dy in 0..scale as i64 {
                    for dx in 0..scale as i64 {
                        plot(image, block_x + dx, block_y + dy, 1.0);
                    }
                }
            }
        }
    }
}
