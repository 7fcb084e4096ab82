//! Font resolution.
//!
//! Resolution never fails: the configured font files are tried in order and,
//! when none of them loads, the built-in 8x8 bitmap font is used instead.

use crate::{GlyphMetrics, SlideConfig};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Width and height of one bitmap glyph before scaling.
pub const BITMAP_GLYPH_SIZE: u32 = 8;

/// What kind of font a [`ResolvedFont`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FontCapability {
    /// Outline font rendered at any pixel size
    Scalable,
    /// Built-in bitmap font scaled by an integer factor
    FixedSize,
}

/// The font slides are drawn with.
pub enum ResolvedFont {
    /// A TrueType/OpenType font loaded from disk
    Scalable {
        /// Parsed font
        font: FontVec,
        /// Pixel scale glyphs are drawn at
        scale: PxScale,
        /// File the font was loaded from
        source: PathBuf,
    },
    /// The 8x8 bitmap fallback
    FixedSize {
        /// Integer magnification of each 8x8 glyph
        scale: u32,
    },
}

impl ResolvedFont {
    /// Bitmap fallback at the given magnification (at least 1).
    pub fn bitmap(scale: u32) -> Self {
        ResolvedFont::FixedSize {
            scale: scale.max(1),
        }
    }

    /// Capability tag of this font.
    pub fn capability(&self) -> FontCapability {
        match self {
            ResolvedFont::Scalable { .. } => FontCapability::Scalable,
            ResolvedFont::FixedSize { .. } => FontCapability::FixedSize,
        }
    }

    /// File the font came from, for scalable fonts.
    pub fn source(&self) -> Option<&Path> {
        match self {
            ResolvedFont::Scalable { source, .. } => Some(source),
            ResolvedFont::FixedSize { .. } => None,
        }
    }
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedFont::Scalable { scale, source, .. } => f
                .debug_struct("Scalable")
                .field("scale", scale)
                .field("source", source)
                .finish_non_exhaustive(),
            ResolvedFont::FixedSize { scale } => {
                f.debug_struct("FixedSize").field("scale", scale).finish()
            }
        }
    }
}

impl GlyphMetrics for ResolvedFont {
    fn text_width(&self, text: &str) -> u32 {
        match self {
            ResolvedFont::Scalable { font, scale, .. } => {
                let scaled = font.as_scaled(*scale);
                let mut width = 0.0f32;
                let mut previous = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                width.ceil().max(0.0) as u32
            }
            ResolvedFont::FixedSize { scale } => {
                text.chars().count() as u32 * BITMAP_GLYPH_SIZE * scale
            }
        }
    }

    fn line_height(&self, _text: &str) -> u32 {
        match self {
            ResolvedFont::Scalable { font, scale, .. } => {
                font.as_scaled(*scale).height().ceil().max(1.0) as u32
            }
            ResolvedFont::FixedSize { scale } => BITMAP_GLYPH_SIZE * scale,
        }
    }
}

/// Picks the slide font from a list of candidate files.
#[derive(Debug, Clone, PartialEq)]
pub struct FontResolver {
    paths: Vec<PathBuf>,
    font_size: f32,
    bitmap_scale: u32,
}

impl FontResolver {
    /// Resolver for explicit candidates.
    pub fn new(paths: Vec<PathBuf>, font_size: f32, bitmap_scale: u32) -> Self {
        Self {
            paths,
            font_size,
            bitmap_scale,
        }
    }

    /// Resolver for the `[slides]` configuration.
    pub fn from_config(config: &SlideConfig) -> Self {
        Self::new(
            config.font_paths().clone(),
            *config.font_size(),
            *config.bitmap_scale(),
        )
    }

    /// Loads the first usable candidate, or the bitmap fallback.
    #[tracing::instrument(skip(self), fields(candidates = self.paths.len(), font_size = self.font_size))]
    pub fn resolve(&self) -> ResolvedFont {
        if self.font_size.is_finite() && self.font_size > 0.0 {
            for path in &self.paths {
                if let Some(font) = Self::load(path) {
                    info!(path = %path.display(), "Loaded slide font");
                    return ResolvedFont::Scalable {
                        font,
                        scale: PxScale::from(self.font_size),
                        source: path.clone(),
                    };
                }
            }
        }

        warn!(
            scale = self.bitmap_scale,
            "No scalable font available, falling back to bitmap font"
        );
        ResolvedFont::bitmap(self.bitmap_scale)
    }

    fn load(path: &Path) -> Option<FontVec> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Font file unavailable");
                return None;
            }
        };
        match FontVec::try_from_vec(data) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Font file is not a usable font");
                None
            }
        }
    }
}
