//! Text pagination and portrait slide rendering for Storyreel.
//!
//! A chapter becomes a slide deck in three steps:
//!
//! 1. [`paginate`] packs whole sentences into chunks under a character budget
//! 2. [`SlideRenderer`] word-wraps each chunk to the canvas width and draws it
//!    white on black, using the font picked by [`FontResolver`]
//! 3. [`SlideDeck`] runs the renders in parallel and stores the PNGs as
//!    `slides/{story}/chapter{n}/slide_{i}.png`
//!
//! Layout only needs widths and heights, so it is written against
//! [`GlyphMetrics`] and behaves the same for scalable fonts and the built-in
//! bitmap fallback.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use storyreel_slides::{ResolvedFont, SlideConfig, SlideRenderer, encode_png};
//!
//! let renderer = SlideRenderer::new(SlideConfig::default(), Arc::new(ResolvedFont::bitmap(4)));
//! let image = renderer.render("The jungle swallowed the road.").unwrap();
//! assert_eq!(image.dimensions(), (1080, 1920));
//! let png = encode_png(&image).unwrap();
//! assert!(!png.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod deck;
mod font;
mod layout;
mod metrics;
mod paginate;
mod render;

pub use config::SlideConfig;
pub use deck::{SLIDES_PREFIX, SlideDeck, slide_key};
pub use font::{BITMAP_GLYPH_SIZE, FontCapability, FontResolver, ResolvedFont};
pub use layout::{PlacedLine, place_lines, wrap_lines};
pub use metrics::GlyphMetrics;
pub use paginate::{DEFAULT_MAX_CHARS, paginate, sentences};
pub use render::{SlideRenderer, encode_png};
