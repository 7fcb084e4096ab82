//! Slide canvas and font configuration.

use crate::DEFAULT_MAX_CHARS;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for slide pagination and rendering (the `[slides]` section).
///
/// # Examples
///
/// ```
/// use storyreel_slides::SlideConfig;
///
/// let config = SlideConfig::default().with_width(720).with_height(1280);
/// assert_eq!(*config.margin(), 60);
/// assert_eq!(config.text_width(), 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct SlideConfig {
    /// Character budget per slide
    #[serde(default = "default_max_chars")]
    max_chars: usize,

    /// Canvas width in pixels
    #[serde(default = "default_width")]
    width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    height: u32,

    /// Horizontal margin on each side
    #[serde(default = "default_margin")]
    margin: u32,

    /// Gap between lines
    #[serde(default = "default_line_gap")]
    line_gap: u32,

    /// Pixel size of scalable fonts
    #[serde(default = "default_font_size")]
    font_size: f32,

    /// Font files tried in order
    #[serde(default = "default_font_paths")]
    font_paths: Vec<PathBuf>,

    /// Integer scale of the 8x8 bitmap fallback font
    #[serde(default = "default_bitmap_scale")]
    bitmap_scale: u32,
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1920
}

fn default_margin() -> u32 {
    60
}

fn default_line_gap() -> u32 {
    10
}

fn default_font_size() -> f32 {
    50.0
}

fn default_font_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("arial.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/Library/Fonts/Arial.ttf"),
        PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
    ]
}

fn default_bitmap_scale() -> u32 {
    4
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            width: default_width(),
            height: default_height(),
            margin: default_margin(),
            line_gap: default_line_gap(),
            font_size: default_font_size(),
            font_paths: default_font_paths(),
            bitmap_scale: default_bitmap_scale(),
        }
    }
}

impl SlideConfig {
    /// Width available to text: canvas width minus both margins.
    pub fn text_width(&self) -> u32 {
        self.width.saturating_sub(self.margin.saturating_mul(2))
    }
}
