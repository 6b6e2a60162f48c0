//! Mapping from font units to CSS pixels.
//!
//! The model is a single glyph set in a square flex container with
//! `align-items: center; justify-content: center; line-height: 1`. The
//! glyph's advance box is centered horizontally and the line box, whose
//! height is the font size, is centered vertically. Inside the line box the
//! content area (ascent plus descent) is centered by the half-leading, which
//! may be negative.

use crate::path::Point;

/// Size of the container and the rendered text, in pixels.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Layout {
    /// Width and height of the square container.
    pub container_size: f64,
    /// CSS `font-size` of the rendered character.
    pub font_size: f64,
}

impl Layout {
    pub const DEFAULT_CONTAINER_SIZE: f64 = 300.0;
    pub const DEFAULT_FONT_SIZE: f64 = 250.0;

    pub const fn new(container_size: f64, font_size: f64) -> Self {
        Self {
            container_size,
            font_size,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONTAINER_SIZE, Self::DEFAULT_FONT_SIZE)
    }
}

/// The font and glyph metrics that position a glyph, in font units.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FontMetrics {
    pub units_per_em: u16,
    /// `hhea` ascender.
    pub ascent: f64,
    /// `hhea` descender, usually negative.
    pub descent: f64,
    /// Advance width of the glyph being placed.
    pub advance_width: f64,
}

/// Affine map from font units to container pixels.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform {
    pub scale: f64,
    pub x_offset: f64,
    pub baseline_y: f64,
}

impl Transform {
    pub fn new(metrics: &FontMetrics, layout: &Layout) -> Self {
        let scale = layout.font_size / metrics.units_per_em as f64;

        let rendered_width = metrics.advance_width * scale;
        let x_offset = (layout.container_size - rendered_width) / 2.0;

        let content_height = (metrics.ascent - metrics.descent) * scale;
        let half_leading = (layout.font_size - content_height) / 2.0;
        let line_box_top = (layout.container_size - layout.font_size) / 2.0;
        let baseline_y = line_box_top + half_leading + metrics.ascent * scale;

        Self {
            scale,
            x_offset,
            baseline_y,
        }
    }

    /// Maps a point in font units to container pixels, rounded to one
    /// decimal place.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            round1(self.x_offset + point.x * self.scale),
            round1(self.baseline_y - point.y * self.scale),
        )
    }
}

/// Rounds to one decimal place.
///
/// The decision is made on the exact binary value, and exact ties go to
/// the even digit, so `50.25` becomes `50.2` and `50.75` becomes `50.8`.
pub fn round1(value: f64) -> f64 {
    // float formatting rounds the exact value, halves to even
    format!("{value:.1}").parse().unwrap_or(value)
}
