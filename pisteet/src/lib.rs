//! Glyph outline points in CSS pixel space.
//!
//! Given a font and a character, this crate loads the glyph outline and maps
//! every point into the coordinate space of a square container in which the
//! character is rendered by a browser, centered with flexbox at a fixed
//! font size. The resulting coordinates line up with the painted glyph, so
//! they can be used to overlay stroke order or vertex annotations.
//!
//! On-curve vertices are deduplicated and labeled `A`, `B`, ... in drawing
//! order.
//!
//! ```no_run
//! use pisteet::{FontFile, Layout};
//!
//! let file = FontFile::open("fonts/KleeOne-SemiBold.ttf")?;
//! if let Some(glyph) = file.font(0)?.extract('山', &Layout::default())? {
//!     for point in &glyph.points {
//!         println!("{}: ({}, {})", point.id, point.x, point.y);
//!     }
//! }
//! # Ok::<(), pisteet::Error>(())
//! ```

mod error;
mod extract;
mod font;
mod glyf;
mod layout;
mod path;
mod pen;

#[cfg(test)]
mod testing;

use std::path::Path;

pub use error::Error;
pub use extract::{label_points, point_label, split_contours, Contour, GlyphPoints, LabeledPoint};
pub use font::{FontFile, GlyphFont};
pub use layout::{round1, FontMetrics, Layout, Transform};
pub use path::{PathCommand, Point};
pub use pen::RecordingPen;

/// Opens the font at `path`, extracts `ch` from the face at `index` and
/// releases the font again.
///
/// Returns `Ok(None)` when the font does not map `ch`.
pub fn extract_glyph_points(
    path: impl AsRef<Path>,
    index: usize,
    ch: char,
    layout: &Layout,
) -> Result<Option<GlyphPoints>, Error> {
    let file = FontFile::open(path)?;
    let font = file.font(index)?;
    font.extract(ch, layout)
}
