//! Regrouping transformed outlines into contours and labeling vertices.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    layout::{Layout, Transform},
    path::{PathCommand, Point},
};

/// One closed sub-path of a glyph, in container pixels.
///
/// Always begins with [`PathCommand::Move`] and never contains
/// [`PathCommand::Close`].
pub type Contour = Vec<PathCommand>;

/// A labeled on-curve vertex.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct LabeledPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// The outline of one character mapped into container pixels.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct GlyphPoints {
    #[serde(rename = "kanji")]
    pub character: char,
    pub container_size: f64,
    pub font_size: f64,
    #[serde(rename = "contours_count")]
    pub contour_count: usize,
    pub total_points: usize,
    /// Distinct on-curve vertices in first-seen order.
    pub points: Vec<LabeledPoint>,
    pub contours: Vec<Contour>,
}

impl GlyphPoints {
    /// Builds the result from the glyph's commands in font units.
    pub fn new(
        character: char,
        commands: &[PathCommand],
        transform: &Transform,
        layout: &Layout,
    ) -> Self {
        let contours = split_contours(commands, transform);
        let points = label_points(&contours);
        log::trace!(
            "'{character}': {} contours, {} distinct vertices",
            contours.len(),
            points.len()
        );
        Self {
            character,
            container_size: layout.container_size,
            font_size: layout.font_size,
            contour_count: contours.len(),
            total_points: points.len(),
            points,
            contours,
        }
    }

    /// Returns the on-curve point of every move, line and curve in drawing
    /// order.
    ///
    /// Repeated coordinates appear once per occurrence.
    pub fn outline(&self) -> Vec<Point> {
        self.contours
            .iter()
            .flatten()
            .filter_map(PathCommand::end_point)
            .collect()
    }
}

/// Transforms `commands` and splits them into contours.
///
/// A move starts a new contour and a close ends the current one. Empty
/// contours are dropped.
pub fn split_contours(commands: &[PathCommand], transform: &Transform) -> Vec<Contour> {
    let mut contours = vec![];
    let mut current = Contour::new();
    for command in commands {
        match command {
            PathCommand::Move { .. } => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
                current.push(command.map_points(|p| transform.apply(p)));
            }
            PathCommand::Close => {
                if !current.is_empty() {
                    contours.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(command.map_points(|p| transform.apply(p))),
        }
    }
    if !current.is_empty() {
        contours.push(current);
    }
    contours
}

/// Assigns an identifier to each distinct on-curve point of `contours`.
///
/// Control points are skipped. Points that are equal after rounding share
/// the identifier of their first occurrence.
pub fn label_points(contours: &[Contour]) -> Vec<LabeledPoint> {
    let mut seen = HashSet::new();
    let mut labeled = vec![];
    for point in contours.iter().flatten().filter_map(PathCommand::end_point) {
        if !seen.insert((point.x.to_bits(), point.y.to_bits())) {
            continue;
        }
        labeled.push(LabeledPoint {
            id: point_label(labeled.len()),
            x: point.x,
            y: point.y,
        });
    }
    labeled
}

/// Returns the identifier of the point at `index` in first-seen order.
///
/// The first 26 points are named `A` through `Z`; later points are `P`
/// followed by their index.
pub fn point_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => format!("P{index}"),
    }
}
