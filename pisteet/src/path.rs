//! Points and path commands.

use serde::{ser::SerializeTuple, Serialize, Serializer};

/// A two dimensional point.
///
/// Depending on context, the coordinates are either in font units (y up)
/// or in container pixels (y down).
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

/// Points serialize as `[x, y]`.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.x)?;
        tuple.serialize_element(&self.y)?;
        tuple.end()
    }
}

/// Single element of a glyph path.
///
/// Curves carry their off-curve control points followed by the final
/// on-curve point, so `points` is never empty.
#[derive(Clone, PartialEq, Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PathCommand {
    /// Begin a new contour at `point`.
    Move { point: Point },
    /// Draw a straight line to `point`.
    Line { point: Point },
    /// Draw a run of quadratic segments.
    ///
    /// Consecutive off-curve points imply an on-curve point halfway
    /// between them, as in TrueType outlines.
    #[serde(rename = "qcurve")]
    QuadCurve { points: Vec<Point> },
    /// Draw a cubic bezier.
    #[serde(rename = "curve")]
    CubicCurve { points: Vec<Point> },
    /// Close the current contour.
    Close,
}

impl PathCommand {
    /// Returns the on-curve point this command ends at.
    ///
    /// This is `None` for [`PathCommand::Close`].
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::Move { point } | Self::Line { point } => Some(*point),
            Self::QuadCurve { points } | Self::CubicCurve { points } => points.last().copied(),
            Self::Close => None,
        }
    }

    /// Returns a copy of this command with `f` applied to every point,
    /// control points included.
    pub fn map_points(&self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            Self::Move { point } => Self::Move { point: f(*point) },
            Self::Line { point } => Self::Line { point: f(*point) },
            Self::QuadCurve { points } => Self::QuadCurve {
                points: points.iter().copied().map(f).collect(),
            },
            Self::CubicCurve { points } => Self::CubicCurve {
                points: points.iter().copied().map(f).collect(),
            },
            Self::Close => Self::Close,
        }
    }
}
