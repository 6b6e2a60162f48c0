//! Path commands read straight from simple `glyf` glyphs.
//!
//! Drawing through skrifa yields one quadratic segment per off-curve point.
//! Here each contour is walked over its stored points instead, so a run of
//! off-curve points between two on-curve points stays a single
//! [`PathCommand::QuadCurve`] and only stored on-curve points become
//! segment end points.

use skrifa::raw::{
    tables::glyf::{CurvePoint, SimpleGlyph},
    ReadError,
};

use crate::path::{PathCommand, Point};

/// Returns the commands for the contours of `glyph`.
///
/// Each contour starts with a move to its first on-curve point. Every
/// following on-curve point ends a line, or a quad run when off-curve
/// points precede it. The segment that returns to the start is omitted
/// when it is a line and kept when it is a curve. Every contour ends with
/// [`PathCommand::Close`].
///
/// `x_shift` is added to every x coordinate.
pub fn simple_glyph_commands(
    glyph: &SimpleGlyph,
    x_shift: i32,
) -> Result<Vec<PathCommand>, ReadError> {
    let points: Vec<CurvePoint> = glyph.points().collect();
    let mut commands = vec![];
    let mut start = 0;
    for end in glyph.end_pts_of_contours() {
        let end = end.get() as usize + 1;
        let contour = points
            .get(start..end)
            .ok_or(ReadError::MalformedData("bad contour end point"))?;
        push_contour(contour, x_shift, &mut commands);
        start = end;
    }
    Ok(commands)
}

fn push_contour(contour: &[CurvePoint], x_shift: i32, commands: &mut Vec<PathCommand>) {
    let to_point = |p: &CurvePoint| Point::new((p.x as i32 + x_shift) as f64, p.y as f64);

    let Some(first_on) = contour.iter().position(|p| p.on_curve) else {
        // No stored on-curve point: start at the one implied between the
        // last and first control points and close with a single quad run.
        let (Some(first), Some(last)) = (contour.first(), contour.last()) else {
            return;
        };
        let (first, last) = (to_point(first), to_point(last));
        let start = Point::new((first.x + last.x) / 2.0, (first.y + last.y) / 2.0);
        let mut points: Vec<Point> = contour.iter().map(to_point).collect();
        points.push(start);
        commands.push(PathCommand::Move { point: start });
        commands.push(PathCommand::QuadCurve { points });
        commands.push(PathCommand::Close);
        return;
    };

    commands.push(PathCommand::Move {
        point: to_point(&contour[first_on]),
    });
    let mut controls = vec![];
    // every point after the start, wrapping around to end on it
    let rest = contour.iter().cycle().skip(first_on + 1).take(contour.len());
    for (i, p) in rest.enumerate() {
        let point = to_point(p);
        if !p.on_curve {
            controls.push(point);
        } else if !controls.is_empty() {
            controls.push(point);
            commands.push(PathCommand::QuadCurve {
                points: std::mem::take(&mut controls),
            });
        } else if i + 1 < contour.len() {
            commands.push(PathCommand::Line { point });
        }
    }
    commands.push(PathCommand::Close);
}
