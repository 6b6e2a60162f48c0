use skrifa::outline::OutlinePen;

use crate::path::{PathCommand, Point};

/// Pen that records an outline as a sequence of [`PathCommand`]s.
///
/// Used for outlines that are not read straight from `glyf`, such as CFF
/// glyphs and composites. Every callback becomes one command.
#[derive(Default, Debug)]
pub struct RecordingPen {
    commands: Vec<PathCommand>,
}

impl RecordingPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl OutlinePen for RecordingPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::Move {
            point: (x, y).into(),
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::Line {
            point: (x, y).into(),
        });
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadCurve {
            points: vec![Point::from((cx0, cy0)), Point::from((x, y))],
        });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicCurve {
            points: vec![(cx0, cy0).into(), (cx1, cy1).into(), (x, y).into()],
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
