use glam::Vec2;

use super::{Shape, ShapeState};
use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{Renderer, Stroke};

/// A straight segment from the shape's position to a second endpoint.
///
/// The second endpoint is kept relative to the position, so moving the line
/// moves both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub(crate) state: ShapeState,
    delta: Vec2,
    pub stroke: Stroke,
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, color: impl Into<Color>) -> Self {
        let start = Vec2::new(x1, y1);
        Self {
            state: ShapeState::new(start, color.into()),
            delta: Vec2::new(x2, y2) - start,
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn start(&self) -> Vec2 {
        self.state.position
    }

    pub fn end(&self) -> Vec2 {
        self.state.position + self.delta
    }

    /// Move the second endpoint, leaving the first in place
    pub fn set_end(&mut self, x2: f32, y2: f32) {
        self.delta = Vec2::new(x2, y2) - self.state.position;
    }

    pub fn length(&self) -> f32 {
        self.delta.length()
    }
}

impl Shape for Line {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "line"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_line(self.start(), self.end(), self.state.color, self.stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingRenderer;

    #[test]
    fn moving_a_line_moves_both_ends() {
        let mut line = Line::new(0.0, 0.0, 30.0, 40.0, 0xFF0000);
        assert_eq!(line.length(), 50.0);
        line.move_by(10.0, 10.0);
        assert_eq!(line.start(), Vec2::new(10.0, 10.0));
        assert_eq!(line.end(), Vec2::new(40.0, 50.0));

        line.set_end(10.0, 0.0);
        assert_eq!(line.end(), Vec2::new(10.0, 0.0));
        assert_eq!(line.start(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn line_draws_one_stroke() {
        let line = Line::new(1.0, 2.0, 3.0, 4.0, 0xFF0000)
            .with_stroke(Stroke::new(2.0).with_rounded_caps(true));
        let mut r = RecordingRenderer::new();
        line.draw(&mut r).expect("draw");
        assert_eq!(r.to_string(), "strokeLine(1,2,3,4,0xFFFF0000,2,true)\n");
    }
}
