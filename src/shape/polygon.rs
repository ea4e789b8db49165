//! Point-list shapes: free polygons and triangles.
//!
//! A polygon's position is its offset: every stored point is shifted by it
//! at draw time. Filling or stroking needs at least three points; with fewer
//! the draw reports [`DrawStatus::Degenerate`](super::DrawStatus) and sends
//! nothing to the renderer.

use glam::Vec2;

use super::{Shape, ShapeState};
use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{Renderer, Stroke};

/// Minimum number of points for a fillable polygon
pub const MIN_POLYGON_POINTS: usize = 3;

fn placed(points: &[Vec2], offset: Vec2) -> Vec<Vec2> {
    points.iter().map(|p| *p + offset).collect()
}

fn too_few(points: &[Vec2]) -> Option<usize> {
    (points.len() < MIN_POLYGON_POINTS).then_some(points.len())
}

/// A filled polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) state: ShapeState,
    pub points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Vec2>, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::ZERO, color.into()),
            points: points.into_iter().collect(),
        }
    }

    /// Set the offset added to every point
    pub fn with_offset(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.state.position = Vec2::new(x_offset, y_offset);
        self
    }

    pub fn offset(&self) -> Vec2 {
        self.state.position
    }

    pub fn push_point(&mut self, x: f32, y: f32) {
        self.points.push(Vec2::new(x, y));
    }

    /// Points with the offset applied
    pub fn placed_points(&self) -> Vec<Vec2> {
        placed(&self.points, self.state.position)
    }
}

impl Shape for Polygon {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "polygon"
    }

    fn degenerate(&self) -> Option<usize> {
        too_few(&self.points)
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_polygon(&self.placed_points(), self.state.color)
    }
}

/// A stroked, closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct OutlinePolygon {
    pub(crate) state: ShapeState,
    pub points: Vec<Vec2>,
    pub stroke: Stroke,
}

impl OutlinePolygon {
    pub fn new(points: impl IntoIterator<Item = Vec2>, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::ZERO, color.into()),
            points: points.into_iter().collect(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_offset(mut self, x_offset: f32, y_offset: f32) -> Self {
        self.state.position = Vec2::new(x_offset, y_offset);
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn offset(&self) -> Vec2 {
        self.state.position
    }

    pub fn push_point(&mut self, x: f32, y: f32) {
        self.points.push(Vec2::new(x, y));
    }

    pub fn placed_points(&self) -> Vec<Vec2> {
        placed(&self.points, self.state.position)
    }
}

impl Shape for OutlinePolygon {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline polygon"
    }

    fn degenerate(&self) -> Option<usize> {
        too_few(&self.points)
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_polygon(&self.placed_points(), self.state.color, self.stroke)
    }
}

/// Three vertices; the first one is the shape's position and the other two
/// follow it when the triangle moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub(crate) state: ShapeState,
    rest: [Vec2; 2],
}

impl Triangle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: impl Into<Color>,
    ) -> Self {
        let first = Vec2::new(x1, y1);
        Self {
            state: ShapeState::new(first, color.into()),
            rest: [Vec2::new(x2, y2) - first, Vec2::new(x3, y3) - first],
        }
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        let p = self.state.position;
        [p, p + self.rest[0], p + self.rest[1]]
    }
}

impl Shape for Triangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "triangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_polygon(&self.vertices(), self.state.color)
    }
}

/// A stroked triangle
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineTriangle {
    pub(crate) state: ShapeState,
    rest: [Vec2; 2],
    pub stroke: Stroke,
}

impl OutlineTriangle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        color: impl Into<Color>,
    ) -> Self {
        let first = Vec2::new(x1, y1);
        Self {
            state: ShapeState::new(first, color.into()),
            rest: [Vec2::new(x2, y2) - first, Vec2::new(x3, y3) - first],
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        let p = self.state.position;
        [p, p + self.rest[0], p + self.rest[1]]
    }
}

impl Shape for OutlineTriangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline triangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_polygon(&self.vertices(), self.state.color, self.stroke)
    }
}
