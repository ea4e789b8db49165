//! Axis-aligned rectangles, plain and rounded. The position is the top-left
//! corner.

use glam::Vec2;

use super::{Shape, ShapeState};
use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{Renderer, Stroke};

/// A filled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) state: ShapeState,
    pub size: Vec2,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(x, y), color.into()),
            size: Vec2::new(width, height),
        }
    }
}

impl Shape for Rectangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "rectangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_rectangle(self.state.position, self.size, self.state.color)
    }
}

/// A stroked rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineRectangle {
    pub(crate) state: ShapeState,
    pub size: Vec2,
    pub stroke: Stroke,
}

impl OutlineRectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(x, y), color.into()),
            size: Vec2::new(width, height),
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Shape for OutlineRectangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline rectangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_rectangle(self.state.position, self.size, self.state.color, self.stroke)
    }
}

/// A filled rectangle with elliptical corners
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectangle {
    pub(crate) state: ShapeState,
    pub size: Vec2,
    /// Corner radii along x and y
    pub radius: Vec2,
}

impl RoundedRectangle {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius_x: f32,
        radius_y: f32,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(x, y), color.into()),
            size: Vec2::new(width, height),
            radius: Vec2::new(radius_x, radius_y),
        }
    }
}

impl Shape for RoundedRectangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "rounded rectangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_rounded_rectangle(
            self.state.position,
            self.size,
            self.radius,
            self.state.color,
        )
    }
}

/// A stroked rectangle with elliptical corners
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineRoundedRectangle {
    pub(crate) state: ShapeState,
    pub size: Vec2,
    pub radius: Vec2,
    pub stroke: Stroke,
}

impl OutlineRoundedRectangle {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius_x: f32,
        radius_y: f32,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(x, y), color.into()),
            size: Vec2::new(width, height),
            radius: Vec2::new(radius_x, radius_y),
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Shape for OutlineRoundedRectangle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline rounded rectangle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_rounded_rectangle(
            self.state.position,
            self.size,
            self.radius,
            self.state.color,
            self.stroke,
        )
    }
}
