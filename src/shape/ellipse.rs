//! Round shapes: circles, ellipses and elliptical arcs. The position is the
//! center.

use glam::Vec2;

use super::{Shape, ShapeState};
use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{ArcGeometry, Renderer, Stroke};

/// A filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) state: ShapeState,
    pub radius: f32,
}

impl Circle {
    pub fn new(cx: f32, cy: f32, radius: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(cx, cy), color.into()),
            radius,
        }
    }
}

impl Shape for Circle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "circle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_ellipse(self.state.position, Vec2::splat(self.radius), self.state.color)
    }
}

/// A stroked circle
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineCircle {
    pub(crate) state: ShapeState,
    pub radius: f32,
    pub stroke: Stroke,
}

impl OutlineCircle {
    pub fn new(cx: f32, cy: f32, radius: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(cx, cy), color.into()),
            radius,
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Shape for OutlineCircle {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline circle"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_ellipse(
            self.state.position,
            Vec2::splat(self.radius),
            self.state.color,
            self.stroke,
        )
    }
}

/// A filled ellipse
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub(crate) state: ShapeState,
    pub radius: Vec2,
}

impl Ellipse {
    pub fn new(cx: f32, cy: f32, radius_x: f32, radius_y: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(cx, cy), color.into()),
            radius: Vec2::new(radius_x, radius_y),
        }
    }
}

impl Shape for Ellipse {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "ellipse"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.fill_ellipse(self.state.position, self.radius, self.state.color)
    }
}

/// A stroked ellipse
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEllipse {
    pub(crate) state: ShapeState,
    pub radius: Vec2,
    pub stroke: Stroke,
}

impl OutlineEllipse {
    pub fn new(cx: f32, cy: f32, radius_x: f32, radius_y: f32, color: impl Into<Color>) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(cx, cy), color.into()),
            radius: Vec2::new(radius_x, radius_y),
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl Shape for OutlineEllipse {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "outline ellipse"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        renderer.stroke_ellipse(self.state.position, self.radius, self.state.color, self.stroke)
    }
}

/// Whether an [`Arc`] is drawn as a filled pie slice or an open stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcMode {
    Fill,
    Stroke(Stroke),
}

/// A segment of an ellipse's perimeter, `sweep_angle` degrees long starting
/// at `start_angle`
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub(crate) state: ShapeState,
    pub radius: Vec2,
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub mode: ArcMode,
}

impl Arc {
    /// A stroked arc with the default stroke
    pub fn new(
        cx: f32,
        cy: f32,
        radius_x: f32,
        radius_y: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(cx, cy), color.into()),
            radius: Vec2::new(radius_x, radius_y),
            start_angle,
            sweep_angle,
            mode: ArcMode::Stroke(Stroke::default()),
        }
    }

    pub fn filled(mut self) -> Self {
        self.mode = ArcMode::Fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.mode = ArcMode::Stroke(stroke);
        self
    }

    pub fn is_filled(&self) -> bool {
        self.mode == ArcMode::Fill
    }

    pub fn geometry(&self) -> ArcGeometry {
        ArcGeometry {
            center: self.state.position,
            radius: self.radius,
            start_angle: self.start_angle,
            sweep_angle: self.sweep_angle,
        }
    }
}

impl Shape for Arc {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "arc"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        let arc = self.geometry();
        match self.mode {
            ArcMode::Fill => renderer.fill_arc(&arc, self.state.color),
            ArcMode::Stroke(stroke) => renderer.stroke_arc(&arc, self.state.color, stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingRenderer;

    #[test]
    fn circle_draws_as_ellipse_with_equal_radii() {
        let mut r = RecordingRenderer::new();
        Circle::new(200.0, 200.0, 30.0, 0x00FF00).draw(&mut r).expect("draw");
        OutlineCircle::new(5.0, 5.0, 2.0, 0x00FF00)
            .with_stroke(Stroke::new(3.0))
            .draw(&mut r)
            .expect("draw");
        assert_eq!(
            r.to_string(),
            "fillEllipse(200,200,30,30,0xFF00FF00)\n\
             strokeEllipse(5,5,2,2,0xFF00FF00,3,false)\n"
        );
    }

    #[test]
    fn arc_mode_picks_primitive() {
        let stroked = Arc::new(0.0, 0.0, 10.0, 5.0, 0.0, 90.0, 0xFF0000);
        let filled = stroked.clone().filled();
        assert!(!stroked.is_filled());
        assert!(filled.is_filled());

        let mut r = RecordingRenderer::new();
        stroked.draw(&mut r).expect("draw");
        filled.draw(&mut r).expect("draw");
        assert_eq!(
            r.to_string(),
            "strokeArc(0,0,10,5,0,90,0xFFFF0000,1,false)\n\
             fillArc(0,0,10,5,0,90,0xFFFF0000)\n"
        );
    }
}
