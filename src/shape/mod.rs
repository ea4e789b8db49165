//! Shape types for the scene graph
//!
//! Each shape kind is its own type that knows how to issue its renderer
//! primitives. Everything else (position, color, visibility, the local
//! transform and the save/install/restore dance around drawing) lives in
//! [`ShapeState`] and the provided methods of [`Shape`], so kinds only
//! implement geometry.
//!
//! - `rect`: rectangles and rounded rectangles
//! - `ellipse`: circles, ellipses and arcs
//! - `line`: straight lines
//! - `polygon`: polygons and triangles
//! - `text`: text with optional shadow and outline passes

mod ellipse;
mod line;
mod polygon;
mod rect;
mod text;

pub use ellipse::{Arc, ArcMode, Circle, Ellipse, OutlineCircle, OutlineEllipse};
pub use line::Line;
pub use polygon::{OutlinePolygon, OutlineTriangle, Polygon, Triangle};
pub use rect::{OutlineRectangle, OutlineRoundedRectangle, Rectangle, RoundedRectangle};
pub use text::{OutlineReach, Text, TextOutline, TextShadow};

use enum_dispatch::enum_dispatch;
use glam::Vec2;

use crate::color::Color;
use crate::errors::RenderError;
use crate::log::warn;
use crate::renderer::{Renderer, TransformGuard};
use crate::transform::Transform;

/// State shared by every shape kind
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeState {
    pub position: Vec2,
    /// Always normalized; written through [`ShapeState::new`] and
    /// [`Shape::set_color`] only
    pub(crate) color: Color,
    pub visible: bool,
    /// `None` draws with the renderer's transform untouched
    pub transform: Option<Transform>,
}

impl ShapeState {
    pub fn new(position: Vec2, color: Color) -> Self {
        ShapeState {
            position,
            color: color.normalized(),
            visible: true,
            transform: None,
        }
    }
}

/// Outcome of a successful [`Shape::draw`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawStatus {
    Drawn,
    /// The shape is invisible; nothing was sent to the renderer
    Hidden,
    /// The geometry cannot be drawn yet (a polygon with fewer than three
    /// points); nothing was sent to the renderer
    Degenerate { points: usize },
}

impl DrawStatus {
    /// `false` only for degenerate geometry
    pub fn is_success(self) -> bool {
        !matches!(self, DrawStatus::Degenerate { .. })
    }
}

/// How a shape's local transform meets the renderer's ambient transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransformPolicy {
    /// Install the shape's transform as-is, discarding the ambient one for
    /// the duration of the draw.
    #[default]
    Replace,
    /// Install `local.then(ambient)`: the shape's transform is applied first,
    /// then whatever the renderer already had.
    Compose,
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    fn state(&self) -> &ShapeState;

    fn state_mut(&mut self) -> &mut ShapeState;

    /// Lowercase kind name, for logs and debugging
    fn kind_name(&self) -> &'static str;

    /// Issue this shape's renderer primitives. Called by [`Shape::draw`]
    /// with the shape's transform already installed.
    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError>;

    /// Point count when the geometry is not drawable
    fn degenerate(&self) -> Option<usize> {
        None
    }

    /// Draw with [`TransformPolicy::Replace`].
    fn draw(&self, renderer: &mut dyn Renderer) -> Result<DrawStatus, RenderError> {
        self.draw_with(renderer, TransformPolicy::Replace)
    }

    /// Draw this shape.
    ///
    /// The renderer's transform is the same after this returns as before,
    /// whether the primitives succeeded, failed or panicked.
    fn draw_with(
        &self,
        renderer: &mut dyn Renderer,
        policy: TransformPolicy,
    ) -> Result<DrawStatus, RenderError> {
        let state = self.state();
        if !state.visible {
            return Ok(DrawStatus::Hidden);
        }
        if let Some(points) = self.degenerate() {
            warn!(kind = self.kind_name(), points, "not enough points to draw");
            return Ok(DrawStatus::Degenerate { points });
        }

        match state.transform.filter(|t| !t.is_identity()) {
            Some(local) => {
                let installed = match policy {
                    TransformPolicy::Replace => local,
                    TransformPolicy::Compose => local.then(&renderer.transform()),
                };
                let mut guard = TransformGuard::replace(renderer, installed);
                self.render(&mut *guard)?;
            }
            None => self.render(renderer)?,
        }
        Ok(DrawStatus::Drawn)
    }

    fn position(&self) -> Vec2 {
        self.state().position
    }

    fn color(&self) -> Color {
        self.state().color
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    fn transform(&self) -> Option<Transform> {
        self.state().transform
    }

    /// Shift the position. Does not touch the transform.
    fn move_by(&mut self, dx: f32, dy: f32) {
        self.state_mut().position += Vec2::new(dx, dy);
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.state_mut().position = Vec2::new(x, y);
    }

    fn set_color(&mut self, color: Color) {
        self.state_mut().color = color.normalized();
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    /// Rotate about the shape's position, replacing any previous transform.
    fn rotate(&mut self, angle: f32) {
        let pivot = self.position();
        self.rotate_about(angle, pivot);
    }

    fn rotate_about(&mut self, angle: f32, pivot: Vec2) {
        self.state_mut().transform = Some(Transform::rotation_about(angle, pivot));
    }

    /// Scale about the shape's position, replacing any previous transform.
    /// `sy` defaults to `sx`.
    fn scale(&mut self, sx: f32, sy: Option<f32>) {
        let pivot = self.position();
        self.scale_about(sx, sy.unwrap_or(sx), pivot);
    }

    fn scale_about(&mut self, sx: f32, sy: f32, pivot: Vec2) {
        self.state_mut().transform = Some(Transform::scaling_about(sx, sy, pivot));
    }

    /// Replace the transform with a pure translation. Unlike
    /// [`Shape::move_by`] the position stays where it is, so calling both
    /// displaces the shape twice.
    fn translate(&mut self, dx: f32, dy: f32) {
        self.state_mut().transform = Some(Transform::translation(dx, dy));
    }

    fn set_transform(&mut self, transform: Option<Transform>) {
        self.state_mut().transform = transform;
    }

    fn reset_transform(&mut self) {
        self.state_mut().transform = None;
    }
}

/// Any shape kind, as stored in a [`Scene`](crate::Scene)
#[enum_dispatch(Shape)]
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Rectangle,
    OutlineRectangle,
    RoundedRectangle,
    OutlineRoundedRectangle,
    Circle,
    OutlineCircle,
    Ellipse,
    OutlineEllipse,
    Line,
    Polygon,
    OutlinePolygon,
    Triangle,
    OutlineTriangle,
    Arc,
    Text,
}
