//! The drawing capability shapes are rendered against.
//!
//! A [`Renderer`] is an immediate-mode 2D backend: frame bracketing, fill and
//! stroke primitives, text, and a single current-transform register. Shapes
//! never cache backend resources, so every draw is a fresh primitive call.

use std::ops::{Deref, DerefMut};

use glam::Vec2;

use crate::color::Color;
use crate::errors::RenderError;
use crate::log::debug;
use crate::transform::Transform;

/// Outline parameters shared by every stroked primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub thickness: f32,
    pub rounded_caps: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            thickness: 1.0,
            rounded_caps: false,
        }
    }
}

impl Stroke {
    pub fn new(thickness: f32) -> Self {
        Stroke {
            thickness,
            rounded_caps: false,
        }
    }

    pub fn with_rounded_caps(mut self, rounded_caps: bool) -> Self {
        self.rounded_caps = rounded_caps;
        self
    }
}

/// Horizontal placement of text inside its bounding box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Elliptical arc geometry. Angles are in degrees, measured clockwise from
/// the +x axis on a y-down surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    pub center: Vec2,
    pub radius: Vec2,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcGeometry {
    /// Point on the ellipse at `angle` degrees
    pub fn point_at(&self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.center + Vec2::new(self.radius.x * cos, self.radius.y * sin)
    }

    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_angle + self.sweep_angle)
    }
}

/// One text draw: the string, where it goes and how it looks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextRun<'a> {
    pub text: &'a str,
    /// Top-left corner of the layout box
    pub origin: Vec2,
    /// Layout box width and height
    pub bounds: Vec2,
    pub font_size: f32,
    pub font_family: &'a str,
    pub alignment: TextAlignment,
    pub color: Color,
}

/// A 2D drawing backend.
///
/// Fallible calls return [`RenderError`]; the transform register is plain
/// state and cannot fail.
pub trait Renderer {
    fn begin_frame(&mut self) -> Result<(), RenderError>;

    /// Commit the frame to the target
    fn end_frame(&mut self) -> Result<(), RenderError>;

    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    fn fill_rectangle(&mut self, origin: Vec2, size: Vec2, color: Color)
    -> Result<(), RenderError>;

    fn stroke_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    fn fill_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
    ) -> Result<(), RenderError>;

    fn stroke_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    fn fill_ellipse(&mut self, center: Vec2, radius: Vec2, color: Color)
    -> Result<(), RenderError>;

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    /// Fill a closed polygon. Callers pass at least three points.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> Result<(), RenderError>;

    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    /// Fill the pie slice bounded by the arc and its center
    fn fill_arc(&mut self, arc: &ArcGeometry, color: Color) -> Result<(), RenderError>;

    fn stroke_arc(
        &mut self,
        arc: &ArcGeometry,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError>;

    fn draw_text(&mut self, run: &TextRun<'_>) -> Result<(), RenderError>;

    /// The current transform register
    fn transform(&self) -> Transform;

    fn set_transform(&mut self, transform: Transform);
}

/// Scoped replacement of a renderer's transform.
///
/// Creating the guard saves the current transform and installs a new one;
/// dropping it puts the saved transform back. Drop runs on normal exit, on
/// `?` early returns and while unwinding, so a failing primitive cannot
/// leave the register corrupted for the shapes drawn after it.
pub struct TransformGuard<'r> {
    renderer: &'r mut dyn Renderer,
    saved: Transform,
}

impl<'r> TransformGuard<'r> {
    pub fn replace(renderer: &'r mut dyn Renderer, transform: Transform) -> Self {
        let saved = renderer.transform();
        debug!(?transform, "installing shape transform");
        renderer.set_transform(transform);
        TransformGuard { renderer, saved }
    }

    /// The transform that will be restored on drop
    pub fn saved(&self) -> Transform {
        self.saved
    }
}

impl<'r> Deref for TransformGuard<'r> {
    type Target = dyn Renderer + 'r;

    fn deref(&self) -> &Self::Target {
        &*self.renderer
    }
}

impl DerefMut for TransformGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.renderer
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        self.renderer.set_transform(self.saved);
    }
}
