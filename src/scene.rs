//! Scene: an ordered collection of shapes drawn as one frame
//!
//! Insertion order is draw order. Later shapes paint over earlier ones, so
//! the index of a shape is its z-order.

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::errors::{RenderError, SceneError};
use crate::log::{debug, warn};
use crate::renderer::Renderer;
use crate::shape::{AnyShape, DrawStatus, Shape, TransformPolicy};

/// Per-scene drawing settings
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneConfig {
    /// Cleared to at the start of every frame when set
    pub background: Option<Color>,
    pub transform_policy: TransformPolicy,
}

impl SceneConfig {
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into().normalized());
        self
    }

    pub fn with_transform_policy(mut self, policy: TransformPolicy) -> Self {
        self.transform_policy = policy;
        self
    }
}

/// What happened to the shapes of one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub drawn: usize,
    pub hidden: usize,
    pub degenerate: usize,
}

impl FrameReport {
    fn record(&mut self, status: DrawStatus) {
        match status {
            DrawStatus::Drawn => self.drawn += 1,
            DrawStatus::Hidden => self.hidden += 1,
            DrawStatus::Degenerate { .. } => self.degenerate += 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<AnyShape>,
    config: SceneConfig,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Scene {
            shapes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SceneConfig {
        &mut self.config
    }

    /// Append a shape on top of everything else. Returns its index.
    pub fn add_shape(&mut self, shape: impl Into<AnyShape>) -> usize {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    /// Insert a shape at `index`, shifting later shapes up one slot.
    /// `index == len()` appends.
    pub fn insert_shape(
        &mut self,
        index: usize,
        shape: impl Into<AnyShape>,
    ) -> Result<(), SceneError> {
        let len = self.shapes.len();
        if index > len {
            return Err(SceneError::IndexOutOfBounds { index, len });
        }
        self.shapes.insert(index, shape.into());
        debug!(index, "inserted shape");
        Ok(())
    }

    /// Remove and return the shape at `index`
    pub fn remove_shape(&mut self, index: usize) -> Result<AnyShape, SceneError> {
        let len = self.shapes.len();
        if index >= len {
            return Err(SceneError::IndexOutOfBounds { index, len });
        }
        let shape = self.shapes.remove(index);
        debug!(index, kind = shape.kind_name(), "removed shape");
        Ok(shape)
    }

    pub fn get(&self, index: usize) -> Option<&AnyShape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnyShape> {
        self.shapes.get_mut(index)
    }

    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyShape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AnyShape> {
        self.shapes.iter_mut()
    }

    /// Draw every shape, in order, inside one frame.
    ///
    /// If `begin_frame` fails nothing else is called on the renderer. Once
    /// the frame has begun, `end_frame` is called exactly once, also when a
    /// shape panics. The first drawing error stops the traversal and is
    /// returned in preference to an error from `end_frame`.
    pub fn draw(&self, renderer: &mut dyn Renderer) -> Result<FrameReport, SceneError> {
        let mut frame = FrameGuard::begin(renderer).map_err(SceneError::BeginFrame)?;
        debug!(shapes = self.shapes.len(), "frame begun");

        let drawn = self.draw_shapes(&mut *frame);
        let ended = frame.end();

        let report = drawn?;
        ended.map_err(SceneError::EndFrame)?;
        debug!(
            drawn = report.drawn,
            hidden = report.hidden,
            degenerate = report.degenerate,
            "frame ended"
        );
        Ok(report)
    }

    fn draw_shapes(&self, renderer: &mut dyn Renderer) -> Result<FrameReport, SceneError> {
        if let Some(background) = self.config.background {
            renderer
                .clear(background.normalized())
                .map_err(SceneError::Clear)?;
        }

        let mut report = FrameReport::default();
        for (index, shape) in self.shapes.iter().enumerate() {
            let status = shape
                .draw_with(renderer, self.config.transform_policy)
                .map_err(|source: RenderError| SceneError::Draw { index, source })?;
            report.record(status);
        }
        Ok(report)
    }
}

/// An open frame. Dropping it without [`FrameGuard::end`] ends the frame
/// anyway, which is what happens when a shape panics mid-traversal.
struct FrameGuard<'r> {
    renderer: &'r mut dyn Renderer,
    open: bool,
}

impl<'r> FrameGuard<'r> {
    fn begin(renderer: &'r mut dyn Renderer) -> Result<Self, RenderError> {
        renderer.begin_frame()?;
        Ok(FrameGuard {
            renderer,
            open: true,
        })
    }

    fn end(mut self) -> Result<(), RenderError> {
        self.open = false;
        self.renderer.end_frame()
    }
}

impl<'r> Deref for FrameGuard<'r> {
    type Target = dyn Renderer + 'r;

    fn deref(&self) -> &Self::Target {
        &*self.renderer
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.renderer
    }
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        if self.open && self.renderer.end_frame().is_err() {
            warn!("end_frame failed while unwinding");
        }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a AnyShape;
    type IntoIter = std::slice::Iter<'a, AnyShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl FromIterator<AnyShape> for Scene {
    fn from_iter<I: IntoIterator<Item = AnyShape>>(iter: I) -> Self {
        Scene {
            shapes: iter.into_iter().collect(),
            config: SceneConfig::default(),
        }
    }
}

impl Extend<AnyShape> for Scene {
    fn extend<I: IntoIterator<Item = AnyShape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}
