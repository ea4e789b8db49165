//! A retained-mode 2D scene graph.
//!
//! Shapes carry a position, a color, a visibility flag and an optional local
//! transform. A [`Scene`] keeps them in draw order and, once per frame, asks
//! each to issue primitives against a [`Renderer`]. The renderer is a trait,
//! so the same scene can drive a GPU surface, the [`SvgRenderer`] or the
//! [`RecordingRenderer`] used in tests.
//!
//! ```
//! use scenery::{Circle, RecordingRenderer, Rectangle, Scene};
//!
//! let mut scene = Scene::new();
//! scene.add_shape(Rectangle::new(0.0, 0.0, 100.0, 50.0, 0xFF0000));
//! scene.add_shape(Circle::new(200.0, 200.0, 30.0, 0x00FF00));
//!
//! let mut renderer = RecordingRenderer::new();
//! let report = scene.draw(&mut renderer)?;
//! assert_eq!(report.drawn, 2);
//! # Ok::<(), scenery::SceneError>(())
//! ```

pub mod color;
pub mod errors;
mod log;
pub mod recording;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod svg;
pub mod transform;

pub use color::Color;
pub use errors::{ColorParseError, RenderError, SceneError};
pub use recording::{Command, RecordingRenderer};
pub use renderer::{ArcGeometry, Renderer, Stroke, TextAlignment, TextRun, TransformGuard};
pub use scene::{FrameReport, Scene, SceneConfig};
pub use shape::{
    AnyShape, Arc, ArcMode, Circle, DrawStatus, Ellipse, Line, OutlineCircle, OutlineEllipse,
    OutlinePolygon, OutlineReach, OutlineRectangle, OutlineRoundedRectangle, OutlineTriangle,
    Polygon, Rectangle, RoundedRectangle, Shape, ShapeState, Text, TextOutline, TextShadow,
    TransformPolicy, Triangle,
};
pub use svg::{SvgOptions, SvgRenderer};
pub use transform::Transform;

pub use glam;
