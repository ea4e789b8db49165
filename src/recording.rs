//! A renderer that records calls instead of drawing.
//!
//! [`RecordingRenderer`] keeps every call as a [`Command`] in a display
//! list, remembers each value written to the transform register, and can be
//! told to fail (or panic) at a chosen point. Its `Display` output is one
//! call per line in a compact `name(args)` form, which keeps call-sequence
//! assertions short.

use std::fmt;

use glam::Vec2;

use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{ArcGeometry, Renderer, Stroke, TextAlignment, TextRun};
use crate::transform::Transform;

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginFrame,
    EndFrame,
    Clear {
        color: Color,
    },
    FillRectangle {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRectangle {
        origin: Vec2,
        size: Vec2,
        color: Color,
        stroke: Stroke,
    },
    FillRoundedRectangle {
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
    },
    StrokeRoundedRectangle {
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    },
    FillEllipse {
        center: Vec2,
        radius: Vec2,
        color: Color,
    },
    StrokeEllipse {
        center: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Color,
        stroke: Stroke,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    StrokePolygon {
        points: Vec<Vec2>,
        color: Color,
        stroke: Stroke,
    },
    FillArc {
        arc: ArcGeometry,
        color: Color,
    },
    StrokeArc {
        arc: ArcGeometry,
        color: Color,
        stroke: Stroke,
    },
    DrawText {
        text: String,
        origin: Vec2,
        bounds: Vec2,
        font_size: f32,
        font_family: String,
        alignment: TextAlignment,
        color: Color,
    },
    SetTransform(Transform),
}

impl Command {
    /// Shape primitives: fills, strokes and text
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            Command::BeginFrame
                | Command::EndFrame
                | Command::Clear { .. }
                | Command::SetTransform(_)
        )
    }
}

struct Points<'a>(&'a [Vec2]);

impl fmt::Display for Points<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "({},{})", p.x, p.y)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::BeginFrame => write!(f, "beginFrame()"),
            Command::EndFrame => write!(f, "endFrame()"),
            Command::Clear { color } => write!(f, "clear({color})"),
            Command::FillRectangle { origin, size, color } => write!(
                f,
                "fillRectangle({},{},{},{},{color})",
                origin.x, origin.y, size.x, size.y
            ),
            Command::StrokeRectangle {
                origin,
                size,
                color,
                stroke,
            } => write!(
                f,
                "strokeRectangle({},{},{},{},{color},{},{})",
                origin.x, origin.y, size.x, size.y, stroke.thickness, stroke.rounded_caps
            ),
            Command::FillRoundedRectangle {
                origin,
                size,
                radius,
                color,
            } => write!(
                f,
                "fillRoundedRectangle({},{},{},{},{},{},{color})",
                origin.x, origin.y, size.x, size.y, radius.x, radius.y
            ),
            Command::StrokeRoundedRectangle {
                origin,
                size,
                radius,
                color,
                stroke,
            } => write!(
                f,
                "strokeRoundedRectangle({},{},{},{},{},{},{color},{},{})",
                origin.x,
                origin.y,
                size.x,
                size.y,
                radius.x,
                radius.y,
                stroke.thickness,
                stroke.rounded_caps
            ),
            Command::FillEllipse {
                center,
                radius,
                color,
            } => write!(
                f,
                "fillEllipse({},{},{},{},{color})",
                center.x, center.y, radius.x, radius.y
            ),
            Command::StrokeEllipse {
                center,
                radius,
                color,
                stroke,
            } => write!(
                f,
                "strokeEllipse({},{},{},{},{color},{},{})",
                center.x, center.y, radius.x, radius.y, stroke.thickness, stroke.rounded_caps
            ),
            Command::StrokeLine {
                from,
                to,
                color,
                stroke,
            } => write!(
                f,
                "strokeLine({},{},{},{},{color},{},{})",
                from.x, from.y, to.x, to.y, stroke.thickness, stroke.rounded_caps
            ),
            Command::FillPolygon { points, color } => {
                write!(f, "fillPolygon({},{color})", Points(points))
            }
            Command::StrokePolygon {
                points,
                color,
                stroke,
            } => write!(
                f,
                "strokePolygon({},{color},{},{})",
                Points(points),
                stroke.thickness,
                stroke.rounded_caps
            ),
            Command::FillArc { arc, color } => write!(
                f,
                "fillArc({},{},{},{},{},{},{color})",
                arc.center.x,
                arc.center.y,
                arc.radius.x,
                arc.radius.y,
                arc.start_angle,
                arc.sweep_angle
            ),
            Command::StrokeArc { arc, color, stroke } => write!(
                f,
                "strokeArc({},{},{},{},{},{},{color},{},{})",
                arc.center.x,
                arc.center.y,
                arc.radius.x,
                arc.radius.y,
                arc.start_angle,
                arc.sweep_angle,
                stroke.thickness,
                stroke.rounded_caps
            ),
            Command::DrawText {
                text,
                origin,
                bounds,
                font_size,
                font_family,
                alignment,
                color,
            } => write!(
                f,
                "drawText({text:?},{},{},{font_size},{color},{font_family:?},{},{},{alignment:?})",
                origin.x, origin.y, bounds.x, bounds.y
            ),
            Command::SetTransform(t) => write!(
                f,
                "setTransform({},{},{},{},{},{})",
                t.a, t.b, t.c, t.d, t.tx, t.ty
            ),
        }
    }
}

/// Kind of scripted failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    Error,
    Panic,
}

/// Display-list renderer with failure injection
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<Command>,
    transform: Transform,
    transform_history: Vec<Transform>,
    in_frame: bool,
    primitives_seen: usize,
    fail_begin: bool,
    fail_clear: bool,
    fault: Option<(usize, Fault)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `begin_frame` fail with [`RenderError::SurfaceNotReady`]
    pub fn failing_begin_frame(mut self) -> Self {
        self.fail_begin = true;
        self
    }

    /// Make every `clear` fail with [`RenderError::Injected`]
    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    /// Make the `n`-th primitive call (0-based) return an error
    pub fn failing_primitive(mut self, n: usize) -> Self {
        self.fault = Some((n, Fault::Error));
        self
    }

    /// Make the `n`-th primitive call (0-based) panic
    pub fn panicking_primitive(mut self, n: usize) -> Self {
        self.fault = Some((n, Fault::Panic));
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Every value written with `set_transform`, oldest first
    pub fn transform_history(&self) -> &[Transform] {
        &self.transform_history
    }

    /// Number of recorded shape primitives
    pub fn primitive_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_primitive()).count()
    }

    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.transform_history.clear();
    }

    fn primitive(&mut self, call: &'static str, command: Command) -> Result<(), RenderError> {
        let n = self.primitives_seen;
        self.primitives_seen += 1;
        match self.fault {
            Some((at, Fault::Error)) if at == n => Err(RenderError::Injected { call }),
            Some((at, Fault::Panic)) if at == n => panic!("injected panic in {call}"),
            _ => {
                self.commands.push(command);
                Ok(())
            }
        }
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if self.fail_begin {
            return Err(RenderError::SurfaceNotReady);
        }
        if self.in_frame {
            return Err(RenderError::FrameInProgress);
        }
        self.in_frame = true;
        self.commands.push(Command::BeginFrame);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::FrameNotBegun);
        }
        self.in_frame = false;
        self.commands.push(Command::EndFrame);
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        if self.fail_clear {
            return Err(RenderError::Injected { call: "clear" });
        }
        self.commands.push(Command::Clear { color });
        Ok(())
    }

    fn fill_rectangle(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), RenderError> {
        self.primitive(
            "fill_rectangle",
            Command::FillRectangle {
                origin,
                size,
                color,
            },
        )
    }

    fn stroke_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_rectangle",
            Command::StrokeRectangle {
                origin,
                size,
                color,
                stroke,
            },
        )
    }

    fn fill_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
    ) -> Result<(), RenderError> {
        self.primitive(
            "fill_rounded_rectangle",
            Command::FillRoundedRectangle {
                origin,
                size,
                radius,
                color,
            },
        )
    }

    fn stroke_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_rounded_rectangle",
            Command::StrokeRoundedRectangle {
                origin,
                size,
                radius,
                color,
                stroke,
            },
        )
    }

    fn fill_ellipse(&mut self, center: Vec2, radius: Vec2, color: Color) -> Result<(), RenderError> {
        self.primitive(
            "fill_ellipse",
            Command::FillEllipse {
                center,
                radius,
                color,
            },
        )
    }

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_ellipse",
            Command::StrokeEllipse {
                center,
                radius,
                color,
                stroke,
            },
        )
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_line",
            Command::StrokeLine {
                from,
                to,
                color,
                stroke,
            },
        )
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> Result<(), RenderError> {
        self.primitive(
            "fill_polygon",
            Command::FillPolygon {
                points: points.to_vec(),
                color,
            },
        )
    }

    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_polygon",
            Command::StrokePolygon {
                points: points.to_vec(),
                color,
                stroke,
            },
        )
    }

    fn fill_arc(&mut self, arc: &ArcGeometry, color: Color) -> Result<(), RenderError> {
        self.primitive("fill_arc", Command::FillArc { arc: *arc, color })
    }

    fn stroke_arc(
        &mut self,
        arc: &ArcGeometry,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        self.primitive(
            "stroke_arc",
            Command::StrokeArc {
                arc: *arc,
                color,
                stroke,
            },
        )
    }

    fn draw_text(&mut self, run: &TextRun<'_>) -> Result<(), RenderError> {
        self.primitive(
            "draw_text",
            Command::DrawText {
                text: run.text.to_string(),
                origin: run.origin,
                bounds: run.bounds,
                font_size: run.font_size,
                font_family: run.font_family.to_string(),
                alignment: run.alignment,
                color: run.color,
            },
        )
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.transform_history.push(transform);
        self.commands.push(Command::SetTransform(transform));
    }
}

impl fmt::Display for RecordingRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}
