//! SVG rendering backend
//!
//! [`SvgRenderer`] turns one frame into a standalone SVG document. Each
//! primitive becomes one `facet_svg` element; the current transform is
//! written as a `matrix(...)` attribute on the element rather than as nested
//! groups, so the output mirrors the renderer's single transform register.
//! `end_frame` serializes the collected elements with `facet_xml`.

use facet_svg::{
    Ellipse, Line, Path, Polygon, Presentation, PresentationAttrs, Rect, SVG_NS, Svg, SvgNode,
    Text, facet_xml,
};
use glam::Vec2;

use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{ArcGeometry, Renderer, Stroke, TextAlignment, TextRun};
use crate::transform::Transform;

/// Document-level settings for [`SvgRenderer`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgOptions {
    pub width: f32,
    pub height: f32,
    /// Decimal places kept in coordinates
    pub precision: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            width: 800.0,
            height: 600.0,
            precision: 3,
        }
    }
}

impl SvgOptions {
    pub fn new(width: f32, height: f32) -> Self {
        SvgOptions {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Renders frames to SVG text
#[derive(Debug, Default)]
pub struct SvgRenderer {
    options: SvgOptions,
    nodes: Vec<SvgNode>,
    transform: Transform,
    in_frame: bool,
    document: Option<String>,
}

impl SvgRenderer {
    pub fn new(options: SvgOptions) -> Self {
        SvgRenderer {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// The last completed frame, if any
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn into_document(self) -> Option<String> {
        self.document
    }

    /// Attribute value rounded to the configured precision
    fn num(&self, value: f32) -> f64 {
        round_to(f64::from(value), self.options.precision)
    }

    /// Number inside a compound attribute such as `d` or `points`
    fn coord(&self, value: f32) -> String {
        fmt_num(value, self.options.precision)
    }

    fn transform_attr(&self) -> Option<String> {
        if self.transform.is_identity() {
            return None;
        }
        let parts: Vec<String> = self
            .transform
            .to_array()
            .iter()
            .map(|v| self.coord(*v))
            .collect();
        Some(format!("matrix({})", parts.join(" ")))
    }

    fn fill_paint(&self, color: Color) -> Presentation {
        Presentation {
            fill: Some(color.to_rgb_string()),
            fill_opacity: opacity_attr(color),
            ..Presentation::default()
        }
    }

    fn stroke_paint(&self, color: Color, stroke: Stroke) -> Presentation {
        let round = stroke.rounded_caps.then(|| "round".to_string());
        Presentation {
            fill: Some("none".to_string()),
            stroke: Some(color.to_rgb_string()),
            stroke_opacity: opacity_attr(color),
            stroke_width: Some(self.coord(stroke.thickness)),
            stroke_linecap: round.clone(),
            stroke_linejoin: round,
            ..Presentation::default()
        }
    }

    /// Stamp paint and the current transform onto an element and queue it
    fn push<E>(&mut self, mut element: E, mut paint: Presentation)
    where
        E: PresentationAttrs + Into<SvgNode>,
    {
        paint.transform = self.transform_attr();
        element.set_presentation(paint);
        self.nodes.push(element.into());
    }

    fn rect(&self, origin: Vec2, size: Vec2, radius: Option<Vec2>) -> Rect {
        Rect {
            x: Some(self.num(origin.x)),
            y: Some(self.num(origin.y)),
            width: Some(self.num(size.x)),
            height: Some(self.num(size.y)),
            rx: radius.map(|r| self.num(r.x)),
            ry: radius.map(|r| self.num(r.y)),
            ..Rect::default()
        }
    }

    fn ellipse(&self, center: Vec2, radius: Vec2) -> Ellipse {
        Ellipse {
            cx: Some(self.num(center.x)),
            cy: Some(self.num(center.y)),
            rx: Some(self.num(radius.x)),
            ry: Some(self.num(radius.y)),
            ..Ellipse::default()
        }
    }

    fn polygon(&self, points: &[Vec2]) -> Polygon {
        let pts: Vec<String> = points
            .iter()
            .map(|p| format!("{},{}", self.coord(p.x), self.coord(p.y)))
            .collect();
        Polygon {
            points: Some(pts.join(" ")),
            ..Polygon::default()
        }
    }

    /// `A` command from the arc's start to its end
    fn arc_segment(&self, arc: &ArcGeometry) -> String {
        let end = arc.end_point();
        let large = u8::from(arc.sweep_angle.abs() > 180.0);
        let sweep = u8::from(arc.sweep_angle > 0.0);
        format!(
            "A{} {} 0 {large} {sweep} {},{}",
            self.coord(arc.radius.x),
            self.coord(arc.radius.y),
            self.coord(end.x),
            self.coord(end.y)
        )
    }
}

impl Renderer for SvgRenderer {
    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if self.in_frame {
            return Err(RenderError::FrameInProgress);
        }
        self.nodes.clear();
        self.in_frame = true;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        if !self.in_frame {
            return Err(RenderError::FrameNotBegun);
        }
        self.in_frame = false;
        let (w, h) = (self.coord(self.options.width), self.coord(self.options.height));
        let svg = Svg {
            xmlns: Some(SVG_NS.to_string()),
            view_box: Some(format!("0 0 {w} {h}")),
            width: Some(w),
            height: Some(h),
            children: std::mem::take(&mut self.nodes),
        };
        let document = facet_xml::to_string(&svg)
            .map_err(|e| RenderError::backend(format!("XML serialization error: {e}")))?;
        self.document = Some(document);
        Ok(())
    }

    /// Fills the whole canvas; the current transform does not apply.
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let mut rect = self.rect(
            Vec2::ZERO,
            Vec2::new(self.options.width, self.options.height),
            None,
        );
        rect.set_presentation(self.fill_paint(color));
        self.nodes.push(rect.into());
        Ok(())
    }

    fn fill_rectangle(&mut self, origin: Vec2, size: Vec2, color: Color) -> Result<(), RenderError> {
        let rect = self.rect(origin, size, None);
        self.push(rect, self.fill_paint(color));
        Ok(())
    }

    fn stroke_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let rect = self.rect(origin, size, None);
        self.push(rect, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn fill_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
    ) -> Result<(), RenderError> {
        let rect = self.rect(origin, size, Some(radius));
        self.push(rect, self.fill_paint(color));
        Ok(())
    }

    fn stroke_rounded_rectangle(
        &mut self,
        origin: Vec2,
        size: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let rect = self.rect(origin, size, Some(radius));
        self.push(rect, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn fill_ellipse(&mut self, center: Vec2, radius: Vec2, color: Color) -> Result<(), RenderError> {
        let ellipse = self.ellipse(center, radius);
        self.push(ellipse, self.fill_paint(color));
        Ok(())
    }

    fn stroke_ellipse(
        &mut self,
        center: Vec2,
        radius: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let ellipse = self.ellipse(center, radius);
        self.push(ellipse, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let line = Line {
            x1: Some(self.num(from.x)),
            y1: Some(self.num(from.y)),
            x2: Some(self.num(to.x)),
            y2: Some(self.num(to.y)),
            ..Line::default()
        };
        self.push(line, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) -> Result<(), RenderError> {
        let polygon = self.polygon(points);
        self.push(polygon, self.fill_paint(color));
        Ok(())
    }

    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        let polygon = self.polygon(points);
        self.push(polygon, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn fill_arc(&mut self, arc: &ArcGeometry, color: Color) -> Result<(), RenderError> {
        if arc.sweep_angle.abs() >= 360.0 {
            return self.fill_ellipse(arc.center, arc.radius, color);
        }
        let start = arc.start_point();
        let path = Path {
            d: Some(format!(
                "M{},{} L{},{} {} Z",
                self.coord(arc.center.x),
                self.coord(arc.center.y),
                self.coord(start.x),
                self.coord(start.y),
                self.arc_segment(arc)
            )),
            ..Path::default()
        };
        self.push(path, self.fill_paint(color));
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        arc: &ArcGeometry,
        color: Color,
        stroke: Stroke,
    ) -> Result<(), RenderError> {
        if arc.sweep_angle.abs() >= 360.0 {
            return self.stroke_ellipse(arc.center, arc.radius, color, stroke);
        }
        let start = arc.start_point();
        let path = Path {
            d: Some(format!(
                "M{},{} {}",
                self.coord(start.x),
                self.coord(start.y),
                self.arc_segment(arc)
            )),
            ..Path::default()
        };
        self.push(path, self.stroke_paint(color, stroke));
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun<'_>) -> Result<(), RenderError> {
        let (x, anchor) = match run.alignment {
            TextAlignment::Left => (run.origin.x, "start"),
            TextAlignment::Center => (run.origin.x + run.bounds.x / 2.0, "middle"),
            TextAlignment::Right => (run.origin.x + run.bounds.x, "end"),
        };
        let text = Text {
            x: Some(self.num(x)),
            y: Some(self.num(run.origin.y)),
            font_family: Some(run.font_family.to_string()),
            font_size: Some(self.num(run.font_size)),
            text_anchor: Some(anchor.to_string()),
            dominant_baseline: Some("hanging".to_string()),
            content: run.text.to_string(),
            ..Text::default()
        };
        self.push(text, self.fill_paint(run.color));
        Ok(())
    }

    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

fn opacity_attr(color: Color) -> Option<String> {
    (color.alpha() < 255).then(|| fmt_num(color.opacity(), 3))
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals.min(15) as i32);
    // `+ 0.0` folds -0 into 0
    (value * scale).round() / scale + 0.0
}

/// Format a number with at most `decimals` decimal places, trailing zeros
/// trimmed.
fn fmt_num(value: f32, decimals: usize) -> String {
    let s = format!("{:.prec$}", value, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(100.0, 3), "100");
        assert_eq!(fmt_num(2.5, 3), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0, 3), "0.333");
        assert_eq!(fmt_num(-0.0001, 3), "0");
        assert_eq!(fmt_num(-12.26, 1), "-12.3");
        assert_eq!(fmt_num(7.0, 0), "7");
    }

    #[test]
    fn attribute_numbers_are_rounded() {
        assert_eq!(round_to(f64::from(1.0f32 / 3.0), 3), 0.333);
        assert_eq!(round_to(-0.0001, 3).to_bits(), 0.0f64.to_bits());
        assert_eq!(round_to(12.5, 0), 13.0);
    }

    #[test]
    fn document_needs_a_frame() {
        let mut r = SvgRenderer::new(SvgOptions::new(10.0, 10.0));
        assert_eq!(r.end_frame(), Err(RenderError::FrameNotBegun));
        assert_eq!(r.document(), None);
        r.begin_frame().expect("begin");
        assert_eq!(r.begin_frame(), Err(RenderError::FrameInProgress));
        r.end_frame().expect("end");

        let svg: Svg = facet_xml::from_str(r.document().unwrap_or_default()).expect("parse");
        assert_eq!(svg.width.as_deref(), Some("10"));
        assert_eq!(svg.view_box.as_deref(), Some("0 0 10 10"));
        assert!(svg.children.is_empty());
    }

    #[test]
    fn transform_becomes_matrix_attribute() {
        let mut r = SvgRenderer::new(SvgOptions::default());
        r.set_transform(Transform::translation(5.0, -2.5));
        r.fill_rectangle(Vec2::ZERO, Vec2::new(4.0, 3.0), Color::new(0x80FF0000))
            .expect("fill");
        r.set_transform(Transform::IDENTITY);
        r.fill_rectangle(Vec2::ZERO, Vec2::ONE, Color::RED).expect("fill");

        let SvgNode::Rect(rect) = &r.nodes[0] else {
            panic!("expected rect, got {:?}", r.nodes[0]);
        };
        assert_eq!((rect.width, rect.height), (Some(4.0), Some(3.0)));
        assert_eq!(rect.fill(), Some("rgb(255,0,0)"));
        assert_eq!(rect.fill_opacity.as_deref(), Some("0.502"));
        assert_eq!(rect.transform(), Some("matrix(1 0 0 1 5 -2.5)"));
        assert_eq!(r.nodes[1].attrs().transform(), None);
    }

    #[test]
    fn clear_covers_the_canvas_untransformed() {
        let mut r = SvgRenderer::new(SvgOptions::new(40.0, 30.0));
        r.set_transform(Transform::translation(5.0, 5.0));
        r.clear(Color::WHITE).expect("clear");
        let SvgNode::Rect(rect) = &r.nodes[0] else {
            panic!("expected rect, got {:?}", r.nodes[0]);
        };
        assert_eq!((rect.x, rect.y), (Some(0.0), Some(0.0)));
        assert_eq!((rect.width, rect.height), (Some(40.0), Some(30.0)));
        assert_eq!(rect.transform(), None);
    }

    #[test]
    fn rounded_rectangles_carry_radii() {
        let mut r = SvgRenderer::new(SvgOptions::default());
        r.fill_rounded_rectangle(Vec2::ZERO, Vec2::new(10.0, 5.0), Vec2::new(1.0, 2.0), Color::RED)
            .expect("fill");
        r.stroke_rounded_rectangle(
            Vec2::ZERO,
            Vec2::new(10.0, 5.0),
            Vec2::new(1.5, 1.5),
            Color::BLUE,
            Stroke::new(3.0).with_rounded_caps(true),
        )
        .expect("stroke");

        let (SvgNode::Rect(filled), SvgNode::Rect(outlined)) = (&r.nodes[0], &r.nodes[1]) else {
            panic!("expected two rects, got {:?}", r.nodes);
        };
        assert_eq!((filled.rx, filled.ry), (Some(1.0), Some(2.0)));
        assert_eq!(filled.stroke(), None);
        assert_eq!((outlined.rx, outlined.ry), (Some(1.5), Some(1.5)));
        assert_eq!(outlined.fill(), Some("none"));
        assert_eq!(outlined.stroke_width(), Some("3"));
        assert_eq!(outlined.stroke_linecap.as_deref(), Some("round"));
        assert_eq!(outlined.stroke_linejoin.as_deref(), Some("round"));
    }

    #[test]
    fn stroked_ellipse_and_polygon_are_unfilled() {
        let mut r = SvgRenderer::new(SvgOptions::default());
        r.stroke_ellipse(Vec2::new(5.0, 5.0), Vec2::new(3.0, 1.0), Color::GREEN, Stroke::new(2.0))
            .expect("ellipse");
        r.stroke_polygon(
            &[Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(2.0, 1.0 / 3.0)],
            Color::new(0x40000000),
            Stroke::default(),
        )
        .expect("polygon");

        let (SvgNode::Ellipse(ellipse), SvgNode::Polygon(polygon)) = (&r.nodes[0], &r.nodes[1])
        else {
            panic!("expected ellipse then polygon, got {:?}", r.nodes);
        };
        assert_eq!((ellipse.cx, ellipse.rx, ellipse.ry), (Some(5.0), Some(3.0), Some(1.0)));
        assert_eq!(ellipse.fill(), Some("none"));
        assert_eq!(ellipse.stroke(), Some("rgb(0,255,0)"));
        assert_eq!(ellipse.stroke_width(), Some("2"));
        assert_eq!(ellipse.stroke_linecap, None);

        assert_eq!(polygon.points.as_deref(), Some("0,0 4,0 2,0.333"));
        assert_eq!(polygon.fill(), Some("none"));
        assert_eq!(polygon.stroke_opacity.as_deref(), Some("0.251"));
    }

    #[test]
    fn arcs_become_paths() {
        let mut r = SvgRenderer::new(SvgOptions::default());
        let arc = ArcGeometry {
            center: Vec2::new(50.0, 50.0),
            radius: Vec2::new(10.0, 10.0),
            start_angle: 0.0,
            sweep_angle: 90.0,
        };
        r.fill_arc(&arc, Color::BLUE).expect("fill");
        r.stroke_arc(&arc, Color::BLUE, Stroke::new(2.0)).expect("stroke");

        let (SvgNode::Path(filled), SvgNode::Path(stroked)) = (&r.nodes[0], &r.nodes[1]) else {
            panic!("expected two paths, got {:?}", r.nodes);
        };
        assert_eq!(filled.d.as_deref(), Some("M50,50 L60,50 A10 10 0 0 1 50,60 Z"));
        assert_eq!(filled.fill(), Some("rgb(0,0,255)"));
        assert_eq!(stroked.d.as_deref(), Some("M60,50 A10 10 0 0 1 50,60"));
        assert_eq!(stroked.fill(), Some("none"));
    }

    #[test]
    fn full_sweep_falls_back_to_ellipse() {
        let mut r = SvgRenderer::new(SvgOptions::default());
        let arc = ArcGeometry {
            center: Vec2::new(5.0, 5.0),
            radius: Vec2::new(2.0, 1.0),
            start_angle: 45.0,
            sweep_angle: -360.0,
        };
        r.fill_arc(&arc, Color::BLACK).expect("fill");
        let SvgNode::Ellipse(ellipse) = &r.nodes[0] else {
            panic!("expected ellipse, got {:?}", r.nodes[0]);
        };
        assert_eq!((ellipse.cx, ellipse.cy), (Some(5.0), Some(5.0)));
        assert_eq!((ellipse.rx, ellipse.ry), (Some(2.0), Some(1.0)));
    }
}
