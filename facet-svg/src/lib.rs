//! Facet-derived SVG element types.
//!
//! Covers the elements a flat scene frame needs: rectangles, ellipses,
//! lines, paths, polygons and text, each carrying its own paint and
//! `transform` attributes. The same types serialize a frame and parse it
//! back in tests.
//!
//! ```rust
//! use facet_svg::{Svg, SvgNode};
//!
//! let svg_str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
//!     <rect x="10" y="10" width="80" height="80" fill="rgb(0,0,255)"/>
//! </svg>"#;
//!
//! let svg: Svg = facet_xml::from_str(svg_str).unwrap();
//! assert!(matches!(svg.children[0], SvgNode::Rect(_)));
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any element a frame can contain
#[derive(Facet, Debug, Clone)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "ellipse")]
    Ellipse(Ellipse),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "text")]
    Text(Text),
}

/// Paint and placement attributes shared by every element, gathered so a
/// backend can build them once and stamp them onto any element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub fill: Option<String>,
    pub fill_opacity: Option<String>,
    pub stroke: Option<String>,
    pub stroke_opacity: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke_linecap: Option<String>,
    pub stroke_linejoin: Option<String>,
    pub transform: Option<String>,
}

/// Common presentation attributes shared by shape elements
pub trait PresentationAttrs {
    fn fill(&self) -> Option<&str>;
    fn stroke(&self) -> Option<&str>;
    fn stroke_width(&self) -> Option<&str>;
    fn transform(&self) -> Option<&str>;
    fn presentation(&self) -> Presentation;
    fn set_presentation(&mut self, presentation: Presentation);
}

macro_rules! impl_presentation_attrs {
    ($($ty:ident),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn fill(&self) -> Option<&str> { self.fill.as_deref() }
                fn stroke(&self) -> Option<&str> { self.stroke.as_deref() }
                fn stroke_width(&self) -> Option<&str> { self.stroke_width.as_deref() }
                fn transform(&self) -> Option<&str> { self.transform.as_deref() }

                fn presentation(&self) -> Presentation {
                    Presentation {
                        fill: self.fill.clone(),
                        fill_opacity: self.fill_opacity.clone(),
                        stroke: self.stroke.clone(),
                        stroke_opacity: self.stroke_opacity.clone(),
                        stroke_width: self.stroke_width.clone(),
                        stroke_linecap: self.stroke_linecap.clone(),
                        stroke_linejoin: self.stroke_linejoin.clone(),
                        transform: self.transform.clone(),
                    }
                }

                fn set_presentation(&mut self, p: Presentation) {
                    self.fill = p.fill;
                    self.fill_opacity = p.fill_opacity;
                    self.stroke = p.stroke;
                    self.stroke_opacity = p.stroke_opacity;
                    self.stroke_width = p.stroke_width;
                    self.stroke_linecap = p.stroke_linecap;
                    self.stroke_linejoin = p.stroke_linejoin;
                    self.transform = p.transform;
                }
            }

            impl From<$ty> for SvgNode {
                fn from(element: $ty) -> Self {
                    SvgNode::$ty(element)
                }
            }
        )*
    };
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute)]
    pub width: Option<f64>,
    #[facet(xml::attribute)]
    pub height: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub ry: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG ellipse element (`<ellipse>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Ellipse {
    #[facet(xml::attribute)]
    pub cx: Option<f64>,
    #[facet(xml::attribute)]
    pub cy: Option<f64>,
    #[facet(xml::attribute)]
    pub rx: Option<f64>,
    #[facet(xml::attribute)]
    pub ry: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<f64>,
    #[facet(xml::attribute)]
    pub y1: Option<f64>,
    #[facet(xml::attribute)]
    pub x2: Option<f64>,
    #[facet(xml::attribute)]
    pub y2: Option<f64>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
}

/// SVG text element (`<text>`)
#[derive(Facet, Debug, Clone, Default)]
#[facet(xml::ns_all = "http://www.w3.org/2000/svg")]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<f64>,
    #[facet(xml::attribute)]
    pub y: Option<f64>,
    #[facet(xml::attribute, rename = "font-family")]
    pub font_family: Option<String>,
    #[facet(xml::attribute, rename = "font-size")]
    pub font_size: Option<f64>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-opacity")]
    pub stroke_opacity: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linecap")]
    pub stroke_linecap: Option<String>,
    #[facet(xml::attribute, rename = "stroke-linejoin")]
    pub stroke_linejoin: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Rect, Ellipse, Line, Path, Polygon, Text);

impl SvgNode {
    /// Shared attributes of whichever element this is
    pub fn attrs(&self) -> &dyn PresentationAttrs {
        match self {
            SvgNode::Rect(e) => e,
            SvgNode::Ellipse(e) => e,
            SvgNode::Line(e) => e,
            SvgNode::Path(e) => e,
            SvgNode::Polygon(e) => e,
            SvgNode::Text(e) => e,
        }
    }
}

// Re-export facet_xml for convenience
pub use facet_xml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_moves_between_elements() {
        let mut rect = Rect::default();
        rect.set_presentation(Presentation {
            fill: Some("none".into()),
            stroke: Some("rgb(0,0,0)".into()),
            stroke_width: Some("2".into()),
            transform: Some("matrix(1 0 0 1 5 5)".into()),
            ..Presentation::default()
        });

        let mut path = Path::default();
        path.set_presentation(rect.presentation());
        let node = SvgNode::from(path);
        assert_eq!(node.attrs().fill(), Some("none"));
        assert_eq!(node.attrs().stroke_width(), Some("2"));
        assert_eq!(node.attrs().transform(), Some("matrix(1 0 0 1 5 5)"));
    }

    #[test]
    fn parses_text_content() {
        let svg: Svg = facet_xml::from_str(
            r#"<svg xmlns="http://www.w3.org/2000/svg"><text x="1" y="2" fill="rgb(0,0,0)">a&lt;b</text></svg>"#,
        )
        .unwrap();
        let SvgNode::Text(text) = &svg.children[0] else {
            panic!("expected text, got {:?}", svg.children[0]);
        };
        assert_eq!(text.content, "a<b");
        assert_eq!(text.x, Some(1.0));
        assert_eq!(text.fill(), Some("rgb(0,0,0)"));
    }
}
