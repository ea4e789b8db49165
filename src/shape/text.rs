//! Text laid out in a box, with optional drop shadow and outline.
//!
//! Draw order is shadow, then outline, then the text itself. Both extra
//! passes are the same string redrawn at an offset in their own color.

use glam::Vec2;

use super::{Shape, ShapeState};
use crate::color::Color;
use crate::errors::RenderError;
use crate::renderer::{Renderer, TextAlignment, TextRun};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Drop shadow drawn before everything else
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShadow {
    pub color: Color,
    pub offset: Vec2,
}

impl TextShadow {
    pub fn new(color: impl Into<Color>, dx: f32, dy: f32) -> Self {
        TextShadow {
            color: color.into().normalized(),
            offset: Vec2::new(dx, dy),
        }
    }
}

/// How many neighbours an outline is stamped at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineReach {
    /// Left, right, up, down
    #[default]
    Four,
    /// The four sides plus the diagonals
    Eight,
}

impl OutlineReach {
    const SIDES: [Vec2; 4] = [
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.0, 1.0),
    ];
    const ALL: [Vec2; 8] = [
        Vec2::new(-1.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, -1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
    ];

    /// Unit offsets, in draw order
    pub fn directions(self) -> &'static [Vec2] {
        match self {
            OutlineReach::Four => &Self::SIDES,
            OutlineReach::Eight => &Self::ALL,
        }
    }
}

/// Outline stamped around the glyphs before the main pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOutline {
    pub color: Color,
    pub reach: OutlineReach,
    /// Distance of each stamp from the main pass, in pixels
    pub width: f32,
}

impl TextOutline {
    pub fn new(color: impl Into<Color>) -> Self {
        TextOutline {
            color: color.into().normalized(),
            reach: OutlineReach::default(),
            width: 1.0,
        }
    }

    pub fn with_reach(mut self, reach: OutlineReach) -> Self {
        self.reach = reach;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// A text label. The position is the top-left corner of its layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub(crate) state: ShapeState,
    pub text: String,
    /// Layout box width and height
    pub size: Vec2,
    pub font_size: f32,
    pub font_family: String,
    pub alignment: TextAlignment,
    pub shadow: Option<TextShadow>,
    pub outline: Option<TextOutline>,
}

impl Text {
    pub fn new(
        text: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: impl Into<Color>,
    ) -> Self {
        Self {
            state: ShapeState::new(Vec2::new(x, y), color.into()),
            text: text.into(),
            size: Vec2::new(width, height),
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            alignment: TextAlignment::default(),
            shadow: None,
            outline: None,
        }
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_shadow(mut self, shadow: TextShadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_outline(mut self, outline: TextOutline) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn run_at(&self, origin: Vec2, color: Color) -> TextRun<'_> {
        TextRun {
            text: &self.text,
            origin,
            bounds: self.size,
            font_size: self.font_size,
            font_family: &self.font_family,
            alignment: self.alignment,
            color: color.normalized(),
        }
    }
}

impl Shape for Text {
    fn state(&self) -> &ShapeState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ShapeState {
        &mut self.state
    }

    fn kind_name(&self) -> &'static str {
        "text"
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        let origin = self.state.position;

        if let Some(shadow) = &self.shadow {
            renderer.draw_text(&self.run_at(origin + shadow.offset, shadow.color))?;
        }
        if let Some(outline) = &self.outline {
            for dir in outline.reach.directions() {
                renderer.draw_text(&self.run_at(origin + *dir * outline.width, outline.color))?;
            }
        }
        renderer.draw_text(&self.run_at(origin, self.state.color))
    }
}
