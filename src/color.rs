//! 32-bit ARGB colors.
//!
//! Every color that enters a shape is normalized: a value without an alpha
//! byte (`<= 0x00FF_FFFF`) is treated as fully opaque.

use std::fmt;
use std::str::FromStr;

use crate::errors::ColorParseError;

/// A packed `0xAARRGGBB` color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    /// Fully transparent black. Normalization would make this opaque, so it
    /// can only be obtained through this constant or [`Color::from_raw`].
    /// Shapes and scene backgrounds normalize what they store, so it reaches
    /// a renderer only when passed to one directly.
    pub const TRANSPARENT: Color = Color(0);

    /// Build a color from a possibly alpha-less ARGB value.
    #[inline]
    pub const fn new(argb: u32) -> Color {
        Color(normalize(argb))
    }

    /// Build a color without alpha normalization.
    #[inline]
    pub const fn from_raw(argb: u32) -> Color {
        Color(argb)
    }

    /// Re-apply normalization to a color built with [`Color::from_raw`]
    #[inline]
    pub const fn normalized(self) -> Color {
        Color(normalize(self.0))
    }

    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Color {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with the alpha byte replaced
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Color {
        Color((self.0 & 0x00FF_FFFF) | (alpha as u32) << 24)
    }

    /// Alpha as a 0.0..=1.0 opacity
    pub fn opacity(self) -> f32 {
        self.alpha() as f32 / 255.0
    }

    /// CSS `rgb(r,g,b)` form, alpha dropped
    pub fn to_rgb_string(self) -> String {
        format!("rgb({},{},{})", self.red(), self.green(), self.blue())
    }
}

/// Promote an alpha-less color to fully opaque.
///
/// Values with a non-zero alpha byte pass through unchanged, which makes the
/// operation idempotent.
#[inline]
pub const fn normalize(argb: u32) -> u32 {
    if argb <= 0x00FF_FFFF {
        argb | 0xFF00_0000
    } else {
        argb
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::new(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Named colors understood by [`Color::from_str`]
const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xFFFFFF),
    ("red", 0xFF0000),
    ("green", 0x008000),
    ("lime", 0x00FF00),
    ("blue", 0x0000FF),
    ("yellow", 0xFFFF00),
    ("cyan", 0x00FFFF),
    ("magenta", 0xFF00FF),
    ("orange", 0xFFA500),
    ("purple", 0x800080),
    ("gray", 0x808080),
    ("grey", 0x808080),
];

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#RRGGBB`, `#AARRGGBB`, `0xRRGGBB`, `0xAARRGGBB` and a few
    /// CSS color names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"));

        match hex {
            Some(digits) => {
                if !(digits.len() == 6 || digits.len() == 8) {
                    return Err(ColorParseError::InvalidHex { input: s.to_string() });
                }
                u32::from_str_radix(digits, 16)
                    .map(Color::new)
                    .map_err(|_| ColorParseError::InvalidHex { input: s.to_string() })
            }
            None => {
                let name = s.to_ascii_lowercase();
                NAMED
                    .iter()
                    .find(|(n, _)| *n == name)
                    .map(|(_, rgb)| Color::new(*rgb))
                    .ok_or(ColorParseError::UnknownName { input: s.to_string() })
            }
        }
    }
}
