//! Shared primitives for the Turbo scene editor.
//!
//! These are the value types every other layer agrees on:
//! - `Position` and `Color` — geometry/style primitives with no dependencies
//! - `TextElement` — the sole scene element kind
//!
//! Colors are stored packed as `0xRRGGBBAA` and must round-trip exactly
//! through both the code generator (hex literal) and the rendering bridge
//! (surface channel format); all conversions here are lossless inverses.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Canvas coordinates, origin top-left. Unbounded: negative positions are
/// valid and simply draw off-surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A packed 32-bit color, layout `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn a(self) -> u8 {
        self.0 as u8
    }

    /// Repack into the drawing-surface channel order, `0xAARRGGBB`.
    ///
    /// Exact inverse of [`Color::from_surface`]: the alpha byte rotates from
    /// the low end to the high end, the RGB bytes shift down one byte.
    pub fn to_surface(self) -> u32 {
        self.0.rotate_right(8)
    }

    /// Unpack from the drawing-surface channel order, `0xAARRGGBB`.
    pub fn from_surface(packed: u32) -> Self {
        Color(packed.rotate_left(8))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Scene elements
// ---------------------------------------------------------------------------

/// Default color applied by `add_text`: opaque white.
pub const DEFAULT_COLOR: Color = Color::WHITE;

/// Default font size applied by `add_text`. This is also the `text!` macro's
/// own default, so the code generator elides the argument at this value.
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// The sole element kind: a run of text placed at an absolute position.
///
/// Identity is positional — elements live in the document's ordered sequence
/// and are referenced by index. Content may be empty or arbitrary Unicode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    pub content: String,
    pub position: Position,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channel_accessors() {
        let c = Color(0x11223344);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x11, 0x22, 0x33, 0x44));
        assert_eq!(Color::from_rgba(0x11, 0x22, 0x33, 0x44), c);
    }

    #[test]
    fn surface_format_is_exact_inverse() {
        for c in [0u32, 0xFFFF_FFFF, 0x11223344, 0xDEADBEEF, 0x0000_00FF, 0x8000_0001] {
            assert_eq!(Color::from_surface(Color(c).to_surface()), Color(c));
        }
    }

    #[test]
    fn surface_format_byte_order() {
        assert_eq!(Color(0x11223344).to_surface(), 0x44112233);
        assert_eq!(Color::from_surface(0x44112233), Color(0x11223344));
    }

    #[test]
    fn element_json_defaults() {
        let el: TextElement =
            serde_json::from_str(r#"{"content":"hi","position":{"x":1,"y":2}}"#).unwrap();
        assert_eq!(el.color, DEFAULT_COLOR);
        assert_eq!(el.font_size, DEFAULT_FONT_SIZE);
    }
}
