//! Core geometry types for anchorflow.
//!
//! All values are integer device pixels. These are passive value types: a
//! container writes them during its layout pass, everything else only reads.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in container-local device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A measured size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// A box in device pixels, stored as its four edges.
///
/// Width and height are derived. A rect produced by an anchor that resolved
/// off-screen keeps its coordinates; nothing here clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A rect at `origin` spanning `size`.
    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    /// A rect at the origin spanning `size`.
    #[inline]
    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ORIGIN, size)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Horizontal midpoint, halving with truncation.
    #[inline]
    pub fn mid_x(&self) -> i32 {
        self.left + self.width() / 2
    }

    /// Vertical midpoint, halving with truncation.
    #[inline]
    pub fn mid_y(&self) -> i32 {
        self.top + self.height() / 2
    }

    /// Check if a point is inside this rect.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_xy(point.x, point.y)
    }

    #[inline]
    pub fn contains_xy(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Shrink by insets (e.g. padding to get the content box).
    #[inline]
    pub fn inset(&self, insets: &Insets) -> Self {
        Self {
            left: self.left + insets.left,
            top: self.top + insets.top,
            right: self.right - insets.right,
            bottom: self.bottom - insets.bottom,
        }
    }
}

/// Four-sided integer insets, used for both margins and padding.
///
/// Margins space a node from its siblings; padding shrinks its own content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Explicit values for each side.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform insets on all sides.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric insets (horizontal, vertical).
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal inset.
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical inset.
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// ARGB color packed the way the host toolkit stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self(0xFF00_0000 | value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_dimensions() {
        let r = Rect::new(10, 20, 60, 45);
        assert_eq!(r.width(), 50);
        assert_eq!(r.height(), 25);
        assert_eq!(r.size(), Size::new(50, 25));
        assert_eq!(r.mid_x(), 35);
        assert_eq!(r.mid_y(), 32);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains_xy(0, 0));
        assert!(r.contains_xy(9, 9));
        assert!(!r.contains_xy(10, 5));
        assert!(!r.contains_xy(5, 10));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::from_size(Size::new(100, 50));
        let content = r.inset(&Insets::new(4, 2, 6, 8));
        assert_eq!(content, Rect::new(4, 2, 94, 42));
    }

    #[test]
    fn test_insets_totals() {
        let i = Insets::symmetric(3, 5);
        assert_eq!(i.horizontal(), 6);
        assert_eq!(i.vertical(), 10);
        assert_eq!(Insets::all(2), Insets::new(2, 2, 2, 2));
    }

    #[test]
    fn test_color_parse_hex() {
        assert_eq!(Color::parse_hex("#ffffff"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("#80000000").map(|c| c.alpha()), Some(0x80));
        assert_eq!(Color::parse_hex("ffffff"), None);
        assert_eq!(Color::parse_hex("#fff"), None);
    }

    #[test]
    fn test_color_parse_hex_rejects_signs() {
        assert_eq!(Color::parse_hex("#+ffffff"), None);
        assert_eq!(Color::parse_hex("#+fffff"), None);
        assert_eq!(Color::parse_hex("#-0000000"), None);
    }
}
