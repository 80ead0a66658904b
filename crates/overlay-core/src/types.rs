//! Core geometry value types.
//!
//! All values are CSS pixels. The origin is the top-left corner, x grows to
//! the right and y grows downward.

use glam::DVec2;
use std::fmt;
use std::ops::{Add, Sub};

/// Replace a non-finite geometry read with zero.
///
/// Hosts report missing measurements as NaN; such reads must not poison
/// the sums they are accumulated into.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// A point (or an anchor offset inside an element's box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates passed through [`finite_or_zero`].
    pub fn sanitized(self) -> Self {
        Self::new(finite_or_zero(self.x), finite_or_zero(self.y))
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        (self.to_vec() + rhs.to_vec()).into()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        (self.to_vec() - rhs.to_vec()).into()
    }
}

/// Width and height of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangle relative to some reference frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Create a rect from its top-left corner and size.
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (left + width).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Get the bottom edge (top + height).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A constant pixel nudge applied after geometric placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl From<[f64; 2]> for Offset {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Self { dx, dy }
    }
}

impl From<Offset> for [f64; 2] {
    fn from(offset: Offset) -> Self {
        [offset.dx, offset.dy]
    }
}

/// Computed CSS `position` of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PositionKind {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionKind {
    /// Parse a computed `position` value. Unknown values read as `Static`.
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "relative" => PositionKind::Relative,
            "absolute" => PositionKind::Absolute,
            "fixed" => PositionKind::Fixed,
            "sticky" => PositionKind::Sticky,
            _ => PositionKind::Static,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            PositionKind::Static => "static",
            PositionKind::Relative => "relative",
            PositionKind::Absolute => "absolute",
            PositionKind::Fixed => "fixed",
            PositionKind::Sticky => "sticky",
        }
    }

    /// Whether the element establishes a containing block for absolute
    /// descendants.
    pub fn is_positioned(&self) -> bool {
        !matches!(self, PositionKind::Static)
    }
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(12.5), 12.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_point_arithmetic() {
        let p = Point::new(10.0, 20.0) + Point::new(5.0, -5.0);
        assert!((p.x - 15.0).abs() < 0.001);
        assert!((p.y - 15.0).abs() < 0.001);

        let q = p - Point::new(15.0, 15.0);
        assert_eq!(q, Point::ZERO);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((rect.right() - 110.0).abs() < 0.001);
        assert!((rect.bottom() - 70.0).abs() < 0.001);
        assert_eq!(rect.origin(), Point::new(10.0, 20.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_position_kind_from_css() {
        assert_eq!(PositionKind::from_css("fixed"), PositionKind::Fixed);
        assert_eq!(PositionKind::from_css(" absolute "), PositionKind::Absolute);
        assert_eq!(PositionKind::from_css(""), PositionKind::Static);
        assert!(!PositionKind::Static.is_positioned());
        assert!(PositionKind::Sticky.is_positioned());
    }

    #[test]
    fn test_offset_from_array() {
        let offset: Offset = [4.0, -2.0].into();
        assert_eq!(offset, Offset::new(4.0, -2.0));
        assert_eq!(<[f64; 2]>::from(offset), [4.0, -2.0]);
    }
}
