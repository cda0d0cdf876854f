//! Plain geometry values.
//!
//! `Point` and `Size` have the same shape but are deliberately separate
//! types so a size can never be passed where a position is expected.
//! `Rect` is composed of the two and exposes `x`/`y`/`width`/`height` as
//! views onto them rather than as fields of its own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position in the document's user space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// A rectangle stored as an origin and a size.
///
/// The scalar accessors read and write through to `origin` and `size`, so
/// both views always agree:
///
/// ```
/// use layer_tree::{Point, Rect};
///
/// let mut rect = Rect::new(1.0, 2.0, 3.0, 4.0);
/// rect.set_x(10.0);
/// assert_eq!(rect.origin, Point::new(10.0, 2.0));
///
/// rect.origin.y = 20.0;
/// assert_eq!(rect.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

// === Point ===

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

// === Size ===

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Size> for Vec2 {
    fn from(s: Size) -> Self {
        Vec2::new(s.width, s.height)
    }
}

// === Rect ===

impl Rect {
    pub const ZERO: Self = Self::from_origin_size(Point::ZERO, Size::ZERO);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_origin_size(Point::new(x, y), Size::new(width, height))
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.origin.x = x;
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.origin.y = y;
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.size.width = width;
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn set_height(&mut self, height: f32) {
        self.size.height = height;
    }

    /// Right edge (`x + width`).
    pub fn max_x(&self) -> f32 {
        self.x() + self.width()
    }

    /// Bottom edge (`y + height`).
    pub fn max_y(&self) -> f32 {
        self.y() + self.height()
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x() + self.width() * 0.5,
            self.y() + self.height() * 0.5,
        )
    }

    /// Tests if a point lies inside the rectangle.
    ///
    /// Points on the edges are considered contained.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x()
            && point.x <= self.max_x()
            && point.y >= self.y()
            && point.y <= self.max_y()
    }
}
