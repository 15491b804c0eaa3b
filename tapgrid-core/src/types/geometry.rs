//! Integer geometry used for viewports, tiles and pointer positions.
//!
//! All launcher geometry is whole pixels: positions are `i32` (a pointer can
//! land left of or above the surface), extents are `u32`.

use serde::{Deserialize, Serialize};

/// A point with integer coordinates, e.g. a pointer position in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointInt {
    pub x: i32,
    pub y: i32,
}

impl PointInt {
    /// Creates a new `PointInt`.
    pub const fn new(x: i32, y: i32) -> Self {
        PointInt { x, y }
    }
}

/// A size with unsigned integer dimensions, e.g. a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizeInt {
    pub width: u32,
    pub height: u32,
}

impl SizeInt {
    /// Creates a new `SizeInt`.
    pub const fn new(width: u32, height: u32) -> Self {
        SizeInt { width, height }
    }

    /// The rectangle `[0, width) x [0, height)`.
    pub fn bounds(&self) -> RectInt {
        RectInt::from_coords(0, 0, self.width, self.height)
    }
}

/// An integer rectangle with `i32` origin and `u32` size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectInt {
    /// Top-left corner.
    pub origin: PointInt,
    pub size: SizeInt,
}

impl RectInt {
    pub const fn from_coords(x: i32, y: i32, width: u32, height: u32) -> Self {
        RectInt {
            origin: PointInt::new(x, y),
            size: SizeInt::new(width, height),
        }
    }

    pub fn x(&self) -> i32 {
        self.origin.x
    }

    pub fn y(&self) -> i32 {
        self.origin.y
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        i64::from(self.origin.x) + i64::from(self.size.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        i64::from(self.origin.y) + i64::from(self.size.height)
    }

    /// Edges are inclusive for left/top, exclusive for right/bottom.
    pub fn contains_point(&self, point: PointInt) -> bool {
        point.x >= self.left()
            && i64::from(point.x) < self.right()
            && point.y >= self.top()
            && i64::from(point.y) < self.bottom()
    }

    /// True if `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &RectInt) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &RectInt) -> bool {
        i64::from(self.left()) < other.right()
            && self.right() > i64::from(other.left())
            && i64::from(self.top()) < other.bottom()
            && self.bottom() > i64::from(other.top())
    }
}
