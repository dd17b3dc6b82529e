//! Geometry primitives: [`Point`] and [`Orientation`].
//!
//! All coordinates in the engine use screen conventions: `x` is the column
//! and grows right, `y` is the row and grows down. The path finder and the
//! playback stream emit points in this axis order; it is a contract, not an
//! implementation detail, since the rendering host indexes its grid with
//! the same order.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours in the engine's fixed scan order:
    /// **up, down, left, right**.
    ///
    /// Every neighbour scan in the workspace (traversal expansion and the
    /// path finder's edge relaxation alike) evaluates directions in this
    /// order, which pins down visit order and shortest-path tie-breaks.
    #[inline]
    pub fn scan_neighbors(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Discrete direction of one playback step relative to its successor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Derive the orientation of the move `from -> to`.
    ///
    /// Returns `None` unless `to` is exactly one cardinal step away from
    /// `from`.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match to - from {
            Point { x: 0, y: -1 } => Some(Self::Up),
            Point { x: 0, y: 1 } => Some(Self::Down),
            Point { x: -1, y: 0 } => Some(Self::Left),
            Point { x: 1, y: 0 } => Some(Self::Right),
            _ => None,
        }
    }

    /// The unit delta this orientation moves by.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}
