//! Dirty-region rectangle and parameter structs for drawing operations.
//!
//! The parameter structs replace long positional argument lists with named
//! fields, grouping semantically related parameters together.

use std::ops::{BitOr, BitOrAssign};

/// An axis-aligned rectangle over real coordinates.
///
/// Used to accumulate the region a [`Gc`](crate::Gc) modified. `Rect::EMPTY`
/// is the identity of `|=`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// The empty rectangle. Unioning it with anything yields the other operand.
    pub const EMPTY: Rect = Rect {
        left: f64::INFINITY,
        top: f64::INFINITY,
        right: f64::NEG_INFINITY,
        bottom: f64::NEG_INFINITY,
    };

    /// Create a rectangle from two corners, in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    /// True when the rectangle covers no point at all.
    ///
    /// A degenerate rectangle (zero width or height) is not empty: it still
    /// names a line or point that was touched.
    pub fn is_empty(&self) -> bool {
        !(self.left <= self.right && self.top <= self.bottom)
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.right - self.left
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.bottom - self.top
        }
    }

    /// Smallest rectangle covering both operands.
    pub fn union(&self, other: &Rect) -> Rect {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Grow the rectangle by `d` on every side.
    pub fn outset(&self, d: f64) -> Rect {
        if self.is_empty() {
            return *self;
        }
        Rect {
            left: self.left - d,
            top: self.top - d,
            right: self.right + d,
            bottom: self.bottom + d,
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        if self.is_empty() {
            return *self;
        }
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Whether the point lies inside or on the border.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        !self.is_empty() && x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.contains(other.left, other.top) && self.contains(other.right, other.bottom))
    }

    /// Whole pixels touched by this rectangle, clipped to `width` x `height`.
    ///
    /// Returns `None` when nothing on the surface is covered.
    pub fn round_out(&self, width: u32, height: u32) -> Option<PixelRect> {
        if self.is_empty() {
            return None;
        }
        let x0 = self.left.floor().max(0.0);
        let y0 = self.top.floor().max(0.0);
        let x1 = self.right.ceil().min(width as f64);
        let y1 = self.bottom.ceil().min(height as f64);
        // A degenerate rect still touches the pixel it sits in.
        let x1 = if x1 <= x0 { (x0 + 1.0).min(width as f64) } else { x1 };
        let y1 = if y1 <= y0 { (y0 + 1.0).min(height as f64) } else { y1 };
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(PixelRect {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::EMPTY
    }
}

impl BitOrAssign for Rect {
    fn bitor_assign(&mut self, rhs: Rect) {
        *self = self.union(&rhs);
    }
}

impl BitOr for Rect {
    type Output = Rect;

    fn bitor(self, rhs: Rect) -> Rect {
        self.union(&rhs)
    }
}

impl From<tiny_skia::Rect> for Rect {
    fn from(r: tiny_skia::Rect) -> Self {
        Rect {
            left: r.left() as f64,
            top: r.top() as f64,
            right: r.right() as f64,
            bottom: r.bottom() as f64,
        }
    }
}

/// An integer pixel region of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parameters for a circular arc.
///
/// Angles are in radians and sweep in the direction of increasing angle,
/// which is clockwise on screen since the y axis points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// X coordinate of the arc center.
    pub x: f64,
    /// Y coordinate of the arc center.
    pub y: f64,
    /// Radius of the arc.
    pub radius: f64,
    /// Starting angle in radians.
    pub start_angle: f64,
    /// Ending angle in radians.
    pub end_angle: f64,
}

/// Parameters for a cubic Bezier curve starting at the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// First control point X.
    pub x0: f64,
    /// First control point Y.
    pub y0: f64,
    /// Second control point X.
    pub xc: f64,
    /// Second control point Y.
    pub yc: f64,
    /// End point X.
    pub x1: f64,
    /// End point Y.
    pub y1: f64,
}

/// Parameters for a rectangle given as origin and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the rectangle origin.
    pub x: f64,
    /// Y coordinate of the rectangle origin.
    pub y: f64,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}
