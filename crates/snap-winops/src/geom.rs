//! Integer geometry primitives shared by the decoder, resolver and effectors.
//!
//! Coordinates follow the CoreGraphics global convention: origin at the top-left
//! of the primary display, `y` growing downward. Rectangles are half-open, so a
//! display spanning `x = 0..1920` does not contain the column `x = 1920`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

/// Pixel rectangle `(x, y, w, h)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle from origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `0x0` rectangle at the origin.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Top-left corner.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// Inclusive left edge.
    #[inline]
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Exclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Inclusive top edge.
    #[inline]
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Center in doubled coordinates, which keeps odd sizes exact.
    #[inline]
    fn center2(&self) -> (i64, i64) {
        (
            2 * i64::from(self.x) + i64::from(self.w),
            2 * i64::from(self.y) + i64::from(self.h),
        )
    }

    /// True when the center of `other` lies inside `self` (half-open).
    #[must_use]
    pub fn contains_center_of(&self, other: &Self) -> bool {
        if self.is_empty() {
            return false;
        }
        let (cx2, cy2) = other.center2();
        let l = 2 * i64::from(self.left());
        let r = 2 * i64::from(self.right());
        let t = 2 * i64::from(self.top());
        let b = 2 * i64::from(self.bottom());
        cx2 >= l && cx2 < r && cy2 >= t && cy2 < b
    }

    /// True when `other` lies entirely within `self`.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersection of two rectangles, if they share any pixel.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x = self.left().max(other.left());
        let y = self.top().max(other.top());
        let w = overlap_1d(self.left(), self.right(), other.left(), other.right());
        let h = overlap_1d(self.top(), self.bottom(), other.top(), other.bottom());
        let r = Self::new(x, y, w, h);
        (!r.is_empty()).then_some(r)
    }

    /// Overlapping area in square pixels (zero when disjoint).
    #[must_use]
    pub fn overlap_area(&self, other: &Self) -> i64 {
        self.intersection(other)
            .map(|r| i64::from(r.w) * i64::from(r.h))
            .unwrap_or(0)
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Express a global rectangle relative to `origin`.
    #[must_use]
    pub const fn to_local(&self, origin: Point) -> Self {
        self.offset(-origin.x, -origin.y)
    }

    /// Express a rectangle local to `origin` in global coordinates.
    #[must_use]
    pub const fn to_global(&self, origin: Point) -> Self {
        self.offset(origin.x, origin.y)
    }

    /// Shrink to fit within `bounds`, then shift so every edge lies inside.
    #[must_use]
    pub fn clamp_within(&self, bounds: &Self) -> Self {
        let w = self.w.clamp(0, bounds.w.max(0));
        let h = self.h.clamp(0, bounds.h.max(0));
        let x = self.x.clamp(bounds.left(), (bounds.right() - w).max(bounds.left()));
        let y = self.y.clamp(bounds.top(), (bounds.bottom() - h).max(bounds.top()));
        Self::new(x, y, w, h)
    }

    /// Split at the horizontal midpoint; the left part takes the odd pixel.
    #[must_use]
    pub fn split_halves(&self) -> (Self, Self) {
        let left_w = self.w - self.w / 2;
        let left = Self::new(self.x, self.y, left_w, self.h);
        let right = Self::new(self.x + left_w, self.y, self.w - left_w, self.h);
        (left, right)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.w, self.h)
    }
}

/// Length of the overlap between `[a1, a2)` and `[b1, b2)`.
#[inline]
#[must_use]
pub fn overlap_1d(a1: i32, a2: i32, b1: i32, b2: i32) -> i32 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0)
}

/// Map `offset` within a span of `from_len` to the same fraction of `to_len`.
///
/// Rounds to the nearest pixel; a zero-length source span maps to zero.
#[must_use]
pub fn rescale(offset: i32, from_len: i32, to_len: i32) -> i32 {
    if from_len <= 0 {
        return 0;
    }
    let scaled = f64::from(offset) * f64::from(to_len) / f64::from(from_len);
    scaled.round() as i32
}
