// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer sizes, offsets and rectangles as produced by layout measurement.

use core::ops::{Add, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Point, Rect, Size, Vec2};

/// Rounds half-up (`floor(v + 0.5)`), matching layout pixel snapping.
///
/// Negative halves round towards positive infinity: `-2.5` becomes `-2`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "layout coordinates are far inside the i32 range"
)]
#[must_use]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Integer width and height in layout pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl IntSize {
    /// The empty size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a size from a width and a height.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when either dimension is zero or negative.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns the size with width and height exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Converts into a float size.
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Rounds a float size half-up on each dimension.
    #[must_use]
    pub fn from_size_rounded(size: Size) -> Self {
        Self::new(round_half_up(size.width), round_half_up(size.height))
    }
}

impl From<(i32, i32)> for IntSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// Integer point or displacement in layout pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntOffset {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
}

impl IntOffset {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates an offset from its components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts into a float point.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Converts into a float vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Rounds a float point half-up on each axis.
    #[must_use]
    pub fn from_point_rounded(point: Point) -> Self {
        Self::new(round_half_up(point.x), round_half_up(point.y))
    }
}

impl From<(i32, i32)> for IntOffset {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for IntOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for IntOffset {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for IntOffset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Integer rectangle given by its four edges.
///
/// Edges are not normalised: a rect with `right < left` is a valid value and
/// reads as empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntRect {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl IntRect {
    /// The empty rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rect from its edges.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rect from a top-left offset and a size.
    #[must_use]
    pub const fn from_offset_size(offset: IntOffset, size: IntSize) -> Self {
        Self::new(
            offset.x,
            offset.y,
            offset.x + size.width,
            offset.y + size.height,
        )
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Width and height as a size.
    #[must_use]
    pub const fn size(self) -> IntSize {
        IntSize::new(self.width(), self.height())
    }

    /// The top-left corner.
    #[must_use]
    pub const fn top_left(self) -> IntOffset {
        IntOffset::new(self.left, self.top)
    }

    /// The bottom-right corner.
    #[must_use]
    pub const fn bottom_right(self) -> IntOffset {
        IntOffset::new(self.right, self.bottom)
    }

    /// Returns `true` when the rect has no area.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Converts into a float rect.
    #[must_use]
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Rounds each edge of a float rect independently, half-up.
    #[must_use]
    pub fn from_rect_rounded(rect: Rect) -> Self {
        Self::new(
            round_half_up(rect.x0),
            round_half_up(rect.y0),
            round_half_up(rect.x1),
            round_half_up(rect.y1),
        )
    }

    /// Clamps every edge into `[0, size]`.
    #[must_use]
    pub fn limit_to(self, size: IntSize) -> Self {
        Self::new(
            self.left.clamp(0, size.width.max(0)),
            self.top.clamp(0, size.height.max(0)),
            self.right.clamp(0, size.width.max(0)),
            self.bottom.clamp(0, size.height.max(0)),
        )
    }
}
