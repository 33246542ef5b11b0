// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarter-turn rotation of sizes, points and rects inside a bounding space.
//!
//! Rotation is clockwise. A value rotated inside a `W×H` space lands in the
//! rotated space (`H×W` for quarter turns), and reverse rotation takes the same
//! un-rotated space so that the two calls compose to the identity.

use kurbo::{Point, Rect, Size};

use crate::error::InvalidArgument;
use crate::int_geometry::{IntOffset, IntRect, IntSize};

/// A rotation by a whole number of quarter turns, clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise.
    R270,
}

impl Rotation {
    /// Normalises any multiple of 90 degrees (negative or beyond one turn).
    ///
    /// Any other angle fails with [`InvalidArgument::Rotation`].
    pub fn from_degrees(degrees: i32) -> Result<Self, InvalidArgument> {
        if degrees % 90 != 0 {
            return Err(InvalidArgument::Rotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => Self::R0,
            90 => Self::R90,
            180 => Self::R180,
            _ => Self::R270,
        })
    }

    /// The rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::R0 => Self::R0,
            Self::R90 => Self::R270,
            Self::R180 => Self::R180,
            Self::R270 => Self::R90,
        }
    }

    /// Returns `true` for 90 and 270 degrees, which swap width and height.
    #[must_use]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = InvalidArgument;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Values that can be rotated by quarter turns inside a bounding space.
pub trait Rotate: Sized {
    /// The type describing the bounding space.
    type Space: Copy;

    /// Rotates `self`, located inside `space`, into the rotated space.
    #[must_use]
    fn rotate_in_space(self, space: Self::Space, rotation: Rotation) -> Self;

    /// Undoes [`Rotate::rotate_in_space`] for the same `space` and `rotation`.
    #[must_use]
    fn reverse_rotate_in_space(self, space: Self::Space, rotation: Rotation) -> Self;
}

/// Rotates `value` inside `space` by `degrees`, which must be a multiple of 90.
pub fn rotate<T: Rotate>(value: T, space: T::Space, degrees: i32) -> Result<T, InvalidArgument> {
    Ok(value.rotate_in_space(space, Rotation::from_degrees(degrees)?))
}

/// Undoes [`rotate`] for the same `space` and `degrees`.
pub fn reverse_rotate<T: Rotate>(
    value: T,
    space: T::Space,
    degrees: i32,
) -> Result<T, InvalidArgument> {
    Ok(value.reverse_rotate_in_space(space, Rotation::from_degrees(degrees)?))
}

/// The size of `space` after rotating it.
fn rotated_space(space: Size, rotation: Rotation) -> Size {
    if rotation.swaps_axes() {
        Size::new(space.height, space.width)
    } else {
        space
    }
}

impl Rotate for Size {
    type Space = Self;

    /// Sizes only care whether the axes swap; the space is ignored.
    fn rotate_in_space(self, _space: Self, rotation: Rotation) -> Self {
        rotated_space(self, rotation)
    }

    fn reverse_rotate_in_space(self, _space: Self, rotation: Rotation) -> Self {
        rotated_space(self, rotation)
    }
}

impl Rotate for Point {
    type Space = Size;

    fn rotate_in_space(self, space: Size, rotation: Rotation) -> Self {
        match rotation {
            Rotation::R0 => self,
            Rotation::R90 => Self::new(space.height - self.y, self.x),
            Rotation::R180 => Self::new(space.width - self.x, space.height - self.y),
            Rotation::R270 => Self::new(self.y, space.width - self.x),
        }
    }

    fn reverse_rotate_in_space(self, space: Size, rotation: Rotation) -> Self {
        self.rotate_in_space(rotated_space(space, rotation), rotation.inverse())
    }
}

impl Rotate for Rect {
    type Space = Size;

    fn rotate_in_space(self, space: Size, rotation: Rotation) -> Self {
        let a = Point::new(self.x0, self.y0).rotate_in_space(space, rotation);
        let b = Point::new(self.x1, self.y1).rotate_in_space(space, rotation);
        Self::from_points(a, b)
    }

    fn reverse_rotate_in_space(self, space: Size, rotation: Rotation) -> Self {
        self.rotate_in_space(rotated_space(space, rotation), rotation.inverse())
    }
}

impl Rotate for IntSize {
    type Space = Self;

    fn rotate_in_space(self, _space: Self, rotation: Rotation) -> Self {
        if rotation.swaps_axes() {
            self.swapped()
        } else {
            self
        }
    }

    fn reverse_rotate_in_space(self, space: Self, rotation: Rotation) -> Self {
        self.rotate_in_space(space, rotation)
    }
}

impl Rotate for IntOffset {
    type Space = IntSize;

    fn rotate_in_space(self, space: IntSize, rotation: Rotation) -> Self {
        match rotation {
            Rotation::R0 => self,
            Rotation::R90 => Self::new(space.height - self.y, self.x),
            Rotation::R180 => Self::new(space.width - self.x, space.height - self.y),
            Rotation::R270 => Self::new(self.y, space.width - self.x),
        }
    }

    fn reverse_rotate_in_space(self, space: IntSize, rotation: Rotation) -> Self {
        self.rotate_in_space(space.rotate_in_space(space, rotation), rotation.inverse())
    }
}

impl Rotate for IntRect {
    type Space = IntSize;

    fn rotate_in_space(self, space: IntSize, rotation: Rotation) -> Self {
        let a = self.top_left().rotate_in_space(space, rotation);
        let b = self.bottom_right().rotate_in_space(space, rotation);
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    fn reverse_rotate_in_space(self, space: IntSize, rotation: Rotation) -> Self {
        self.rotate_in_space(space.rotate_in_space(space, rotation), rotation.inverse())
    }
}
