// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of a child box inside a space.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Size};

use crate::error::InvalidArgument;
use crate::int_geometry::{IntOffset, IntSize};

/// Reading direction, which decides where `Start` and `End` are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Left to right: `Start` is the left edge.
    #[default]
    Ltr,
    /// Right to left: `Start` is the right edge.
    Rtl,
}

/// Computes the top-left offset of a child placed inside a space.
///
/// [`Alignment`] covers the nine named placements. Custom implementations
/// have no name and cannot be looked up.
pub trait AlignmentPolicy {
    /// Top-left offset of `child` inside `space`.
    ///
    /// The offset may be negative when the child is larger than the space.
    fn align(&self, child: Size, space: Size, direction: LayoutDirection) -> Point;

    /// The registered name of this policy.
    ///
    /// Custom policies fail with [`InvalidArgument::UnsupportedVariant`].
    fn name(&self) -> Result<&'static str, InvalidArgument> {
        Err(InvalidArgument::UnsupportedVariant { kind: "Alignment" })
    }
}

impl<T: AlignmentPolicy + ?Sized> AlignmentPolicy for &T {
    fn align(&self, child: Size, space: Size, direction: LayoutDirection) -> Point {
        (**self).align(child, space, direction)
    }

    fn name(&self) -> Result<&'static str, InvalidArgument> {
        (**self).name()
    }
}

/// The nine named placements: `{Top, Center, Bottom} × {Start, Center, End}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Top edge, leading side.
    TopStart,
    /// Top edge, horizontally centred.
    TopCenter,
    /// Top edge, trailing side.
    TopEnd,
    /// Vertically centred, leading side.
    CenterStart,
    /// Centred on both axes.
    #[default]
    Center,
    /// Vertically centred, trailing side.
    CenterEnd,
    /// Bottom edge, leading side.
    BottomStart,
    /// Bottom edge, horizontally centred.
    BottomCenter,
    /// Bottom edge, trailing side.
    BottomEnd,
}

impl Alignment {
    /// Every named placement, row by row.
    pub const ALL: [Self; 9] = [
        Self::TopStart,
        Self::TopCenter,
        Self::TopEnd,
        Self::CenterStart,
        Self::Center,
        Self::CenterEnd,
        Self::BottomStart,
        Self::BottomCenter,
        Self::BottomEnd,
    ];

    /// The stable name of this placement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopStart => "TopStart",
            Self::TopCenter => "TopCenter",
            Self::TopEnd => "TopEnd",
            Self::CenterStart => "CenterStart",
            Self::Center => "Center",
            Self::CenterEnd => "CenterEnd",
            Self::BottomStart => "BottomStart",
            Self::BottomCenter => "BottomCenter",
            Self::BottomEnd => "BottomEnd",
        }
    }

    /// Horizontal bias: `-1` start, `0` centre, `1` end (before direction).
    #[must_use]
    pub const fn horizontal_bias(self) -> f64 {
        match self {
            Self::TopStart | Self::CenterStart | Self::BottomStart => -1.0,
            Self::TopCenter | Self::Center | Self::BottomCenter => 0.0,
            Self::TopEnd | Self::CenterEnd | Self::BottomEnd => 1.0,
        }
    }

    /// Vertical bias: `-1` top, `0` centre, `1` bottom.
    #[must_use]
    pub const fn vertical_bias(self) -> f64 {
        match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => -1.0,
            Self::CenterStart | Self::Center | Self::CenterEnd => 0.0,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => 1.0,
        }
    }

    /// Returns `true` for the start column.
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::TopStart | Self::CenterStart | Self::BottomStart)
    }

    /// Returns `true` for the horizontally centred column.
    #[must_use]
    pub const fn is_horizontal_center(self) -> bool {
        matches!(self, Self::TopCenter | Self::Center | Self::BottomCenter)
    }

    /// Returns `true` for the end column.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::TopEnd | Self::CenterEnd | Self::BottomEnd)
    }

    /// Returns `true` for the top row.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopStart | Self::TopCenter | Self::TopEnd)
    }

    /// Returns `true` for the vertically centred row.
    #[must_use]
    pub const fn is_vertical_center(self) -> bool {
        matches!(self, Self::CenterStart | Self::Center | Self::CenterEnd)
    }

    /// Returns `true` for the bottom row.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::BottomStart | Self::BottomCenter | Self::BottomEnd)
    }

    /// Integer placement, rounding each axis half-up.
    #[must_use]
    pub fn align_int(self, child: IntSize, space: IntSize, direction: LayoutDirection) -> IntOffset {
        IntOffset::from_point_rounded(self.align(child.to_size(), space.to_size(), direction))
    }
}

impl AlignmentPolicy for Alignment {
    fn align(&self, child: Size, space: Size, direction: LayoutDirection) -> Point {
        let horizontal = match direction {
            LayoutDirection::Ltr => self.horizontal_bias(),
            LayoutDirection::Rtl => -self.horizontal_bias(),
        };
        // Bias in [-1, 1] maps to a fraction of the free space in [0, 1].
        let fraction_x = (1.0 + horizontal) / 2.0;
        let fraction_y = (1.0 + self.vertical_bias()) / 2.0;
        Point::new(
            fraction_x * (space.width - child.width),
            fraction_y * (space.height - child.height),
        )
    }

    fn name(&self) -> Result<&'static str, InvalidArgument> {
        Ok(self.as_str())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.as_str() == s)
            .ok_or_else(|| InvalidArgument::UnknownName {
                kind: "Alignment",
                name: s.into(),
            })
    }
}
