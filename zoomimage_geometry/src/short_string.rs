// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact human-readable forms and the "unspecified" sentinel convention.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};

use crate::int_geometry::{IntOffset, IntRect, IntSize};
use crate::scale::{ScaleFactor, TransformOrigin, round2};

const UNSPECIFIED_TEXT: &str = "Unspecified";

/// Float value types that carry a NaN "not known yet" sentinel.
pub trait Unspecified: Copy {
    /// The sentinel value.
    const UNSPECIFIED: Self;

    /// Returns `true` unless the value is (or contains) the sentinel.
    fn is_specified(&self) -> bool;

    /// Returns `true` when the value is the sentinel.
    fn is_unspecified(&self) -> bool {
        !self.is_specified()
    }
}

impl Unspecified for Size {
    const UNSPECIFIED: Self = Self::new(f64::NAN, f64::NAN);

    fn is_specified(&self) -> bool {
        !self.width.is_nan() && !self.height.is_nan()
    }
}

impl Unspecified for Point {
    const UNSPECIFIED: Self = Self::new(f64::NAN, f64::NAN);

    fn is_specified(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl Unspecified for Vec2 {
    const UNSPECIFIED: Self = Self::new(f64::NAN, f64::NAN);

    fn is_specified(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl Unspecified for ScaleFactor {
    const UNSPECIFIED: Self = Self::UNSPECIFIED;

    fn is_specified(&self) -> bool {
        Self::is_specified(*self)
    }
}

impl Unspecified for TransformOrigin {
    const UNSPECIFIED: Self = Self::UNSPECIFIED;

    fn is_specified(&self) -> bool {
        Self::is_specified(*self)
    }
}

/// Compact string form used in logs and test failure messages.
///
/// Float components are rounded to two decimals.
pub trait ToShortString {
    /// Formats the value compactly, e.g. `"100.0x50.0"` for a size.
    fn to_short_string(&self) -> String;
}

fn pair(a: f64, b: f64) -> String {
    format!("{:?}x{:?}", round2(a), round2(b))
}

impl ToShortString for Size {
    fn to_short_string(&self) -> String {
        if self.is_specified() {
            pair(self.width, self.height)
        } else {
            UNSPECIFIED_TEXT.into()
        }
    }
}

impl ToShortString for Point {
    fn to_short_string(&self) -> String {
        if self.is_specified() {
            pair(self.x, self.y)
        } else {
            UNSPECIFIED_TEXT.into()
        }
    }
}

impl ToShortString for Vec2 {
    fn to_short_string(&self) -> String {
        if self.is_specified() {
            pair(self.x, self.y)
        } else {
            UNSPECIFIED_TEXT.into()
        }
    }
}

impl ToShortString for Rect {
    fn to_short_string(&self) -> String {
        format!("[{},{}]", pair(self.x0, self.y0), pair(self.x1, self.y1))
    }
}

impl ToShortString for ScaleFactor {
    fn to_short_string(&self) -> String {
        if self.is_specified() {
            pair(self.scale_x, self.scale_y)
        } else {
            UNSPECIFIED_TEXT.into()
        }
    }
}

impl ToShortString for TransformOrigin {
    fn to_short_string(&self) -> String {
        if self.is_specified() {
            pair(self.pivot_fraction_x, self.pivot_fraction_y)
        } else {
            UNSPECIFIED_TEXT.into()
        }
    }
}

impl ToShortString for IntSize {
    fn to_short_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl ToShortString for IntOffset {
    fn to_short_string(&self) -> String {
        format!("{}x{}", self.x, self.y)
    }
}

impl ToShortString for IntRect {
    fn to_short_string(&self) -> String {
        format!(
            "[{}x{},{}x{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}
