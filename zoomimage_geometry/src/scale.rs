// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Div, Mul};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size, Vec2};

/// Rounds to two decimals, the precision at which scales are compared.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Linear interpolation between two scalars.
pub(crate) fn lerp_f64(start: f64, stop: f64, fraction: f64) -> f64 {
    start + (stop - start) * fraction
}

/// Independent horizontal and vertical scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleFactor {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
}

impl ScaleFactor {
    /// The identity scale.
    pub const ORIGIN: Self = Self::new(1.0, 1.0);

    /// Sentinel for "no scale computed yet".
    pub const UNSPECIFIED: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates a scale factor.
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64) -> Self {
        Self { scale_x, scale_y }
    }

    /// Creates a scale factor with the same value on both axes.
    #[must_use]
    pub const fn uniform(scale: f64) -> Self {
        Self::new(scale, scale)
    }

    /// Returns `true` when both components round to `1.00`.
    ///
    /// This tolerates the sub-percent drift left over by repeated
    /// multiply/divide cycles.
    #[must_use]
    pub fn is_origin(self) -> bool {
        round2(self.scale_x) == 1.0 && round2(self.scale_y) == 1.0
    }

    /// Returns `true` unless either component is NaN.
    #[must_use]
    pub fn is_specified(self) -> bool {
        !self.scale_x.is_nan() && !self.scale_y.is_nan()
    }

    /// Interpolates both components.
    #[must_use]
    pub fn lerp(self, stop: Self, fraction: f64) -> Self {
        Self::new(
            lerp_f64(self.scale_x, stop.scale_x, fraction),
            lerp_f64(self.scale_y, stop.scale_y, fraction),
        )
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Mul for ScaleFactor {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.scale_x * rhs.scale_x, self.scale_y * rhs.scale_y)
    }
}

impl Div for ScaleFactor {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.scale_x / rhs.scale_x, self.scale_y / rhs.scale_y)
    }
}

impl Mul<f64> for ScaleFactor {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.scale_x * rhs, self.scale_y * rhs)
    }
}

impl Mul<ScaleFactor> for Size {
    type Output = Self;

    fn mul(self, rhs: ScaleFactor) -> Self {
        Self::new(self.width * rhs.scale_x, self.height * rhs.scale_y)
    }
}

impl Div<ScaleFactor> for Size {
    type Output = Self;

    fn div(self, rhs: ScaleFactor) -> Self {
        Self::new(self.width / rhs.scale_x, self.height / rhs.scale_y)
    }
}

impl Mul<ScaleFactor> for Point {
    type Output = Self;

    fn mul(self, rhs: ScaleFactor) -> Self {
        Self::new(self.x * rhs.scale_x, self.y * rhs.scale_y)
    }
}

impl Div<ScaleFactor> for Point {
    type Output = Self;

    fn div(self, rhs: ScaleFactor) -> Self {
        Self::new(self.x / rhs.scale_x, self.y / rhs.scale_y)
    }
}

impl Mul<ScaleFactor> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: ScaleFactor) -> Self {
        Self::new(self.x * rhs.scale_x, self.y * rhs.scale_y)
    }
}

impl Div<ScaleFactor> for Vec2 {
    type Output = Self;

    fn div(self, rhs: ScaleFactor) -> Self {
        Self::new(self.x / rhs.scale_x, self.y / rhs.scale_y)
    }
}

impl Mul<ScaleFactor> for Rect {
    type Output = Self;

    /// Scales every edge about the coordinate origin.
    fn mul(self, rhs: ScaleFactor) -> Self {
        Self::new(
            self.x0 * rhs.scale_x,
            self.y0 * rhs.scale_y,
            self.x1 * rhs.scale_x,
            self.y1 * rhs.scale_y,
        )
    }
}

impl Div<ScaleFactor> for Rect {
    type Output = Self;

    fn div(self, rhs: ScaleFactor) -> Self {
        Self::new(
            self.x0 / rhs.scale_x,
            self.y0 / rhs.scale_y,
            self.x1 / rhs.scale_x,
            self.y1 / rhs.scale_y,
        )
    }
}

/// Pivot for scale or rotation, as fractions of the content size.
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right. Values
/// outside `[0, 1]` are legal and place the pivot outside the content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformOrigin {
    /// Horizontal pivot fraction.
    pub pivot_fraction_x: f64,
    /// Vertical pivot fraction.
    pub pivot_fraction_y: f64,
}

impl TransformOrigin {
    /// Pivot at the top-left corner.
    pub const TOP_START: Self = Self::new(0.0, 0.0);

    /// Pivot at the centre.
    pub const CENTER: Self = Self::new(0.5, 0.5);

    /// Sentinel for "no pivot chosen yet".
    pub const UNSPECIFIED: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates a pivot from its fractions.
    #[must_use]
    pub const fn new(pivot_fraction_x: f64, pivot_fraction_y: f64) -> Self {
        Self {
            pivot_fraction_x,
            pivot_fraction_y,
        }
    }

    /// Returns `true` unless either fraction is NaN.
    #[must_use]
    pub fn is_specified(self) -> bool {
        !self.pivot_fraction_x.is_nan() && !self.pivot_fraction_y.is_nan()
    }

    /// Resolves the pivot against a concrete size.
    #[must_use]
    pub fn resolve(self, size: Size) -> Point {
        Point::new(
            self.pivot_fraction_x * size.width,
            self.pivot_fraction_y * size.height,
        )
    }

    /// Interpolates both fractions.
    #[must_use]
    pub fn lerp(self, stop: Self, fraction: f64) -> Self {
        Self::new(
            lerp_f64(self.pivot_fraction_x, stop.pivot_fraction_x, fraction),
            lerp_f64(self.pivot_fraction_y, stop.pivot_fraction_y, fraction),
        )
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::TOP_START
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{ScaleFactor, TransformOrigin};

    #[test]
    fn is_origin_tolerates_rounding_drift() {
        assert!(ScaleFactor::ORIGIN.is_origin());
        assert!(ScaleFactor::new(1.004, 0.996).is_origin());
        assert!(!ScaleFactor::new(1.006, 1.0).is_origin());
        assert!(!ScaleFactor::uniform(2.0).is_origin());
    }

    #[test]
    fn unspecified_is_detected() {
        assert!(!ScaleFactor::UNSPECIFIED.is_specified());
        assert!(!ScaleFactor::new(1.0, f64::NAN).is_specified());
        assert!(ScaleFactor::ORIGIN.is_specified());
        assert!(!TransformOrigin::UNSPECIFIED.is_specified());
    }

    #[test]
    fn scales_geometry_per_axis() {
        let factor = ScaleFactor::new(2.0, 0.5);
        assert_eq!(Size::new(100.0, 50.0) * factor, Size::new(200.0, 25.0));
        assert_eq!(Point::new(10.0, 10.0) * factor, Point::new(20.0, 5.0));
        assert_eq!(Point::new(20.0, 5.0) / factor, Point::new(10.0, 10.0));
        assert_eq!(
            Rect::new(1.0, 2.0, 3.0, 4.0) * factor,
            Rect::new(2.0, 1.0, 6.0, 2.0)
        );
        assert_eq!(factor * factor, ScaleFactor::new(4.0, 0.25));
    }

    #[test]
    fn lerp_and_resolve() {
        let mid = ScaleFactor::ORIGIN.lerp(ScaleFactor::uniform(3.0), 0.5);
        assert_eq!(mid, ScaleFactor::uniform(2.0));
        let pivot = TransformOrigin::CENTER.resolve(Size::new(200.0, 100.0));
        assert_eq!(pivot, Point::new(100.0, 50.0));
    }
}
