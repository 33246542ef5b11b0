// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The user transform applied on top of the base display.

use alloc::format;
use alloc::string::String;

use kurbo::Vec2;

use crate::error::InvalidArgument;
use crate::scale::{ScaleFactor, TransformOrigin, lerp_f64, round2};
use crate::short_string::ToShortString;

/// Brings an angle into `[0, 360)`.
fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to a full turn.
    if r >= 360.0 { 0.0 } else { r }
}

/// Picks the pivot two transforms combine about.
///
/// A side whose component is the identity has no meaningful pivot and adopts
/// the other side's.
fn combine_origin(
    this_is_identity: bool,
    this_origin: TransformOrigin,
    other_is_identity: bool,
    other_origin: TransformOrigin,
    mismatch: InvalidArgument,
) -> Result<TransformOrigin, InvalidArgument> {
    if this_is_identity {
        Ok(other_origin)
    } else if other_is_identity || this_origin == other_origin {
        Ok(this_origin)
    } else {
        Err(mismatch)
    }
}

/// Scale, pan and rotation applied to content, with the pivots scale and
/// rotation happen about.
///
/// Every constructor, combinator and deserializer validates, so a `Transform`
/// never carries NaN or an infinite scale or offset. `rotation` is kept in
/// `[0, 360)` degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TransformFields")
)]
pub struct Transform {
    scale: ScaleFactor,
    offset: Vec2,
    rotation: f64,
    scale_origin: TransformOrigin,
    rotation_origin: TransformOrigin,
}

/// Unvalidated wire form of a [`Transform`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TransformFields {
    scale: ScaleFactor,
    offset: Vec2,
    rotation: f64,
    scale_origin: TransformOrigin,
    rotation_origin: TransformOrigin,
}

#[cfg(feature = "serde")]
impl TryFrom<TransformFields> for Transform {
    type Error = InvalidArgument;

    fn try_from(fields: TransformFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.scale,
            fields.offset,
            fields.rotation,
            fields.scale_origin,
            fields.rotation_origin,
        )
    }
}

impl Transform {
    /// The identity transform.
    pub const ORIGIN: Self = Self {
        scale: ScaleFactor::ORIGIN,
        offset: Vec2::ZERO,
        rotation: 0.0,
        scale_origin: TransformOrigin::TOP_START,
        rotation_origin: TransformOrigin::TOP_START,
    };

    /// Creates a transform.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::Unspecified`] when the scale, offset,
    /// rotation or either origin is NaN, or when the scale or offset is
    /// infinite.
    pub fn new(
        scale: ScaleFactor,
        offset: Vec2,
        rotation: f64,
        scale_origin: TransformOrigin,
        rotation_origin: TransformOrigin,
    ) -> Result<Self, InvalidArgument> {
        if !(scale.scale_x.is_finite() && scale.scale_y.is_finite()) {
            return Err(InvalidArgument::Unspecified("scale"));
        }
        if !offset.is_finite() {
            return Err(InvalidArgument::Unspecified("offset"));
        }
        if !rotation.is_finite() {
            return Err(InvalidArgument::Unspecified("rotation"));
        }
        if !scale_origin.is_specified() {
            return Err(InvalidArgument::Unspecified("scale origin"));
        }
        if !rotation_origin.is_specified() {
            return Err(InvalidArgument::Unspecified("rotation origin"));
        }
        Ok(Self {
            scale,
            offset,
            rotation: normalize_degrees(rotation),
            scale_origin,
            rotation_origin,
        })
    }

    /// A pure scale about `scale_origin`.
    ///
    /// # Errors
    ///
    /// As [`Transform::new`].
    pub fn from_scale(
        scale: ScaleFactor,
        scale_origin: TransformOrigin,
    ) -> Result<Self, InvalidArgument> {
        Self::new(
            scale,
            Vec2::ZERO,
            0.0,
            scale_origin,
            TransformOrigin::TOP_START,
        )
    }

    /// A pure translation.
    ///
    /// # Errors
    ///
    /// As [`Transform::new`].
    pub fn from_offset(offset: Vec2) -> Result<Self, InvalidArgument> {
        Self::new(
            ScaleFactor::ORIGIN,
            offset,
            0.0,
            TransformOrigin::TOP_START,
            TransformOrigin::TOP_START,
        )
    }

    /// The scale component.
    #[must_use]
    pub const fn scale(&self) -> ScaleFactor {
        self.scale
    }

    /// The translation component.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The rotation in degrees, within `[0, 360)`.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Pivot of the scale component.
    #[must_use]
    pub const fn scale_origin(&self) -> TransformOrigin {
        self.scale_origin
    }

    /// Pivot of the rotation component.
    #[must_use]
    pub const fn rotation_origin(&self) -> TransformOrigin {
        self.rotation_origin
    }

    /// Returns `true` when the rotation is a whole number of turns.
    #[must_use]
    pub fn is_rotation_origin(&self) -> bool {
        self.rotation == 0.0
    }

    /// Returns `true` when scale, offset and rotation are all identity.
    #[must_use]
    pub fn is_origin(&self) -> bool {
        self.scale.is_origin() && self.offset == Vec2::ZERO && self.is_rotation_origin()
    }

    fn combined_origins(
        &self,
        other: &Self,
    ) -> Result<(TransformOrigin, TransformOrigin), InvalidArgument> {
        let scale_origin = combine_origin(
            self.scale.is_origin(),
            self.scale_origin,
            other.scale.is_origin(),
            other.scale_origin,
            InvalidArgument::ScaleOriginMismatch,
        )?;
        let rotation_origin = combine_origin(
            self.is_rotation_origin(),
            self.rotation_origin,
            other.is_rotation_origin(),
            other.rotation_origin,
            InvalidArgument::RotationOriginMismatch,
        )?;
        Ok((scale_origin, rotation_origin))
    }

    /// Applies `other` on top of this transform.
    ///
    /// Scales multiply, offsets and rotations add.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidArgument::ScaleOriginMismatch`] when both sides
    /// scale about different pivots, and with
    /// [`InvalidArgument::RotationOriginMismatch`] for rotation likewise.
    /// A result that overflows to infinity fails as in [`Transform::new`].
    pub fn plus(&self, other: &Self) -> Result<Self, InvalidArgument> {
        let (scale_origin, rotation_origin) = self.combined_origins(other)?;
        Self::new(
            self.scale * other.scale,
            self.offset + other.offset,
            self.rotation + other.rotation,
            scale_origin,
            rotation_origin,
        )
    }

    /// Removes `other` from this transform, undoing [`Transform::plus`].
    ///
    /// # Errors
    ///
    /// As [`Transform::plus`]. Removing a zero scale fails with
    /// [`InvalidArgument::Unspecified`].
    pub fn minus(&self, other: &Self) -> Result<Self, InvalidArgument> {
        let (scale_origin, rotation_origin) = self.combined_origins(other)?;
        Self::new(
            self.scale / other.scale,
            self.offset - other.offset,
            self.rotation - other.rotation,
            scale_origin,
            rotation_origin,
        )
    }

    /// Interpolates from `start` to `stop`; `fraction` 0 is `start`, 1 is `stop`.
    ///
    /// # Errors
    ///
    /// As [`Transform::plus`].
    pub fn lerp(start: &Self, stop: &Self, fraction: f64) -> Result<Self, InvalidArgument> {
        let (scale_origin, rotation_origin) = start.combined_origins(stop)?;
        Self::new(
            start.scale.lerp(stop.scale, fraction),
            start.offset.lerp(stop.offset, fraction),
            lerp_f64(start.rotation, stop.rotation, fraction),
            scale_origin,
            rotation_origin,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl ToShortString for Transform {
    fn to_short_string(&self) -> String {
        format!(
            "({},{},{:?},{},{})",
            self.scale.to_short_string(),
            self.offset.to_short_string(),
            round2(self.rotation),
            self.scale_origin.to_short_string(),
            self.rotation_origin.to_short_string(),
        )
    }
}
