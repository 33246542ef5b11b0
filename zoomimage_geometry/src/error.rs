// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument validation errors.

use core::fmt;

/// Error returned when an argument violates a documented contract.
///
/// Numeric edge cases (empty sizes, out-of-bounds points, extreme aspect
/// ratios) never produce this error; they yield a degenerate geometric result
/// instead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// A rotation angle that is not a multiple of 90 degrees.
    Rotation(i32),
    /// A name that does not belong to a closed set of named variants.
    UnknownName {
        /// The kind of value being looked up, e.g. `"ContentScale"`.
        kind: &'static str,
        /// The rejected name.
        name: alloc::string::String,
    },
    /// A name was requested for a custom policy outside the named set.
    UnsupportedVariant {
        /// The kind of policy, e.g. `"Alignment"`.
        kind: &'static str,
    },
    /// Two transforms with non-default scale carry different scale origins.
    ScaleOriginMismatch,
    /// Two transforms with non-default rotation carry different rotation origins.
    RotationOriginMismatch,
    /// An unspecified (NaN) value where a concrete one is required.
    Unspecified(&'static str),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotation(degrees) => {
                write!(f, "rotation must be a multiple of 90, got {degrees}")
            }
            Self::UnknownName { kind, name } => write!(f, "unknown {kind} name: {name:?}"),
            Self::UnsupportedVariant { kind } => {
                write!(f, "custom {kind} has no registered name")
            }
            Self::ScaleOriginMismatch => {
                f.write_str("transforms with non-default scale must share a scale origin")
            }
            Self::RotationOriginMismatch => {
                f.write_str("transforms with non-default rotation must share a rotation origin")
            }
            Self::Unspecified(what) => write!(f, "{what} must be specified"),
        }
    }
}

impl core::error::Error for InvalidArgument {}
