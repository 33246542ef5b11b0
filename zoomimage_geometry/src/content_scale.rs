// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Policies deciding how intrinsic content is scaled into its container.

use core::fmt;
use core::str::FromStr;

use kurbo::Size;

use crate::error::InvalidArgument;
use crate::scale::ScaleFactor;

/// Computes the factor that scales a source size into a destination size.
///
/// [`ContentScale`] covers the named policies. Implement this trait for
/// custom behaviour; custom policies have no name and cannot be looked up.
pub trait ContentScalePolicy {
    /// The factor applied to `src` so that it relates to `dst` per this policy.
    fn compute_scale_factor(&self, src: Size, dst: Size) -> ScaleFactor;

    /// The registered name of this policy.
    ///
    /// Custom policies fail with [`InvalidArgument::UnsupportedVariant`].
    fn name(&self) -> Result<&'static str, InvalidArgument> {
        Err(InvalidArgument::UnsupportedVariant {
            kind: "ContentScale",
        })
    }
}

impl<T: ContentScalePolicy + ?Sized> ContentScalePolicy for &T {
    fn compute_scale_factor(&self, src: Size, dst: Size) -> ScaleFactor {
        (**self).compute_scale_factor(src, dst)
    }

    fn name(&self) -> Result<&'static str, InvalidArgument> {
        (**self).name()
    }
}

/// The named content scale policies.
///
/// With `wr = dst.width / src.width` and `hr = dst.height / src.height`:
///
/// | Policy       | Factor                 |
/// |--------------|------------------------|
/// | `None`       | `1`                    |
/// | `Inside`     | `min(wr, hr, 1)`       |
/// | `Fit`        | `min(wr, hr)`          |
/// | `FillWidth`  | `wr`                   |
/// | `FillHeight` | `hr`                   |
/// | `FillBounds` | `(wr, hr)`, non-uniform|
/// | `Crop`       | `max(wr, hr)`          |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentScale {
    /// Keep the intrinsic size.
    None,
    /// Shrink to fit if larger than the destination, never enlarge.
    Inside,
    /// Scale uniformly until one axis matches and the other fits.
    #[default]
    Fit,
    /// Scale uniformly to match the destination width.
    FillWidth,
    /// Scale uniformly to match the destination height.
    FillHeight,
    /// Stretch each axis independently to match the destination.
    FillBounds,
    /// Scale uniformly to cover the destination, overflowing one axis.
    Crop,
}

impl ContentScale {
    /// Every named policy, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::Inside,
        Self::Fit,
        Self::FillWidth,
        Self::FillHeight,
        Self::FillBounds,
        Self::Crop,
    ];

    /// The stable name of this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Inside => "Inside",
            Self::Fit => "Fit",
            Self::FillWidth => "FillWidth",
            Self::FillHeight => "FillHeight",
            Self::FillBounds => "FillBounds",
            Self::Crop => "Crop",
        }
    }
}

impl ContentScalePolicy for ContentScale {
    fn compute_scale_factor(&self, src: Size, dst: Size) -> ScaleFactor {
        let wr = dst.width / src.width;
        let hr = dst.height / src.height;
        match self {
            Self::None => ScaleFactor::ORIGIN,
            Self::Inside => ScaleFactor::uniform(wr.min(hr).min(1.0)),
            Self::Fit => ScaleFactor::uniform(wr.min(hr)),
            Self::FillWidth => ScaleFactor::uniform(wr),
            Self::FillHeight => ScaleFactor::uniform(hr),
            Self::FillBounds => ScaleFactor::new(wr, hr),
            Self::Crop => ScaleFactor::uniform(wr.max(hr)),
        }
    }

    fn name(&self) -> Result<&'static str, InvalidArgument> {
        Ok(self.as_str())
    }
}

impl fmt::Display for ContentScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentScale {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.as_str() == s)
            .ok_or_else(|| InvalidArgument::UnknownName {
                kind: "ContentScale",
                name: s.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ContentScale, ContentScalePolicy};
    use crate::error::InvalidArgument;
    use crate::scale::ScaleFactor;

    struct Double;

    impl ContentScalePolicy for Double {
        fn compute_scale_factor(&self, _src: Size, _dst: Size) -> ScaleFactor {
            ScaleFactor::uniform(2.0)
        }
    }

    #[test]
    fn named_policies_small_source() {
        let src = Size::new(100.0, 50.0);
        let dst = Size::new(1000.0, 1000.0);
        let cases = [
            (ContentScale::FillWidth, ScaleFactor::new(10.0, 10.0)),
            (ContentScale::FillHeight, ScaleFactor::new(20.0, 20.0)),
            (ContentScale::FillBounds, ScaleFactor::new(10.0, 20.0)),
            (ContentScale::Fit, ScaleFactor::new(10.0, 10.0)),
            (ContentScale::Crop, ScaleFactor::new(20.0, 20.0)),
            (ContentScale::Inside, ScaleFactor::new(1.0, 1.0)),
            (ContentScale::None, ScaleFactor::new(1.0, 1.0)),
        ];
        for (policy, expected) in cases {
            assert_eq!(policy.compute_scale_factor(src, dst), expected, "{policy}");
        }
    }

    #[test]
    fn named_policies_large_source() {
        let src = Size::new(2000.0, 4000.0);
        let dst = Size::new(1000.0, 1000.0);
        let cases = [
            (ContentScale::FillWidth, ScaleFactor::new(0.5, 0.5)),
            (ContentScale::FillHeight, ScaleFactor::new(0.25, 0.25)),
            (ContentScale::FillBounds, ScaleFactor::new(0.5, 0.25)),
            (ContentScale::Fit, ScaleFactor::new(0.25, 0.25)),
            (ContentScale::Crop, ScaleFactor::new(0.5, 0.5)),
            (ContentScale::Inside, ScaleFactor::new(0.25, 0.25)),
            (ContentScale::None, ScaleFactor::new(1.0, 1.0)),
        ];
        for (policy, expected) in cases {
            assert_eq!(policy.compute_scale_factor(src, dst), expected, "{policy}");
        }
    }

    #[test]
    fn names_round_trip_and_reject_unknown() {
        for policy in ContentScale::ALL {
            assert_eq!(policy.as_str().parse::<ContentScale>(), Ok(policy));
            assert_eq!(policy.name(), Ok(policy.as_str()));
        }
        assert_eq!(
            "Stretch".parse::<ContentScale>(),
            Err(InvalidArgument::UnknownName {
                kind: "ContentScale",
                name: "Stretch".into(),
            })
        );
    }

    #[test]
    fn custom_policy_computes_but_has_no_name() {
        let factor = Double.compute_scale_factor(Size::new(1.0, 1.0), Size::new(5.0, 5.0));
        assert_eq!(factor, ScaleFactor::uniform(2.0));
        assert_eq!(
            Double.name(),
            Err(InvalidArgument::UnsupportedVariant {
                kind: "ContentScale"
            })
        );
    }
}
