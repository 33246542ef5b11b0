// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the medium and maximum zoom scales for a piece of content.

use crate::content_scale::{ContentScale, ContentScalePolicy};
use crate::int_geometry::IntSize;

/// Default ratio between successive scales.
pub const DEFAULT_MULTIPLE: f64 = 3.0;

/// The three rungs of a zoom ladder.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scales {
    /// Smallest scale, usually the base display.
    pub min_scale: f64,
    /// Scale reached by the first double tap.
    pub medium_scale: f64,
    /// Largest scale.
    pub max_scale: f64,
}

impl Scales {
    /// The rungs in ascending order, for [`crate::calculate_next_step_scale`].
    #[must_use]
    pub const fn steps(&self) -> [f64; 3] {
        [self.min_scale, self.medium_scale, self.max_scale]
    }
}

/// Policy computing the medium and maximum scales.
///
/// Implementations are recomputed whenever the container size, the content
/// size or the content scale changes.
pub trait ScalesCalculator {
    /// Computes the ladder for content shown at `min_scale` and starting at
    /// `initial_scale`.
    ///
    /// `content_origin_size` is the full-resolution size of the content when
    /// `content_size` is a downsampled preview, or empty when unknown.
    /// `content_scale` may be a custom policy.
    fn calculate(
        &self,
        container_size: IntSize,
        content_size: IntSize,
        content_origin_size: IntSize,
        content_scale: &dyn ContentScalePolicy,
        min_scale: f64,
        initial_scale: f64,
    ) -> Scales;
}

/// The scale the fixed rule multiplies: the initial scale if it zooms in.
fn base_scale(min_scale: f64, initial_scale: f64) -> f64 {
    if initial_scale > min_scale {
        initial_scale
    } else {
        min_scale
    }
}

/// Medium scale is `multiple` times the base scale, maximum `multiple` times that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedScalesCalculator {
    /// Ratio between successive scales.
    pub multiple: f64,
}

impl Default for FixedScalesCalculator {
    fn default() -> Self {
        Self {
            multiple: DEFAULT_MULTIPLE,
        }
    }
}

impl ScalesCalculator for FixedScalesCalculator {
    fn calculate(
        &self,
        _container_size: IntSize,
        _content_size: IntSize,
        _content_origin_size: IntSize,
        _content_scale: &dyn ContentScalePolicy,
        min_scale: f64,
        initial_scale: f64,
    ) -> Scales {
        let medium_scale = base_scale(min_scale, initial_scale) * self.multiple;
        Scales {
            min_scale,
            medium_scale,
            max_scale: medium_scale * self.multiple,
        }
    }
}

/// Medium scale is at least the scale that fills the container and the scale
/// that shows the content at its original resolution.
///
/// Falls back to [`FixedScalesCalculator`] when either size is empty, and
/// ignores the two content-driven candidates under [`ContentScale::FillBounds`],
/// where the content already fills the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicScalesCalculator {
    /// Ratio between successive scales.
    pub multiple: f64,
}

impl Default for DynamicScalesCalculator {
    fn default() -> Self {
        Self {
            multiple: DEFAULT_MULTIPLE,
        }
    }
}

impl ScalesCalculator for DynamicScalesCalculator {
    fn calculate(
        &self,
        container_size: IntSize,
        content_size: IntSize,
        content_origin_size: IntSize,
        content_scale: &dyn ContentScalePolicy,
        min_scale: f64,
        initial_scale: f64,
    ) -> Scales {
        let fixed = FixedScalesCalculator {
            multiple: self.multiple,
        };
        let fills_bounds = content_scale
            .name()
            .is_ok_and(|name| name == ContentScale::FillBounds.as_str());
        if container_size.is_empty() || content_size.is_empty() || fills_bounds {
            log::trace!(
                "dynamic scales degrade to fixed: container {container_size:?}, content {content_size:?}"
            );
            return fixed.calculate(
                container_size,
                content_size,
                content_origin_size,
                content_scale,
                min_scale,
                initial_scale,
            );
        }
        let container = container_size.to_size();
        let content = content_size.to_size();
        let fill_container_scale =
            (container.width / content.width).max(container.height / content.height);
        let origin_scale = if content_origin_size.is_empty() {
            1.0
        } else {
            let origin = content_origin_size.to_size();
            (origin.width / content.width).max(origin.height / content.height)
        };
        let medium_scale = (base_scale(min_scale, initial_scale) * self.multiple)
            .max(fill_container_scale)
            .max(origin_scale);
        Scales {
            min_scale,
            medium_scale,
            max_scale: medium_scale * self.multiple,
        }
    }
}
