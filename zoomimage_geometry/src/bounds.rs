// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan limits under user zoom and stepping through a zoom ladder.

use kurbo::Rect;

use crate::alignment::{AlignmentPolicy, LayoutDirection};
use crate::content_scale::ContentScalePolicy;
use crate::int_geometry::{IntSize, round_half_up};
use crate::layout::ContentLayout;
use crate::rotation::Rotation;
use crate::scale::ScaleFactor;

/// Default tolerance of [`calculate_next_step_scale`].
pub const DEFAULT_RANGE_OF_ERROR: f64 = 0.1;

/// Absorbs binary float error when `current + range_of_error` lands on a step.
const STEP_SLACK: f64 = 1e-6;

/// Legal range of one axis of the user offset.
///
/// `start` and `end` are equal when the scaled content fits the container on
/// this axis; the offset then pins the content to its aligned position.
fn axis_bounds(scaled_start: f64, scaled_end: f64, container: i32, aligned_start: f64) -> (f64, f64) {
    let container = f64::from(container);
    if round_half_up(scaled_end - scaled_start) > round_half_up(container) {
        (container - scaled_end, -scaled_start)
    } else {
        let offset = aligned_start - scaled_start;
        (offset, offset)
    }
}

impl<S: ContentScalePolicy, A: AlignmentPolicy> ContentLayout<S, A> {
    /// Range of user offsets allowed at `user_scale`.
    ///
    /// The user transform scales the base display about the container's
    /// top-left corner and then translates it by the user offset. On an axis
    /// where the scaled content is larger than the container the offset may
    /// drag it until either far edge meets the container edge; on other axes
    /// the range collapses to the single offset that keeps the content where
    /// the alignment puts it.
    ///
    /// The returned rect holds the horizontal range in `x0..=x1` and the
    /// vertical range in `y0..=y1`.
    #[must_use]
    pub fn user_offset_bounds(&self, user_scale: f64) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        let scaled = self.base_display_rect() * ScaleFactor::uniform(user_scale);
        let aligned = self.alignment.align(
            scaled.size(),
            self.container_size.to_size(),
            self.direction,
        );
        let (left, right) = axis_bounds(scaled.x0, scaled.x1, self.container_size.width, aligned.x);
        let (top, bottom) =
            axis_bounds(scaled.y0, scaled.y1, self.container_size.height, aligned.y);
        Rect::new(left, top, right, bottom)
    }
}

/// Range of user offsets allowed at `user_scale`, left-to-right.
///
/// See [`ContentLayout::user_offset_bounds`].
#[must_use]
pub fn compute_user_offset_bounds(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
    user_scale: f64,
) -> Rect {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .with_direction(LayoutDirection::Ltr)
        .user_offset_bounds(user_scale)
}

/// Picks the step after `current_scale` in an ascending zoom ladder.
///
/// Returns the first step greater than `current_scale + range_of_error`, so a
/// scale within `range_of_error` below a step counts as already on it. Past the
/// last step the ladder wraps to the first one. An empty ladder returns
/// `current_scale` unchanged.
///
/// ```rust
/// use zoomimage_geometry::{DEFAULT_RANGE_OF_ERROR, calculate_next_step_scale};
///
/// let steps = [1.0, 2.0, 3.0];
/// assert_eq!(calculate_next_step_scale(&steps, 1.0, DEFAULT_RANGE_OF_ERROR), 2.0);
/// assert_eq!(calculate_next_step_scale(&steps, 3.0, DEFAULT_RANGE_OF_ERROR), 1.0);
/// ```
#[must_use]
pub fn calculate_next_step_scale(step_scales: &[f64], current_scale: f64, range_of_error: f64) -> f64 {
    let Some(&first) = step_scales.first() else {
        return current_scale;
    };
    let threshold = current_scale + range_of_error + STEP_SLACK;
    step_scales
        .iter()
        .copied()
        .find(|&step| step > threshold)
        .unwrap_or(first)
}
