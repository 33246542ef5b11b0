// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::alignment::{Alignment, AlignmentPolicy, LayoutDirection};
use crate::content_scale::{ContentScale, ContentScalePolicy};
use crate::int_geometry::{IntOffset, IntRect, IntSize};
use crate::rotation::{Rotate, Rotation};
use crate::scale::{ScaleFactor, TransformOrigin};

/// How content of a given size is laid out inside a container at base scale.
///
/// The content is first rotated into container orientation, then scaled by
/// `content_scale`, then placed by `alignment`. The result is the *base*
/// display: what the user sees before any zoom or pan gesture.
///
/// A `ContentLayout` also maps points between container space (pixels of the
/// view) and content space (pixels of the un-rotated, un-scaled content).
///
/// ```rust
/// use kurbo::Rect;
/// use zoomimage_geometry::{Alignment, ContentLayout, ContentScale, IntSize};
///
/// let layout = ContentLayout::new(IntSize::new(1080, 1656), IntSize::new(575, 427))
///     .with_content_scale(ContentScale::Fit)
///     .with_alignment(Alignment::Center);
/// assert_eq!(layout.base_display_rect(), Rect::new(0.0, 427.0, 1080.0, 1229.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentLayout<S = ContentScale, A = Alignment> {
    /// Size of the viewport.
    pub container_size: IntSize,
    /// Intrinsic size of the content, before rotation.
    pub content_size: IntSize,
    /// Policy scaling the rotated content into the container.
    pub content_scale: S,
    /// Policy placing the scaled content inside the container.
    pub alignment: A,
    /// Rotation applied to the content before scaling.
    pub rotation: Rotation,
    /// Reading direction used by `alignment`.
    pub direction: LayoutDirection,
}

impl ContentLayout {
    /// Creates a layout with `Fit`, `Center`, no rotation and left-to-right direction.
    #[must_use]
    pub fn new(container_size: IntSize, content_size: IntSize) -> Self {
        Self {
            container_size,
            content_size,
            content_scale: ContentScale::default(),
            alignment: Alignment::default(),
            rotation: Rotation::R0,
            direction: LayoutDirection::Ltr,
        }
    }
}

impl<S, A> ContentLayout<S, A> {
    /// Replaces the content scale policy.
    #[must_use]
    pub fn with_content_scale<S2>(self, content_scale: S2) -> ContentLayout<S2, A> {
        ContentLayout {
            container_size: self.container_size,
            content_size: self.content_size,
            content_scale,
            alignment: self.alignment,
            rotation: self.rotation,
            direction: self.direction,
        }
    }

    /// Replaces the alignment policy.
    #[must_use]
    pub fn with_alignment<A2>(self, alignment: A2) -> ContentLayout<S, A2> {
        ContentLayout {
            container_size: self.container_size,
            content_size: self.content_size,
            content_scale: self.content_scale,
            alignment,
            rotation: self.rotation,
            direction: self.direction,
        }
    }

    /// Replaces the rotation.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replaces the layout direction.
    #[must_use]
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns `true` when either the container or the content has no area.
    ///
    /// Empty layouts produce zero rects and identity point mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container_size.is_empty() || self.content_size.is_empty()
    }

    /// Content size after rotation into container orientation.
    #[must_use]
    pub fn rotated_content_size(&self) -> Size {
        self.content_size
            .to_size()
            .rotate_in_space(self.content_size.to_size(), self.rotation)
    }

    fn container_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.container_size.to_size())
    }
}

impl<S: ContentScalePolicy, A: AlignmentPolicy> ContentLayout<S, A> {
    /// Factor scaling the rotated content into the container.
    #[must_use]
    pub fn scale_factor(&self) -> ScaleFactor {
        if self.is_empty() {
            return ScaleFactor::ORIGIN;
        }
        self.content_scale
            .compute_scale_factor(self.rotated_content_size(), self.container_size.to_size())
    }

    /// Factor from rotated content to the pixel-snapped base display.
    ///
    /// Differs from [`Self::scale_factor`] by the snapping error, so mapped
    /// edges of the base display land exactly on content edges. Axes that
    /// snap to zero keep the unsnapped factor.
    fn display_scale_factor(&self) -> ScaleFactor {
        let factor = self.scale_factor();
        let rotated = self.rotated_content_size();
        let snapped = IntSize::from_size_rounded(rotated * factor).to_size();
        let axis = |snapped: f64, rotated: f64, unsnapped: f64| {
            if snapped > 0.0 { snapped / rotated } else { unsnapped }
        };
        ScaleFactor::new(
            axis(snapped.width, rotated.width, factor.scale_x),
            axis(snapped.height, rotated.height, factor.scale_y),
        )
    }

    /// Placement of `child` inside the container, snapped to whole pixels.
    fn place(&self, child: IntSize) -> IntOffset {
        let offset =
            self.alignment
                .align(child.to_size(), self.container_size.to_size(), self.direction);
        IntOffset::from_point_rounded(offset)
    }

    /// The rotated, scaled and aligned content rect in container space.
    ///
    /// The scaled size and the placement are snapped to whole pixels, so the
    /// edges are integral. Edges may lie outside the container, e.g. for `Crop`.
    #[must_use]
    pub fn base_display_rect(&self) -> Rect {
        if self.is_empty() {
            log::trace!(
                "empty layout: container {:?}, content {:?}",
                self.container_size,
                self.content_size
            );
            return Rect::ZERO;
        }
        let scaled = IntSize::from_size_rounded(self.rotated_content_size() * self.scale_factor());
        IntRect::from_offset_size(self.place(scaled), scaled).to_rect()
    }

    /// [`Self::base_display_rect`] clipped to the container bounds.
    #[must_use]
    pub fn base_inside_display_rect(&self) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        self.base_display_rect().intersect(self.container_rect())
    }

    /// The part of the content, in content space, that is visible at base scale.
    #[must_use]
    pub fn base_visible_rect(&self) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        let inside = self.base_inside_display_rect();
        let a = self.container_point_to_content_point(Point::new(inside.x0, inside.y0));
        let b = self.container_point_to_content_point(Point::new(inside.x1, inside.y1));
        Rect::from_points(a, b)
    }

    /// Maps a container-space point to content space.
    ///
    /// Points outside the displayed content map outside `[0, content_size]`;
    /// callers use that to detect hits outside the content. The scale used is
    /// the one of the pixel-snapped base display, so its edges map onto the
    /// content edges.
    #[must_use]
    pub fn container_point_to_content_point(&self, container_point: Point) -> Point {
        if self.is_empty() {
            return container_point;
        }
        let base = self.base_display_rect();
        let local = container_point - base.origin().to_vec2();
        let unscaled = local / self.display_scale_factor();
        unscaled.reverse_rotate_in_space(self.content_size.to_size(), self.rotation)
    }

    /// Maps a content-space point to container space.
    ///
    /// Besides the base display offset, the result carries the placement of
    /// the unscaled rotated content inside the container. The two mappings
    /// compose to the identity only when that placement is zero, e.g. with
    /// `TopStart` alignment or content that exactly fills the container.
    #[must_use]
    pub fn content_point_to_container_point(&self, content_point: Point) -> Point {
        if self.is_empty() {
            return content_point;
        }
        let rotated = content_point.rotate_in_space(self.content_size.to_size(), self.rotation);
        let scaled = rotated * self.display_scale_factor();
        let base = self.base_display_rect();
        let placement = self.place(IntSize::from_size_rounded(self.rotated_content_size()));
        scaled + base.origin().to_vec2() + placement.to_vec2()
    }
}

/// Base display rect of content inside a container, left-to-right.
///
/// See [`ContentLayout::base_display_rect`].
#[must_use]
pub fn calculate_content_base_display_rect(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
) -> Rect {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .base_display_rect()
}

/// Base display rect clipped to the container, left-to-right.
///
/// See [`ContentLayout::base_inside_display_rect`].
#[must_use]
pub fn calculate_content_base_inside_display_rect(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
) -> Rect {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .base_inside_display_rect()
}

/// Content-space rect visible at base scale, left-to-right.
///
/// See [`ContentLayout::base_visible_rect`].
#[must_use]
pub fn calculate_content_base_visible_rect(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
) -> Rect {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .base_visible_rect()
}

/// Maps a container point to content space, left-to-right.
///
/// See [`ContentLayout::container_point_to_content_point`].
#[must_use]
pub fn container_point_to_content_point(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
    container_point: Point,
) -> Point {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .container_point_to_content_point(container_point)
}

/// Maps a content point to container space, left-to-right.
///
/// See [`ContentLayout::content_point_to_container_point`].
#[must_use]
pub fn content_point_to_container_point(
    container_size: IntSize,
    content_size: IntSize,
    content_scale: impl ContentScalePolicy,
    alignment: impl AlignmentPolicy,
    rotation: Rotation,
    content_point: Point,
) -> Point {
    ContentLayout::new(container_size, content_size)
        .with_content_scale(content_scale)
        .with_alignment(alignment)
        .with_rotation(rotation)
        .content_point_to_container_point(content_point)
}

/// Pivot at the centre of top-start placed, unscaled content, relative to the container.
///
/// Fractions exceed `1` when the content is larger than the container.
#[must_use]
pub fn calculate_content_rotate_origin(
    container_size: IntSize,
    content_size: IntSize,
) -> TransformOrigin {
    if container_size.is_empty() || content_size.is_empty() {
        return TransformOrigin::CENTER;
    }
    let container = container_size.to_size();
    let content = content_size.to_size();
    TransformOrigin::new(
        content.width / 2.0 / container.width,
        content.height / 2.0 / container.height,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{
        ContentLayout, calculate_content_base_display_rect,
        calculate_content_base_inside_display_rect, calculate_content_rotate_origin,
        container_point_to_content_point, content_point_to_container_point,
    };
    use crate::alignment::{Alignment, LayoutDirection};
    use crate::content_scale::ContentScale;
    use crate::int_geometry::IntSize;
    use crate::rotation::Rotation;
    use crate::scale::TransformOrigin;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual - expected).hypot() < 1e-6,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn assert_rect_eq(actual: Rect, expected: Rect) {
        let close = (actual.x0 - expected.x0).abs() < 1e-6
            && (actual.y0 - expected.y0).abs() < 1e-6
            && (actual.x1 - expected.x1).abs() < 1e-6
            && (actual.y1 - expected.y1).abs() < 1e-6;
        assert!(close, "expected {expected:?}, got {actual:?}");
    }

    #[test]
    fn fit_center_landscape_content_in_portrait_container() {
        let rect = calculate_content_base_display_rect(
            IntSize::new(1080, 1656),
            IntSize::new(575, 427),
            ContentScale::Fit,
            Alignment::Center,
            Rotation::R0,
        );
        assert_rect_eq(rect, Rect::new(0.0, 427.0, 1080.0, 1229.0));
    }

    #[test]
    fn rotation_swaps_content_before_scaling() {
        let container = IntSize::new(1000, 1000);
        let content = IntSize::new(1000, 400);
        let upright = calculate_content_base_display_rect(
            container,
            content,
            ContentScale::None,
            Alignment::Center,
            Rotation::R0,
        );
        assert_rect_eq(upright, Rect::new(0.0, 300.0, 1000.0, 700.0));
        let rotated = calculate_content_base_display_rect(
            container,
            content,
            ContentScale::None,
            Alignment::Center,
            Rotation::R90,
        );
        assert_rect_eq(rotated, Rect::new(300.0, 0.0, 700.0, 1000.0));
    }

    #[test]
    fn crop_overflows_and_inside_variant_clips() {
        let container = IntSize::new(1000, 1000);
        let content = IntSize::new(2000, 1000);
        let args = (ContentScale::Crop, Alignment::Center, Rotation::R0);
        let base =
            calculate_content_base_display_rect(container, content, args.0, args.1, args.2);
        assert_rect_eq(base, Rect::new(-500.0, 0.0, 1500.0, 1000.0));
        let inside =
            calculate_content_base_inside_display_rect(container, content, args.0, args.1, args.2);
        assert_rect_eq(inside, Rect::new(0.0, 0.0, 1000.0, 1000.0));

        let end = calculate_content_base_display_rect(
            container,
            content,
            ContentScale::Crop,
            Alignment::BottomEnd,
            Rotation::R0,
        );
        assert_rect_eq(end, Rect::new(-1000.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn inside_rect_never_leaves_container() {
        let container = IntSize::new(1000, 600);
        for scale in ContentScale::ALL {
            for alignment in Alignment::ALL {
                for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
                    let rect = calculate_content_base_inside_display_rect(
                        container,
                        IntSize::new(3000, 500),
                        scale,
                        alignment,
                        rotation,
                    );
                    assert!(rect.x0 >= 0.0 && rect.y0 >= 0.0, "{scale} {alignment}");
                    assert!(rect.x1 <= 1000.0 && rect.y1 <= 600.0, "{scale} {alignment}");
                }
            }
        }
    }

    #[test]
    fn empty_sizes_yield_zero_rect() {
        let rect = calculate_content_base_display_rect(
            IntSize::ZERO,
            IntSize::new(100, 100),
            ContentScale::Fit,
            Alignment::Center,
            Rotation::R0,
        );
        assert_eq!(rect, Rect::ZERO);
        let layout = ContentLayout::new(IntSize::new(100, 100), IntSize::ZERO);
        assert_eq!(layout.base_visible_rect(), Rect::ZERO);
        let p = Point::new(3.0, 4.0);
        assert_eq!(layout.container_point_to_content_point(p), p);
    }

    #[test]
    fn container_to_content_undoes_centering() {
        let point = container_point_to_content_point(
            IntSize::new(1000, 1000),
            IntSize::new(1000, 400),
            ContentScale::None,
            Alignment::Center,
            Rotation::R0,
            Point::new(500.0, 500.0),
        );
        assert_point_eq(point, Point::new(500.0, 200.0));
    }

    #[test]
    fn content_to_container_adds_content_placement() {
        let point = content_point_to_container_point(
            IntSize::new(1000, 1000),
            IntSize::new(1000, 400),
            ContentScale::None,
            Alignment::Center,
            Rotation::R0,
            Point::new(500.0, 200.0),
        );
        assert_point_eq(point, Point::new(500.0, 800.0));
    }

    #[test]
    fn mappings_are_inverse_for_top_start() {
        for rotation in [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270] {
            for scale in ContentScale::ALL {
                let layout = ContentLayout::new(IntSize::new(1000, 800), IntSize::new(400, 300))
                    .with_content_scale(scale)
                    .with_alignment(Alignment::TopStart)
                    .with_rotation(rotation);
                for q in [Point::new(0.0, 0.0), Point::new(100.0, 250.0), Point::new(400.0, 300.0)] {
                    let container = layout.content_point_to_container_point(q);
                    let back = layout.container_point_to_content_point(container);
                    assert_point_eq(back, q);
                }
            }
        }
    }

    #[test]
    fn rotated_mapping_lands_on_rotated_corner() {
        // Content 400x300 rotated 90 degrees shows as 300x400 at the top-left.
        let layout = ContentLayout::new(IntSize::new(1000, 1000), IntSize::new(400, 300))
            .with_content_scale(ContentScale::None)
            .with_alignment(Alignment::TopStart)
            .with_rotation(Rotation::R90);
        // The content's top-left corner is now the display's top-right corner.
        assert_point_eq(
            layout.content_point_to_container_point(Point::ZERO),
            Point::new(300.0, 0.0),
        );
        assert_point_eq(
            layout.container_point_to_content_point(Point::new(300.0, 0.0)),
            Point::ZERO,
        );
    }

    #[test]
    fn snapped_display_edges_map_to_content_edges() {
        // 427 * 1080 / 575 = 802.017, snapped to 802 rows.
        let layout = ContentLayout::new(IntSize::new(1080, 1656), IntSize::new(575, 427));
        let base = layout.base_display_rect();
        assert_point_eq(
            layout.container_point_to_content_point(Point::new(base.x0, base.y0)),
            Point::ZERO,
        );
        assert_point_eq(
            layout.container_point_to_content_point(Point::new(base.x1, base.y1)),
            Point::new(575.0, 427.0),
        );
        assert_rect_eq(layout.base_visible_rect(), Rect::new(0.0, 0.0, 575.0, 427.0));
    }

    #[test]
    fn out_of_bounds_points_map_outside_content() {
        let layout = ContentLayout::new(IntSize::new(1000, 1000), IntSize::new(1000, 400))
            .with_content_scale(ContentScale::None);
        let above = layout.container_point_to_content_point(Point::new(500.0, 100.0));
        assert_point_eq(above, Point::new(500.0, -200.0));
    }

    #[test]
    fn rtl_mirrors_horizontal_placement() {
        let layout = ContentLayout::new(IntSize::new(1000, 1000), IntSize::new(100, 100))
            .with_content_scale(ContentScale::None)
            .with_alignment(Alignment::TopStart)
            .with_direction(LayoutDirection::Rtl);
        assert_rect_eq(
            layout.base_display_rect(),
            Rect::new(900.0, 0.0, 1000.0, 100.0),
        );
    }

    #[test]
    fn visible_rect_under_crop_is_the_centre_slice() {
        let layout = ContentLayout::new(IntSize::new(1000, 1000), IntSize::new(2000, 1000))
            .with_content_scale(ContentScale::Crop);
        assert_rect_eq(
            layout.base_visible_rect(),
            Rect::new(500.0, 0.0, 1500.0, 1000.0),
        );
    }

    #[test]
    fn rotate_origin_is_content_centre_fraction() {
        assert_eq!(
            calculate_content_rotate_origin(IntSize::new(1000, 1000), IntSize::new(500, 200)),
            TransformOrigin::new(0.25, 0.1)
        );
        assert_eq!(
            calculate_content_rotate_origin(IntSize::new(100, 100), IntSize::new(1000, 400)),
            TransformOrigin::new(5.0, 2.0)
        );
        assert_eq!(
            calculate_content_rotate_origin(IntSize::ZERO, IntSize::new(1, 1)),
            TransformOrigin::CENTER
        );
    }
}
