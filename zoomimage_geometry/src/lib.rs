// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomImage Geometry: coordinate-space math for zoomable image views.
//!
//! This crate is the headless engine behind an image viewer that supports
//! pinch zoom, pan and quarter-turn rotation. It works on plain value types
//! and pure functions:
//! - Primitives: [`kurbo`] float geometry plus [`IntSize`], [`IntOffset`],
//!   [`IntRect`], [`ScaleFactor`] and [`TransformOrigin`].
//! - Policies: [`ContentScale`] and [`Alignment`], with the
//!   [`ContentScalePolicy`] and [`AlignmentPolicy`] traits for custom behaviour.
//! - Rotation of sizes, points and rects by multiples of 90° via [`Rotate`].
//! - [`ContentLayout`]: the base display rect of content inside a container,
//!   and point mapping between container and content space.
//! - Pan limits under zoom ([`compute_user_offset_bounds`]) and zoom ladders
//!   ([`ScalesCalculator`], [`calculate_next_step_scale`]).
//! - [`Transform`], the validated user transform with composition and
//!   interpolation.
//!
//! It does **not** render, decode images or handle input events. A UI layer
//! feeds container and content sizes in and applies the results.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use zoomimage_geometry::{
//!     Alignment, ContentLayout, ContentScale, IntSize, Rotation, compute_user_offset_bounds,
//! };
//!
//! let container = IntSize::new(1000, 1000);
//! let content = IntSize::new(2000, 1000);
//! let layout = ContentLayout::new(container, content)
//!     .with_content_scale(ContentScale::Crop)
//!     .with_alignment(Alignment::Center);
//!
//! // Crop overflows horizontally.
//! assert_eq!(layout.base_display_rect(), Rect::new(-500.0, 0.0, 1500.0, 1000.0));
//!
//! // The container centre shows the content centre.
//! let hit = layout.container_point_to_content_point(Point::new(500.0, 500.0));
//! assert_eq!(hit, Point::new(1000.0, 500.0));
//!
//! // At base scale the user may pan half a container either way.
//! let bounds = compute_user_offset_bounds(
//!     container,
//!     content,
//!     ContentScale::Crop,
//!     Alignment::Center,
//!     Rotation::R0,
//!     1.0,
//! );
//! assert_eq!((bounds.x0, bounds.x1), (-500.0, 500.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: float math for `no_std` targets via `kurbo/libm`.
//! - `serde`: `Serialize`/`Deserialize` for the value types.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod alignment;
mod bounds;
mod content_scale;
mod error;
mod int_geometry;
mod layout;
mod rotation;
mod scale;
mod scales;
mod short_string;
mod transform;

pub use alignment::{Alignment, AlignmentPolicy, LayoutDirection};
pub use bounds::{DEFAULT_RANGE_OF_ERROR, calculate_next_step_scale, compute_user_offset_bounds};
pub use content_scale::{ContentScale, ContentScalePolicy};
pub use error::InvalidArgument;
pub use int_geometry::{IntOffset, IntRect, IntSize, round_half_up};
pub use layout::{
    ContentLayout, calculate_content_base_display_rect,
    calculate_content_base_inside_display_rect, calculate_content_base_visible_rect,
    calculate_content_rotate_origin, container_point_to_content_point,
    content_point_to_container_point,
};
pub use rotation::{Rotate, Rotation, reverse_rotate, rotate};
pub use scale::{ScaleFactor, TransformOrigin};
pub use scales::{
    DEFAULT_MULTIPLE, DynamicScalesCalculator, FixedScalesCalculator, Scales, ScalesCalculator,
};
pub use short_string::{ToShortString, Unspecified};
pub use transform::Transform;
