// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomImage Keys: keyboard shortcuts for zoomable image views.
//!
//! Built on the `ui-events` keyboard model, this crate provides:
//! - [`KeyMatcher`]: a declarative predicate over a key, an exact set of assist
//!   modifiers and an optional key phase.
//! - [`KeyChord`]: a small state machine for a sequence of matchers pressed in
//!   order.
//! - [`MatcherKeyHandler`]: callbacks for alternative matchers, with a cancel
//!   callback when a held shortcut is released.
//! - [`ZoomShortcut`]: the default zoom, move and rotate bindings.
//!
//! It does not own a zoom state. Callers translate the shortcuts into changes
//! of their own transform.
//!
//! ## Example
//!
//! ```rust
//! use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};
//! use zoomimage_keys::ZoomShortcut;
//!
//! let event = KeyboardEvent {
//!     key: Key::Character("-".into()),
//!     modifiers: Modifiers::META,
//!     state: KeyState::Down,
//!     ..Default::default()
//! };
//! assert_eq!(ZoomShortcut::from_event(&event), Some(ZoomShortcut::ZoomOut));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod chord;
mod handler;
mod matcher;
mod shortcuts;

pub use chord::{ChordEvent, ChordState, KeyChord};
pub use handler::{HandlerState, MatcherKeyHandler};
pub use matcher::{ASSIST_MODIFIERS, KeyMatcher};
pub use shortcuts::ZoomShortcut;
