// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default keyboard shortcuts of a zoomable image view.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers, NamedKey};

use crate::matcher::KeyMatcher;

/// A user action driven from the keyboard.
///
/// Every shortcut fires on key down with either `Ctrl` or `Meta` held, so the
/// same bindings work on every desktop platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomShortcut {
    /// `Ctrl`/`Meta` + `=`.
    ZoomIn,
    /// `Ctrl`/`Meta` + `-`.
    ZoomOut,
    /// `Ctrl`/`Meta` + `↑`.
    MoveUp,
    /// `Ctrl`/`Meta` + `↓`.
    MoveDown,
    /// `Ctrl`/`Meta` + `←`.
    MoveLeft,
    /// `Ctrl`/`Meta` + `→`.
    MoveRight,
    /// `Ctrl`/`Meta` + `R`, in either letter case.
    Rotate,
}

impl ZoomShortcut {
    /// Every shortcut.
    pub const ALL: [Self; 7] = [
        Self::ZoomIn,
        Self::ZoomOut,
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::Rotate,
    ];

    /// The keys that trigger this shortcut.
    ///
    /// Letters list both cases: Caps Lock turns `r` into `R` without adding
    /// an assist modifier.
    fn keys(self) -> Vec<Key> {
        match self {
            Self::ZoomIn => vec![Key::Character("=".into())],
            Self::ZoomOut => vec![Key::Character("-".into())],
            Self::MoveUp => vec![Key::Named(NamedKey::ArrowUp)],
            Self::MoveDown => vec![Key::Named(NamedKey::ArrowDown)],
            Self::MoveLeft => vec![Key::Named(NamedKey::ArrowLeft)],
            Self::MoveRight => vec![Key::Named(NamedKey::ArrowRight)],
            Self::Rotate => vec![Key::Character("r".into()), Key::Character("R".into())],
        }
    }

    /// The alternative bindings of this shortcut: each key with `Ctrl` and
    /// with `Meta`.
    #[must_use]
    pub fn matchers(self) -> Vec<KeyMatcher> {
        let keys = self.keys();
        let mut matchers = Vec::with_capacity(keys.len() * 2);
        for key in keys {
            for modifier in [Modifiers::CONTROL, Modifiers::META] {
                matchers.push(
                    KeyMatcher::new(key.clone())
                        .assist_keys(modifier)
                        .state(KeyState::Down),
                );
            }
        }
        matchers
    }

    /// The shortcut `event` triggers, if any.
    #[must_use]
    pub fn from_event(event: &KeyboardEvent) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|shortcut| shortcut.matchers().iter().any(|m| m.matches(event)))
    }
}

impl fmt::Display for ZoomShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZoomIn => "ZoomIn",
            Self::ZoomOut => "ZoomOut",
            Self::MoveUp => "MoveUp",
            Self::MoveDown => "MoveDown",
            Self::MoveLeft => "MoveLeft",
            Self::MoveRight => "MoveRight",
            Self::Rotate => "Rotate",
        })
    }
}
