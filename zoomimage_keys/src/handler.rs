// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use ui_events::keyboard::KeyboardEvent;

use crate::matcher::KeyMatcher;

/// Whether a [`MatcherKeyHandler`] is tracking a held shortcut.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandlerState {
    /// No matcher has matched since the last cancel.
    #[default]
    Idle,
    /// The matcher at this index matched the most recent event for its key.
    Matched(usize),
}

/// Dispatches keyboard events to callbacks for a set of alternative matchers.
///
/// Any matching event calls `on_key`, including key repeats. Once a matcher has
/// matched, the next event for the same key that no longer matches (the key is
/// released, or a modifier changes) calls `on_canceled`. Continuous actions
/// such as zooming while a shortcut is held start in `on_key` and stop in
/// `on_canceled`.
pub struct MatcherKeyHandler<K, C> {
    matchers: Vec<KeyMatcher>,
    state: HandlerState,
    on_key: K,
    on_canceled: C,
}

impl<K, C> fmt::Debug for MatcherKeyHandler<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherKeyHandler")
            .field("matchers", &self.matchers)
            .field("state", &self.state)
            .field("on_key", &"<function>")
            .field("on_canceled", &"<function>")
            .finish()
    }
}

impl<K, C> MatcherKeyHandler<K, C>
where
    K: FnMut(&KeyboardEvent),
    C: FnMut(&KeyboardEvent),
{
    /// Creates an idle handler.
    pub fn new(matchers: impl IntoIterator<Item = KeyMatcher>, on_key: K, on_canceled: C) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
            state: HandlerState::Idle,
            on_key,
            on_canceled,
        }
    }

    /// The alternative matchers.
    #[must_use]
    pub fn matchers(&self) -> &[KeyMatcher] {
        &self.matchers
    }

    /// Current tracking state.
    #[must_use]
    pub fn state(&self) -> HandlerState {
        self.state
    }

    /// Handles one event. Returns `true` when a callback ran.
    pub fn handle(&mut self, event: &KeyboardEvent) -> bool {
        if let Some(index) = self.matchers.iter().position(|m| m.matches(event)) {
            self.state = HandlerState::Matched(index);
            (self.on_key)(event);
            return true;
        }
        let HandlerState::Matched(index) = self.state else {
            return false;
        };
        if self.matchers.get(index).is_some_and(|m| m.matches_key(event)) {
            self.state = HandlerState::Idle;
            log::debug!("key shortcut {index} canceled by {:?}", event.key);
            (self.on_canceled)(event);
            true
        } else {
            false
        }
    }
}
