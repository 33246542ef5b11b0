// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key chord tracking: a fixed sequence of matchers pressed one after another.
//!
//! ## Usage
//!
//! 1) Build a [`KeyChord`] from the sequence of [`KeyMatcher`]s.
//! 2) Feed every keyboard event to [`KeyChord::update`].
//! 3) React to the returned [`ChordEvent`]; `None` means the event was unrelated.
//!
//! ## Minimal example
//!
//! ```
//! use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};
//! use zoomimage_keys::{ChordEvent, KeyChord, KeyMatcher};
//!
//! let press = |c: &str| KeyMatcher::new(Key::Character(c.into()))
//!     .assist_keys(Modifiers::CONTROL)
//!     .state(KeyState::Down);
//! let mut chord = KeyChord::new([press("k"), press("r")]);
//!
//! let event = |c: &str| KeyboardEvent {
//!     key: Key::Character(c.into()),
//!     modifiers: Modifiers::CONTROL,
//!     state: KeyState::Down,
//!     ..Default::default()
//! };
//! assert_eq!(chord.update(&event("k")), Some(ChordEvent::Advanced(1)));
//! assert_eq!(chord.update(&event("r")), Some(ChordEvent::Completed));
//! ```

use alloc::vec::Vec;

use ui_events::keyboard::KeyboardEvent;

use crate::matcher::KeyMatcher;

/// Progress through a chord.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChordState {
    /// Waiting for the first matcher.
    #[default]
    Idle,
    /// The first `n` matchers have matched, in order.
    PartiallyMatched(usize),
}

/// What an event did to a chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChordEvent {
    /// The event matched a matcher before the last; the payload is how many
    /// matchers have matched so far.
    Advanced(usize),
    /// The event matched the last matcher. The chord is reset.
    Completed,
    /// The event carried the expected key but failed its modifiers or phase
    /// after partial progress. The chord is reset.
    Canceled,
}

/// A sequence of [`KeyMatcher`]s that must match in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    matchers: Vec<KeyMatcher>,
    state: ChordState,
}

impl KeyChord {
    /// Creates an idle chord. An empty sequence never reacts to events.
    pub fn new(matchers: impl IntoIterator<Item = KeyMatcher>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
            state: ChordState::Idle,
        }
    }

    /// The matchers, in order.
    #[must_use]
    pub fn matchers(&self) -> &[KeyMatcher] {
        &self.matchers
    }

    /// Current progress.
    #[must_use]
    pub fn state(&self) -> ChordState {
        self.state
    }

    /// Drops any partial progress.
    pub fn reset(&mut self) {
        self.state = ChordState::Idle;
    }

    /// Feeds one event, returning how it changed the chord.
    ///
    /// Events for unrelated keys return `None` and leave progress untouched.
    pub fn update(&mut self, event: &KeyboardEvent) -> Option<ChordEvent> {
        let matched = match self.state {
            ChordState::Idle => 0,
            ChordState::PartiallyMatched(n) => n,
        };
        let expected = self.matchers.get(matched)?;
        if expected.matches(event) {
            let matched = matched + 1;
            if matched == self.matchers.len() {
                self.state = ChordState::Idle;
                log::debug!("key chord completed after {matched} matchers");
                Some(ChordEvent::Completed)
            } else {
                self.state = ChordState::PartiallyMatched(matched);
                Some(ChordEvent::Advanced(matched))
            }
        } else if matched > 0 && expected.matches_key(event) {
            self.state = ChordState::Idle;
            log::debug!("key chord canceled at matcher {matched}");
            Some(ChordEvent::Canceled)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};

    use super::{ChordEvent, ChordState, KeyChord};
    use crate::matcher::KeyMatcher;

    fn ctrl_down(c: &str) -> KeyMatcher {
        KeyMatcher::new(Key::Character(c.into()))
            .assist_keys(Modifiers::CONTROL)
            .state(KeyState::Down)
    }

    fn event(c: &str, modifiers: Modifiers, state: KeyState) -> KeyboardEvent {
        KeyboardEvent {
            key: Key::Character(c.into()),
            modifiers,
            state,
            ..Default::default()
        }
    }

    fn chord() -> KeyChord {
        KeyChord::new([ctrl_down("k"), ctrl_down("r"), ctrl_down("x")])
    }

    #[test]
    fn sequence_advances_then_completes_and_resets() {
        let mut chord = chord();
        let ctrl = Modifiers::CONTROL;
        assert_eq!(
            chord.update(&event("k", ctrl, KeyState::Down)),
            Some(ChordEvent::Advanced(1))
        );
        assert_eq!(chord.state(), ChordState::PartiallyMatched(1));
        assert_eq!(
            chord.update(&event("r", ctrl, KeyState::Down)),
            Some(ChordEvent::Advanced(2))
        );
        assert_eq!(
            chord.update(&event("x", ctrl, KeyState::Down)),
            Some(ChordEvent::Completed)
        );
        assert_eq!(chord.state(), ChordState::Idle);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let mut chord = chord();
        chord.update(&event("k", Modifiers::CONTROL, KeyState::Down));
        // Releasing the first key is not the expected key.
        assert_eq!(chord.update(&event("k", Modifiers::CONTROL, KeyState::Up)), None);
        assert_eq!(chord.update(&event("q", Modifiers::empty(), KeyState::Down)), None);
        assert_eq!(chord.state(), ChordState::PartiallyMatched(1));
    }

    #[test]
    fn wrong_modifiers_on_expected_key_cancel() {
        let mut chord = chord();
        chord.update(&event("k", Modifiers::CONTROL, KeyState::Down));
        assert_eq!(
            chord.update(&event("r", Modifiers::CONTROL | Modifiers::SHIFT, KeyState::Down)),
            Some(ChordEvent::Canceled)
        );
        assert_eq!(chord.state(), ChordState::Idle);
    }

    #[test]
    fn wrong_modifiers_before_progress_are_ignored() {
        let mut chord = chord();
        assert_eq!(chord.update(&event("k", Modifiers::ALT, KeyState::Down)), None);
        assert_eq!(chord.state(), ChordState::Idle);
    }

    #[test]
    fn empty_chord_never_reacts() {
        let mut chord = KeyChord::new([]);
        assert_eq!(chord.update(&event("k", Modifiers::CONTROL, KeyState::Down)), None);
    }

    #[test]
    fn reset_drops_progress() {
        let mut chord = chord();
        chord.update(&event("k", Modifiers::CONTROL, KeyState::Down));
        chord.reset();
        assert_eq!(chord.update(&event("r", Modifiers::CONTROL, KeyState::Down)), None);
    }
}
