// Copyright 2025 the ZoomImage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative predicates over keyboard events.

use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};

/// The modifiers a [`KeyMatcher`] compares. Lock keys and other modifier
/// states are ignored.
pub const ASSIST_MODIFIERS: Modifiers = Modifiers::CONTROL
    .union(Modifiers::ALT)
    .union(Modifiers::SHIFT)
    .union(Modifiers::META);

/// Matches a key, an exact set of assist modifiers and optionally a key phase.
///
/// Modifiers are compared as a set: `CONTROL | SHIFT` and `SHIFT | CONTROL`
/// are the same matcher.
///
/// ```rust
/// use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};
/// use zoomimage_keys::KeyMatcher;
///
/// let matcher = KeyMatcher::new(Key::Character("=".into()))
///     .assist_keys(Modifiers::CONTROL)
///     .state(KeyState::Down);
///
/// let event = KeyboardEvent {
///     key: Key::Character("=".into()),
///     modifiers: Modifiers::CONTROL,
///     state: KeyState::Down,
///     ..Default::default()
/// };
/// assert!(matcher.matches(&event));
///
/// let with_alt = KeyboardEvent {
///     modifiers: Modifiers::CONTROL | Modifiers::ALT,
///     ..event
/// };
/// assert!(!matcher.matches(&with_alt));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyMatcher {
    key: Key,
    assist_keys: Option<Modifiers>,
    state: Option<KeyState>,
}

impl KeyMatcher {
    /// Matches `key` with no assist modifier held, in either phase.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            assist_keys: None,
            state: None,
        }
    }

    /// Requires exactly `assist_keys` to be held.
    ///
    /// Bits outside [`ASSIST_MODIFIERS`] are dropped; an empty set behaves like
    /// the default of no assist modifier.
    #[must_use]
    pub fn assist_keys(mut self, assist_keys: Modifiers) -> Self {
        let assist_keys = assist_keys & ASSIST_MODIFIERS;
        self.assist_keys = (!assist_keys.is_empty()).then_some(assist_keys);
        self
    }

    /// Restricts the matcher to one phase.
    #[must_use]
    pub fn state(mut self, state: KeyState) -> Self {
        self.state = Some(state);
        self
    }

    /// The key this matcher expects.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The assist modifiers required, `None` for none held.
    #[must_use]
    pub fn required_assist_keys(&self) -> Option<Modifiers> {
        self.assist_keys
    }

    /// The phase required, `None` for any.
    #[must_use]
    pub fn required_state(&self) -> Option<KeyState> {
        self.state
    }

    /// Returns `true` when `event` carries this matcher's key, regardless of
    /// modifiers and phase.
    #[must_use]
    pub fn matches_key(&self, event: &KeyboardEvent) -> bool {
        event.key == self.key
    }

    /// Returns `true` when `event` satisfies every condition of this matcher.
    #[must_use]
    pub fn matches(&self, event: &KeyboardEvent) -> bool {
        if !self.matches_key(event) {
            return false;
        }
        let pressed = event.modifiers & ASSIST_MODIFIERS;
        let modifiers_match = match self.assist_keys {
            None => pressed.is_empty(),
            Some(required) => pressed == required,
        };
        modifiers_match && self.state.is_none_or(|state| state == event.state)
    }
}

#[cfg(test)]
mod tests {
    use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers, NamedKey};

    use super::KeyMatcher;

    fn event(key: Key, modifiers: Modifiers, state: KeyState) -> KeyboardEvent {
        KeyboardEvent {
            key,
            modifiers,
            state,
            ..Default::default()
        }
    }

    fn arrow_up() -> Key {
        Key::Named(NamedKey::ArrowUp)
    }

    #[test]
    fn plain_matcher_rejects_any_modifier() {
        let matcher = KeyMatcher::new(arrow_up());
        assert!(matcher.matches(&event(arrow_up(), Modifiers::empty(), KeyState::Down)));
        assert!(matcher.matches(&event(arrow_up(), Modifiers::empty(), KeyState::Up)));
        assert!(!matcher.matches(&event(arrow_up(), Modifiers::SHIFT, KeyState::Down)));
        assert!(!matcher.matches(&event(
            Key::Named(NamedKey::ArrowDown),
            Modifiers::empty(),
            KeyState::Down
        )));
    }

    #[test]
    fn assist_keys_must_match_exactly() {
        let matcher = KeyMatcher::new(arrow_up()).assist_keys(Modifiers::CONTROL);
        assert!(matcher.matches(&event(arrow_up(), Modifiers::CONTROL, KeyState::Down)));
        assert!(!matcher.matches(&event(
            arrow_up(),
            Modifiers::CONTROL | Modifiers::ALT,
            KeyState::Down
        )));
        assert!(!matcher.matches(&event(arrow_up(), Modifiers::META, KeyState::Down)));
        assert!(!matcher.matches(&event(arrow_up(), Modifiers::empty(), KeyState::Down)));
    }

    #[test]
    fn modifier_sets_are_unordered() {
        let a = KeyMatcher::new(arrow_up()).assist_keys(Modifiers::CONTROL | Modifiers::SHIFT);
        let b = KeyMatcher::new(arrow_up()).assist_keys(Modifiers::SHIFT | Modifiers::CONTROL);
        assert_eq!(a, b);
    }

    #[test]
    fn lock_keys_are_ignored() {
        let matcher = KeyMatcher::new(arrow_up()).assist_keys(Modifiers::CONTROL);
        assert!(matcher.matches(&event(
            arrow_up(),
            Modifiers::CONTROL | Modifiers::CAPS_LOCK | Modifiers::NUM_LOCK,
            KeyState::Down
        )));
        assert_eq!(
            KeyMatcher::new(arrow_up()).assist_keys(Modifiers::CAPS_LOCK),
            KeyMatcher::new(arrow_up())
        );
    }

    #[test]
    fn phase_filter() {
        let matcher = KeyMatcher::new(arrow_up()).state(KeyState::Up);
        assert!(matcher.matches(&event(arrow_up(), Modifiers::empty(), KeyState::Up)));
        assert!(!matcher.matches(&event(arrow_up(), Modifiers::empty(), KeyState::Down)));
        assert_eq!(matcher.required_state(), Some(KeyState::Up));
        assert_eq!(matcher.required_assist_keys(), None);
    }
}
