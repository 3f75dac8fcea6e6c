use std::collections::HashMap;

use super::types::{Key, KeyEvent};

/// Runtime-level reaction to a bound key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Close the window that received the key.
    CloseWindow,
}

/// Key → action table consulted by the runtime for every key event.
///
/// Only fresh presses trigger a binding; releases and auto-repeat are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    map: HashMap<Key, Action>,
}

impl KeyBindings {
    /// Table with no bindings at all.
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.map.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.map.remove(&key)
    }

    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        if !event.is_fresh_press() {
            return None;
        }
        self.map.get(&event.key).copied()
    }
}

impl Default for KeyBindings {
    /// `Escape` closes the window.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(Key::Escape, Action::CloseWindow);
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;

    #[test]
    fn escape_press_closes_window() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.action_for(&KeyEvent::pressed(Key::Escape)),
            Some(Action::CloseWindow)
        );
    }

    #[test]
    fn release_and_repeat_do_not_trigger() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(&KeyEvent::released(Key::Escape)), None);

        let repeat = KeyEvent {
            repeat: true,
            ..KeyEvent::pressed(Key::Escape)
        };
        assert_eq!(repeat.state, KeyState::Pressed);
        assert_eq!(bindings.action_for(&repeat), None);
    }

    #[test]
    fn other_keys_are_unbound() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for(&KeyEvent::pressed(Key::Unknown(42))), None);
        assert_eq!(bindings.action_for(&KeyEvent::pressed(Key::Unknown(0))), None);
    }

    #[test]
    fn bindings_can_be_remapped() {
        let mut bindings = KeyBindings::empty();
        assert_eq!(bindings.action_for(&KeyEvent::pressed(Key::Escape)), None);

        let q = Key::Unknown(42);
        bindings.bind(q, Action::CloseWindow);
        assert_eq!(
            bindings.action_for(&KeyEvent::pressed(q)),
            Some(Action::CloseWindow)
        );
        assert_eq!(bindings.unbind(q), Some(Action::CloseWindow));
    }
}
