/// Keyboard key identifier.
///
/// Only keys the runtime binds by default get a variant. Anything else
/// becomes `Key::Unknown` carrying the platform code, which is still bindable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key code, 0 if unidentified.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single key transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,

    /// `true` for auto-repeat presses generated while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            state: KeyState::Released,
            ..Self::pressed(key)
        }
    }

    pub fn is_fresh_press(&self) -> bool {
        self.state == KeyState::Pressed && !self.repeat
    }
}
