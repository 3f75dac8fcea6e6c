//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates keyboard events into `KeyEvent`s, which
//! `KeyBindings` turns into runtime actions.

mod bindings;
pub mod platform;
mod types;

pub use bindings::{Action, KeyBindings};
pub use types::{Key, KeyEvent, KeyState};
