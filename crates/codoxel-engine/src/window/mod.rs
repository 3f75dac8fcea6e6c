//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the windows, and wires them to the GPU layer
//! and the scenes.

mod registry;
mod runtime;

pub use registry::{Closed, WindowRegistry};
pub use runtime::{Runtime, RuntimeConfig};
