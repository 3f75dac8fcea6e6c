//! Codoxel engine crate.
//!
//! Platform + GPU runtime for small real-time scenes: windows and their event
//! loop, per-window wgpu contexts, scene lifecycle, resource readers and the
//! render helpers the scenes build on.

pub mod assets;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
