//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the scenes it drives, and the per-frame context handed to them.

mod ctx;
mod scene;
mod state;

pub use ctx::{clear_color_rgb8, FrameCtx};
pub use scene::{AppControl, Scene};
pub use state::SceneState;
