//! Time subsystem.
//!
//! One `FrameClock` per window; the runtime calls `tick()` once per rendered
//! frame and hands the resulting `FrameTime` to the scene.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
