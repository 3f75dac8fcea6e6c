//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - owning the per-window depth and multisample attachments
//! - acquiring frames and providing encoders/views for rendering

mod gpu;
mod init;
mod surface;
mod targets;

pub use gpu::{Gpu, GpuFrame};
pub use init::{depth_format_for_bits, gpu_debug_from_env, GpuInit, GPU_DEBUG_ENV};
pub use surface::SurfaceErrorAction;
pub use targets::RenderTargets;
