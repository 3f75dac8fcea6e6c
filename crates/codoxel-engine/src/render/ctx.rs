use winit::dpi::PhysicalSize;

use crate::device::Gpu;

/// Renderer-facing context (device/queue + attachment formats + drawable size).
///
/// Everything a scene needs to create pipelines and resources that are
/// compatible with the window's render pass.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub depth_format: Option<wgpu::TextureFormat>,
    pub sample_count: u32,
    pub size: PhysicalSize<u32>, // physical px
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(gpu: &'a Gpu<'_>) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            depth_format: gpu.targets().depth_format(),
            sample_count: gpu.targets().sample_count(),
            size: gpu.size(),
        }
    }

    /// Width / height of the drawable area; 1.0 while the window is minimized.
    pub fn aspect_ratio(&self) -> f32 {
        if self.size.width == 0 || self.size.height == 0 {
            return 1.0;
        }
        self.size.width as f32 / self.size.height as f32
    }
}
