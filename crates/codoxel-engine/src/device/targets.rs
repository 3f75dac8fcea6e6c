use winit::dpi::PhysicalSize;

/// Size-dependent attachments that sit next to the swapchain.
///
/// - `msaa`: multisampled color target, resolved into the surface texture
///   (only when `sample_count > 1`)
/// - `depth`: depth buffer matching the color target's sample count
///
/// Both are recreated whenever the surface size changes.
pub struct RenderTargets {
    sample_count: u32,
    depth_format: Option<wgpu::TextureFormat>,
    msaa: Option<wgpu::TextureView>,
    depth: Option<wgpu::TextureView>,
}

impl RenderTargets {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        sample_count: u32,
        size: PhysicalSize<u32>,
    ) -> Self {
        let mut targets = Self {
            sample_count,
            depth_format,
            msaa: None,
            depth: None,
        };
        targets.rebuild(device, color_format, size);
        targets
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn depth_format(&self) -> Option<wgpu::TextureFormat> {
        self.depth_format
    }

    pub fn msaa_view(&self) -> Option<&wgpu::TextureView> {
        self.msaa.as_ref()
    }

    pub fn depth_view(&self) -> Option<&wgpu::TextureView> {
        self.depth.as_ref()
    }

    /// Recreates the attachments for `size`. Zero-sized requests are ignored.
    pub fn rebuild(
        &mut self,
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
    ) {
        if size.width == 0 || size.height == 0 {
            return;
        }

        self.msaa = (self.sample_count > 1).then(|| {
            attachment(device, "codoxel msaa color", color_format, self.sample_count, size)
        });

        self.depth = self
            .depth_format
            .map(|format| attachment(device, "codoxel depth", format, self.sample_count, size));
    }
}

fn attachment(
    device: &wgpu::Device,
    label: &str,
    format: wgpu::TextureFormat,
    sample_count: u32,
    size: PhysicalSize<u32>,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
