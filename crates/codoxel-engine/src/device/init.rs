use anyhow::{bail, Result};

/// Environment variable that forces GPU API diagnostics on (`1`/`true`) or off (`0`/`false`).
pub const GPU_DEBUG_ENV: &str = "CODOXEL_GPU_DEBUG";

/// Initialization parameters for the GPU layer.
///
/// One copy is handed to every window; each window builds its own device,
/// surface and attachments from it.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may pick from.
    pub backends: wgpu::Backends,

    pub power_preference: wgpu::PowerPreference,

    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is broadly supported and paces the loop to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Requested MSAA sample count. Falls back to 1 if the surface format
    /// cannot be multisampled at this count.
    pub sample_count: u32,

    /// Depth buffer precision in bits (16, 24 or 32); `None` disables the depth buffer.
    pub depth_bits: Option<u8>,

    /// Enables backend validation and routes API diagnostics into the logger.
    pub debug: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            sample_count: 4,
            depth_bits: None,
            debug: gpu_debug_from_env().unwrap_or(cfg!(debug_assertions)),
        }
    }
}

impl GpuInit {
    pub fn instance_flags(&self) -> wgpu::InstanceFlags {
        if self.debug {
            wgpu::InstanceFlags::debugging()
        } else {
            wgpu::InstanceFlags::empty()
        }
    }

    /// Resolves `depth_bits` into a concrete depth format.
    pub fn depth_format(&self) -> Result<Option<wgpu::TextureFormat>> {
        self.depth_bits.map(depth_format_for_bits).transpose()
    }
}

/// Maps a requested depth precision onto a wgpu depth format.
pub fn depth_format_for_bits(bits: u8) -> Result<wgpu::TextureFormat> {
    match bits {
        16 => Ok(wgpu::TextureFormat::Depth16Unorm),
        24 => Ok(wgpu::TextureFormat::Depth24Plus),
        32 => Ok(wgpu::TextureFormat::Depth32Float),
        other => bail!("unsupported depth buffer size: {other} bits (expected 16, 24 or 32)"),
    }
}

/// Reads [`GPU_DEBUG_ENV`]. Returns `None` when unset or unrecognized.
pub fn gpu_debug_from_env() -> Option<bool> {
    parse_debug_flag(std::env::var(GPU_DEBUG_ENV).ok().as_deref())
}

fn parse_debug_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_bits_map_to_formats() {
        assert_eq!(depth_format_for_bits(24).unwrap(), wgpu::TextureFormat::Depth24Plus);
        assert_eq!(depth_format_for_bits(32).unwrap(), wgpu::TextureFormat::Depth32Float);
        assert_eq!(depth_format_for_bits(16).unwrap(), wgpu::TextureFormat::Depth16Unorm);
        assert!(depth_format_for_bits(8).is_err());
    }

    #[test]
    fn no_depth_bits_means_no_depth_buffer() {
        let init = GpuInit { depth_bits: None, ..GpuInit::default() };
        assert_eq!(init.depth_format().unwrap(), None);
    }

    #[test]
    fn debug_flag_parsing() {
        assert_eq!(parse_debug_flag(Some("1")), Some(true));
        assert_eq!(parse_debug_flag(Some(" TRUE ")), Some(true));
        assert_eq!(parse_debug_flag(Some("off")), Some(false));
        assert_eq!(parse_debug_flag(Some("maybe")), None);
        assert_eq!(parse_debug_flag(None), None);
    }

    #[test]
    fn debug_instance_enables_validation() {
        let init = GpuInit { debug: true, ..GpuInit::default() };
        assert!(init.instance_flags().contains(wgpu::InstanceFlags::VALIDATION));

        let init = GpuInit { debug: false, ..GpuInit::default() };
        assert!(init.instance_flags().is_empty());
    }
}
