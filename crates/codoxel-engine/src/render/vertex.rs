use bytemuck::{Pod, Zeroable};

/// A vertex type that can be uploaded as-is and described to a pipeline.
///
/// Implementors must be `#[repr(C)]` so the byte view produced by
/// `bytemuck::cast_slice` matches `layout()`.
pub trait VertexLayout: Pod {
    fn layout() -> wgpu::VertexBufferLayout<'static>;
}

// ── color vertex ──────────────────────────────────────────────────────────

/// Position + linear RGB color. 24 bytes, color at offset 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Builds a vertex from 8-bit color channels, normalized to `0..=1`.
    pub fn from_rgb8(position: [f32; 3], [r, g, b]: [u8; 3]) -> Self {
        Self {
            position,
            color: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
        }
    }
}

impl VertexLayout for ColorVertex {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── textured vertex ───────────────────────────────────────────────────────

/// Position + texture coordinate. 20 bytes, uv at offset 12.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];

    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

impl VertexLayout for TexturedVertex {
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexturedVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::{offset_of, size_of};

    use super::*;

    fn offsets(layout: &wgpu::VertexBufferLayout<'_>) -> Vec<(u32, u64)> {
        layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset))
            .collect()
    }

    #[test]
    fn color_vertex_is_packed() {
        assert_eq!(size_of::<ColorVertex>(), 24);
        assert_eq!(offset_of!(ColorVertex, position), 0);
        assert_eq!(offset_of!(ColorVertex, color), 12);

        let layout = ColorVertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(offsets(&layout), vec![(0, 0), (1, 12)]);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
    }

    #[test]
    fn textured_vertex_is_packed() {
        assert_eq!(size_of::<TexturedVertex>(), 20);
        assert_eq!(offset_of!(TexturedVertex, position), 0);
        assert_eq!(offset_of!(TexturedVertex, uv), 12);

        let layout = TexturedVertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(offsets(&layout), vec![(0, 0), (1, 12)]);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x2);
    }

    #[test]
    fn byte_view_matches_stride() {
        let verts = [
            TexturedVertex::new([1.0, 2.0, 3.0], [0.5, 0.25]),
            TexturedVertex::new([4.0, 5.0, 6.0], [1.0, 0.0]),
        ];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 2 * TexturedVertex::layout().array_stride as usize);

        // Second vertex's uv.x starts at stride + 12.
        let uv_x = f32::from_ne_bytes(bytes[20 + 12..20 + 16].try_into().unwrap());
        assert_eq!(uv_x, 1.0);
    }

    #[test]
    fn rgb8_colors_are_normalized() {
        let v = ColorVertex::from_rgb8([0.0; 3], [255, 0, 51]);
        assert_eq!(v.color, [1.0, 0.0, 0.2]);
    }
}
