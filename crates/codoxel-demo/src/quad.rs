//! Variant 1: a vertex-colored quad whose vertex stage is driven by a sine wave.

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use codoxel_engine::core::{clear_color_rgb8, AppControl, FrameCtx, Scene};
use codoxel_engine::render::{
    create_pipeline, ColorVertex, GpuMesh, Mesh, PipelineDesc, RenderCtx, ShaderStages,
    UniformBuffer, VertexLayout,
};

use crate::config::Variant;
use crate::resources::Resources;

/// Cornflower blue.
const CLEAR_RGB8: (u8, u8, u8) = (100, 149, 237);

/// Per-frame value read by the vertex stage, padded to a 16-byte block.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct WaveUniform {
    pub wave: f32,
    _pad: [f32; 3],
}

impl WaveUniform {
    /// `sin(elapsed)` with `elapsed` in seconds.
    pub fn at(elapsed: f32) -> Self {
        Self {
            wave: elapsed.sin(),
            _pad: [0.0; 3],
        }
    }
}

/// The hardcoded quad: four corners, two triangles sharing the 1-3 edge.
pub fn quad_mesh() -> Mesh<ColorVertex> {
    Mesh::new(
        vec![
            ColorVertex::from_rgb8([0.5, 0.5, 0.0], [255, 0, 0]),
            // Named "green" is half intensity.
            ColorVertex::from_rgb8([0.0, -0.5, 0.0], [0, 128, 0]),
            ColorVertex::from_rgb8([-0.5, -0.5, 0.0], [0, 0, 255]),
            ColorVertex::from_rgb8([-0.5, 0.5, 0.0], [255, 255, 255]),
        ],
        vec![0, 1, 3, 1, 2, 3],
    )
}

struct QuadGpu {
    pipeline: wgpu::RenderPipeline,
    mesh: GpuMesh,
    wave: UniformBuffer<WaveUniform>,
}

pub struct QuadScene {
    resources: Resources,
    gpu: Option<QuadGpu>,
}

impl QuadScene {
    pub fn new(resources: Resources) -> Self {
        Self {
            resources,
            gpu: None,
        }
    }
}

impl Scene for QuadScene {
    fn on_load(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let shaders = self.resources.load_shaders(Variant::Quad)?;

        let mesh = GpuMesh::upload(ctx.device, "quad", &quad_mesh()).context("quad upload")?;
        let wave = UniformBuffer::new(
            ctx.device,
            "quad wave",
            wgpu::ShaderStages::VERTEX,
            &WaveUniform::at(0.0),
        )?;

        let pipeline = create_pipeline(
            ctx,
            PipelineDesc {
                label: "quad",
                stages: ShaderStages {
                    vertex: &shaders.vertex,
                    fragment: &shaders.fragment,
                    entry_point: "main",
                },
                vertex_layout: ColorVertex::layout(),
                bind_group_layouts: &[wave.bind_group_layout()],
                cull_mode: None,
            },
        );

        log::info!("quad ready: {} indices", mesh.index_count());
        self.gpu = Some(QuadGpu {
            pipeline,
            mesh,
            wave,
        });
        Ok(())
    }

    fn on_render(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(gpu) = &self.gpu else {
            return AppControl::Continue;
        };

        let uniform = WaveUniform::at(frame.time.elapsed);
        let (r, g, b) = CLEAR_RGB8;

        frame.render(clear_color_rgb8(r, g, b), |ctx, pass| {
            gpu.wave.write(ctx.queue, &uniform);

            pass.set_pipeline(&gpu.pipeline);
            pass.set_bind_group(0, gpu.wave.bind_group(), &[]);
            gpu.mesh.draw(pass);
        })
    }

    fn on_close(&mut self) {
        self.gpu = None;
        log::debug!("quad resources released");
    }
}
