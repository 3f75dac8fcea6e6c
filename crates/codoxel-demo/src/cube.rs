//! Variant 2: a textured cube loaded from OBJ, rotating under a perspective camera.

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use codoxel_engine::assets;
use codoxel_engine::core::{AppControl, FrameCtx, Scene};
use codoxel_engine::render::{
    create_pipeline, Camera, GpuMesh, Mesh, PipelineDesc, RenderCtx, ShaderStages, Texture,
    TexturedVertex, UniformBuffer, VertexLayout,
};
use codoxel_obj::ObjMesh;
use glam::Mat4;
use winit::dpi::PhysicalSize;

use crate::config::Variant;
use crate::resources::Resources;

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Distance from the camera to the cube's center.
const CAMERA_DISTANCE: f32 = 3.0;

/// Vertex-stage transforms, column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl Transforms {
    pub fn new(model: Mat4, camera: &Camera) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            view: camera.view().to_cols_array_2d(),
            projection: camera.projection().to_cols_array_2d(),
        }
    }
}

/// Rotation about Z, then X, then Y, each by `t` radians.
pub fn model_rotation(t: f32) -> Mat4 {
    Mat4::from_rotation_z(t) * Mat4::from_rotation_x(t) * Mat4::from_rotation_y(t)
}

/// Converts a parsed OBJ into an uploadable mesh, keeping vertex order and indices.
///
/// OBJ texture space has `v = 0` at the bottom; wgpu samples with `v = 0` at the
/// top, so `v` is flipped.
pub fn cube_mesh(obj: &ObjMesh) -> Mesh<TexturedVertex> {
    let vertices = obj
        .vertices
        .iter()
        .map(|v| TexturedVertex::new(v.position, [v.uv[0], 1.0 - v.uv[1]]))
        .collect();
    Mesh::new(vertices, obj.indices.clone())
}

struct CubeGpu {
    pipeline: wgpu::RenderPipeline,
    mesh: GpuMesh,
    transforms: UniformBuffer<Transforms>,
    _texture: Texture,
    texture_bind_group: wgpu::BindGroup,
}

pub struct CubeScene {
    resources: Resources,
    camera: Camera,
    gpu: Option<CubeGpu>,
}

impl CubeScene {
    pub fn new(resources: Resources) -> Self {
        Self {
            resources,
            camera: Camera::looking_at_origin(CAMERA_DISTANCE, 1, 1),
            gpu: None,
        }
    }
}

impl Scene for CubeScene {
    fn on_load(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let shaders = self.resources.load_shaders(Variant::Cube)?;
        let image = assets::load_rgba(self.resources.texture_path())?;
        let obj = assets::load_obj(self.resources.model_path())?;

        let mesh = GpuMesh::upload(ctx.device, "cube", &cube_mesh(&obj)).context("cube upload")?;

        let texture = Texture::from_rgba(ctx.device, ctx.queue, "brick albedo", &image)?;
        let texture_layout = Texture::bind_group_layout(ctx.device, "brick albedo bgl");
        let texture_bind_group =
            texture.bind_group(ctx.device, &texture_layout, "brick albedo bind group");

        self.camera = Camera::looking_at_origin(CAMERA_DISTANCE, ctx.size.width, ctx.size.height);
        let transforms = UniformBuffer::new(
            ctx.device,
            "cube transforms",
            wgpu::ShaderStages::VERTEX,
            &Transforms::new(model_rotation(0.0), &self.camera),
        )?;

        let pipeline = create_pipeline(
            ctx,
            PipelineDesc {
                label: "cube",
                stages: ShaderStages {
                    vertex: &shaders.vertex,
                    fragment: &shaders.fragment,
                    entry_point: "main",
                },
                vertex_layout: TexturedVertex::layout(),
                bind_group_layouts: &[transforms.bind_group_layout(), &texture_layout],
                cull_mode: None,
            },
        );

        log::info!(
            "cube ready: {} vertices, {} indices, texture {}x{} ({} mips)",
            obj.vertices.len(),
            mesh.index_count(),
            image.width(),
            image.height(),
            texture.mip_level_count()
        );

        self.gpu = Some(CubeGpu {
            pipeline,
            mesh,
            transforms,
            _texture: texture,
            texture_bind_group,
        });
        Ok(())
    }

    fn on_render(&mut self, frame: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(gpu) = &self.gpu else {
            return AppControl::Continue;
        };

        let transforms = Transforms::new(model_rotation(frame.time.elapsed), &self.camera);

        frame.render(CLEAR, |ctx, pass| {
            gpu.transforms.write(ctx.queue, &transforms);

            pass.set_pipeline(&gpu.pipeline);
            pass.set_bind_group(0, gpu.transforms.bind_group(), &[]);
            pass.set_bind_group(1, &gpu.texture_bind_group, &[]);
            gpu.mesh.draw(pass);
        })
    }

    fn on_resize(&mut self, ctx: &RenderCtx<'_>, size: PhysicalSize<u32>) {
        if !self.camera.resize(size.width, size.height) {
            return;
        }
        log::debug!("cube projection updated, aspect {:.3}", self.camera.aspect());

        if let Some(gpu) = &self.gpu {
            // The model part is overwritten by the next frame.
            gpu.transforms
                .write(ctx.queue, &Transforms::new(model_rotation(0.0), &self.camera));
        }
    }

    fn on_close(&mut self) {
        self.gpu = None;
        log::debug!("cube resources released");
    }
}
