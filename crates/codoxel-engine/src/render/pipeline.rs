use std::borrow::Cow;

use super::RenderCtx;

/// Precompiled per-stage shader binaries, both exposing `entry_point`.
#[derive(Debug, Clone, Copy)]
pub struct ShaderStages<'a> {
    pub vertex: &'a [u32],
    pub fragment: &'a [u32],
    pub entry_point: &'a str,
}

/// Everything that varies between the demo pipelines.
pub struct PipelineDesc<'a> {
    pub label: &'a str,
    pub stages: ShaderStages<'a>,
    pub vertex_layout: wgpu::VertexBufferLayout<'a>,
    pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
    pub cull_mode: Option<wgpu::Face>,
}

/// Creates a shader module from a SPIR-V word stream.
pub fn spirv_module(device: &wgpu::Device, label: &str, words: &[u32]) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::SpirV(Cow::Borrowed(words)),
    })
}

/// Builds a render pipeline from independently compiled vertex and fragment
/// stages.
///
/// Color output targets the window surface; depth testing (`Less`, writes on)
/// is enabled when the window has a depth buffer, and the multisample count
/// follows the window's attachments.
pub fn create_pipeline(ctx: &RenderCtx<'_>, desc: PipelineDesc<'_>) -> wgpu::RenderPipeline {
    let PipelineDesc {
        label,
        stages,
        vertex_layout,
        bind_group_layouts,
        cull_mode,
    } = desc;

    let vs = spirv_module(ctx.device, &format!("{label} vertex stage"), stages.vertex);
    let fs = spirv_module(ctx.device, &format!("{label} fragment stage"), stages.fragment);

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} pipeline layout")),
            bind_group_layouts,
            immediate_size: 0,
        });

    let depth_stencil = ctx.depth_format.map(|format| wgpu::DepthStencilState {
        format,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &vs,
            entry_point: Some(stages.entry_point),
            compilation_options: Default::default(),
            buffers: &[vertex_layout],
        },

        fragment: Some(wgpu::FragmentState {
            module: &fs,
            entry_point: Some(stages.entry_point),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil,
        multisample: wgpu::MultisampleState {
            count: ctx.sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },

        multiview_mask: None,
        cache: None,
    })
}
