//! GPU rendering helpers.
//!
//! Scenes build their GPU state from these pieces once at load:
//! - `pipeline`: render pipeline from per-stage SPIR-V binaries
//! - `mesh` / `vertex`: static vertex + index buffers and their layouts
//! - `texture`: sampled textures with a CPU-generated mip chain
//! - `uniform`: per-frame values behind a fixed bind group
//! - `camera`: projection kept in sync with the drawable size

pub mod camera;
mod ctx;
pub mod mesh;
pub mod pipeline;
pub mod texture;
pub mod uniform;
pub mod vertex;

pub use camera::Camera;
pub use ctx::RenderCtx;
pub use mesh::{GpuMesh, Mesh};
pub use pipeline::{create_pipeline, PipelineDesc, ShaderStages};
pub use texture::Texture;
pub use uniform::UniformBuffer;
pub use vertex::{ColorVertex, TexturedVertex, VertexLayout};
