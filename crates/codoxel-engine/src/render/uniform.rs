use std::marker::PhantomData;
use std::num::NonZeroU64;

use anyhow::{ensure, Context, Result};
use bytemuck::Pod;
use wgpu::util::DeviceExt;

/// Uniform blocks are sized in 16-byte steps (std140).
const UNIFORM_ALIGN: usize = 16;

/// A single `T` living in a uniform buffer, with its own bind group.
///
/// The buffer and bind group are created once; [`write`](Self::write)
/// only replaces the contents, so bound pipeline state stays valid.
pub struct UniformBuffer<T> {
    buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    _marker: PhantomData<T>,
}

impl<T: Pod> UniformBuffer<T> {
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        visibility: wgpu::ShaderStages,
        initial: &T,
    ) -> Result<Self> {
        let size = std::mem::size_of::<T>();
        ensure!(
            size % UNIFORM_ALIGN == 0,
            "uniform {label:?} is {size} bytes; pad it to a multiple of {UNIFORM_ALIGN}"
        );
        let min_binding_size =
            NonZeroU64::new(size as u64).context("uniform type must not be zero-sized")?;

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ubo")),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} bgl")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(min_binding_size),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            buffer,
            layout,
            bind_group,
            _marker: PhantomData,
        })
    }

    /// Queues a full overwrite of the uniform value.
    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
