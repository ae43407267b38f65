//! Uniform buffers.
//!
//! [`UniformBuffer`] holds one block bound at binding 0 of its own group.
//! [`DynamicUniformBuffer`] holds an array of blocks spaced at the device's
//! minimum uniform offset alignment, selected per draw with a dynamic offset.

use std::marker::PhantomData;

use bytemuck::Pod;
use primer_core::uniforms::align_to;
use wgpu::util::DeviceExt;

fn uniform_layout_entry<T>(visibility: wgpu::ShaderStages, dynamic: bool) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: dynamic,
            min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<T>() as u64),
        },
        count: None,
    }
}

/// A single uniform block with its own bind group.
pub struct UniformBuffer<T: Pod> {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
    _marker: PhantomData<T>,
}

impl<T: Pod> UniformBuffer<T> {
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, visibility: wgpu::ShaderStages, initial: &T) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(initial),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[uniform_layout_entry::<T>(visibility, false)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
            _marker: PhantomData,
        }
    }

    /// Replaces the block contents before the next submission.
    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }
}

/// An array of uniform blocks addressed with dynamic offsets.
pub struct DynamicUniformBuffer<T: Pod> {
    pub buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
    stride: u32,
    capacity: u32,
    staging: Vec<u8>,
    _marker: PhantomData<T>,
}

impl<T: Pod> DynamicUniformBuffer<T> {
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, visibility: wgpu::ShaderStages, capacity: u32) -> Self {
        let min_alignment = device.limits().min_uniform_buffer_offset_alignment.max(1);
        let stride = Self::stride_for(min_alignment);
        let capacity = capacity.max(1);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: u64::from(stride) * u64::from(capacity),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[uniform_layout_entry::<T>(visibility, true)],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<T>() as u64),
                }),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
            stride,
            capacity,
            staging: Vec::with_capacity(stride as usize * capacity as usize),
            _marker: PhantomData,
        }
    }

    /// Size of one slot: `size_of::<T>()` rounded up to `min_alignment`.
    #[must_use]
    pub fn stride_for(min_alignment: u32) -> u32 {
        align_to(std::mem::size_of::<T>() as u64, u64::from(min_alignment.max(1))) as u32
    }

    #[inline]
    #[must_use]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Dynamic offset of slot `index`.
    #[inline]
    #[must_use]
    pub fn offset(&self, index: u32) -> u32 {
        index * self.stride
    }

    /// Writes `values` into consecutive slots starting at 0. Values past the
    /// capacity are dropped with a warning.
    pub fn write(&mut self, queue: &wgpu::Queue, values: &[T]) {
        let count = values.len().min(self.capacity as usize);
        if count < values.len() {
            log::warn!(
                "Dynamic uniform buffer holds {} slots, {} given",
                self.capacity,
                values.len()
            );
        }

        self.staging.clear();
        self.staging.resize(self.stride as usize * count, 0);
        for (i, value) in values.iter().take(count).enumerate() {
            let start = i * self.stride as usize;
            let bytes = bytemuck::bytes_of(value);
            self.staging[start..start + bytes.len()].copy_from_slice(bytes);
        }
        if !self.staging.is_empty() {
            queue.write_buffer(&self.buffer, 0, &self.staging);
        }
    }
}
