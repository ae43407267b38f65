//! Vertex Formats
//!
//! The three interleaved layouts used by the samples. Each type is `Pod` so
//! its slices upload directly, and exposes a `wgpu::VertexBufferLayout` whose
//! shader locations match the WGSL inputs (`@location(0)` position first).

use bytemuck::{Pod, Zeroable};

/// Implemented by every vertex type the samples upload.
pub trait Vertex: Pod {
    /// Attributes in shader-location order.
    const ATTRIBUTES: &'static [wgpu::VertexAttribute];

    /// Layout describing one tightly packed vertex stream.
    #[must_use]
    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: Self::ATTRIBUTES,
        }
    }
}

/// Position + colour.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct VertexPC {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl VertexPC {
    #[must_use]
    pub const fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

impl Vertex for VertexPC {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] =
        &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];
}

/// Position + texture coordinate.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct VertexPT {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexPT {
    #[must_use]
    pub const fn new(position: [f32; 3], uv: [f32; 2]) -> Self {
        Self { position, uv }
    }
}

impl Vertex for VertexPT {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] =
        &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];
}

/// Position + normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Pod, Zeroable)]
pub struct VertexPN {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl VertexPN {
    #[must_use]
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

impl Vertex for VertexPN {
    const ATTRIBUTES: &'static [wgpu::VertexAttribute] =
        &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
}
