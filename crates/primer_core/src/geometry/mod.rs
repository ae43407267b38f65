//! Static Geometry
//!
//! CPU-side vertex/index data for every mesh the samples draw. Data is built
//! once, uploaded once, and never mutated on the GPU afterwards.
//!
//! - [`primitives`]: the hand-written triangle, quad, floor and fullscreen strip
//! - [`lathe`]: surfaces of revolution, including the pot model

pub mod lathe;
pub mod primitives;

pub use lathe::{LatheOptions, create_lathe, create_pot};
pub use primitives::{create_floor, create_fullscreen_quad, create_textured_quad, create_triangle};

use crate::vertex::Vertex;

/// Indexed triangle list with 16-bit indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData<V: Vertex> {
    pub vertices: Vec<V>,
    /// Triangle list indices; empty for non-indexed draws.
    pub indices: Vec<u16>,
}

impl<V: Vertex> MeshData<V> {
    #[must_use]
    pub fn new(vertices: Vec<V>, indices: Vec<u16>) -> Self {
        Self { vertices, indices }
    }

    /// Non-indexed mesh.
    #[must_use]
    pub fn from_vertices(vertices: Vec<V>) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of triangles in the list.
    #[must_use]
    pub fn primitive_count(&self) -> u32 {
        if self.is_indexed() {
            self.index_count() / 3
        } else {
            self.vertex_count() / 3
        }
    }

    /// Raw bytes of the vertex array.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw bytes of the index array.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
