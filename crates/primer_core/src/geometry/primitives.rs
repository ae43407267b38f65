use super::MeshData;
use crate::color::argb;
use crate::vertex::{VertexPC, VertexPN, VertexPT};

/// The coloured triangle: green apex, red right, blue left.
#[must_use]
pub fn create_triangle() -> MeshData<VertexPC> {
    MeshData::from_vertices(vec![
        VertexPC::new([0.0, 1.0, 0.0], argb(0xff00_ff00)),
        VertexPC::new([1.0, 0.0, 0.0], argb(0xffff_0000)),
        VertexPC::new([-1.0, 0.0, 0.0], argb(0xff00_00ff)),
    ])
}

/// A 2×2 quad in the XY plane with the image's top-left at `(-1, 1)`.
#[must_use]
pub fn create_textured_quad() -> MeshData<VertexPT> {
    MeshData::new(
        vec![
            VertexPT::new([-1.0, 1.0, 0.0], [0.0, 0.0]),
            VertexPT::new([1.0, 1.0, 0.0], [1.0, 0.0]),
            VertexPT::new([1.0, -1.0, 0.0], [1.0, 1.0]),
            VertexPT::new([-1.0, -1.0, 0.0], [0.0, 1.0]),
        ],
        vec![0, 1, 2, 2, 3, 0],
    )
}

/// A 10×10 floor at `y = 0` facing up.
#[must_use]
pub fn create_floor() -> MeshData<VertexPN> {
    let up = [0.0, 1.0, 0.0];
    MeshData::new(
        vec![
            VertexPN::new([-5.0, 0.0, 5.0], up),
            VertexPN::new([5.0, 0.0, 5.0], up),
            VertexPN::new([-5.0, 0.0, -5.0], up),
            VertexPN::new([5.0, 0.0, -5.0], up),
        ],
        vec![0, 1, 2, 2, 1, 3],
    )
}

/// Four clip-space corners for a triangle-strip covering the viewport.
#[must_use]
pub fn create_fullscreen_quad() -> MeshData<VertexPT> {
    MeshData::from_vertices(vec![
        VertexPT::new([-1.0, 1.0, 0.0], [0.0, 0.0]),
        VertexPT::new([1.0, 1.0, 0.0], [1.0, 0.0]),
        VertexPT::new([-1.0, -1.0, 0.0], [0.0, 1.0]),
        VertexPT::new([1.0, -1.0, 0.0], [1.0, 1.0]),
    ])
}
