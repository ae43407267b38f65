//! Static Geometry Tests
//!
//! Tests for:
//! - Triangle, textured quad, floor and fullscreen strip contents
//! - Lathe sweep: vertex/index counts, index range, closed poles
//! - Pot model: unit normals, outward clockwise winding, 16-bit fit
//! - MeshData byte views and primitive counts

use glam::Vec3;

use primer::primer_core::color::argb;
use primer::primer_core::geometry::{
    LatheOptions, MeshData, create_floor, create_fullscreen_quad, create_lathe, create_pot,
    create_textured_quad, create_triangle,
};
use primer::primer_core::vertex::{Vertex, VertexPC, VertexPN, VertexPT};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn triangles<V: Vertex>(mesh: &MeshData<V>) -> impl Iterator<Item = [usize; 3]> + '_ {
    mesh.indices
        .chunks_exact(3)
        .map(|t| [usize::from(t[0]), usize::from(t[1]), usize::from(t[2])])
}

// ============================================================================
// Hand-written Primitives
// ============================================================================

#[test]
fn triangle_vertices_and_colors() {
    let mesh = create_triangle();
    assert!(!mesh.is_indexed());
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.primitive_count(), 1);

    assert_eq!(mesh.vertices[0].position, [0.0, 1.0, 0.0]);
    assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
    assert_eq!(mesh.vertices[2].position, [-1.0, 0.0, 0.0]);

    assert_eq!(mesh.vertices[0].color, [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(mesh.vertices[1].color, [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(mesh.vertices[2].color, [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn textured_quad_layout() {
    let mesh = create_textured_quad();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 3, 0]);
    assert_eq!(mesh.primitive_count(), 2);

    // Top-left corner carries the image origin.
    assert_eq!(mesh.vertices[0].position, [-1.0, 1.0, 0.0]);
    assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    assert_eq!(mesh.vertices[2].uv, [1.0, 1.0]);
}

#[test]
fn textured_quad_faces_negative_z() {
    // The samples look down +Z, so the front face must point at -Z.
    let mesh = create_textured_quad();
    for [a, b, c] in triangles(&mesh) {
        let p = |i: usize| Vec3::from(mesh.vertices[i].position);
        let n = (p(b) - p(a)).cross(p(c) - p(a));
        assert!(n.z < 0.0, "quad triangle faces {n:?}");
    }
}

#[test]
fn floor_is_flat_and_faces_up() {
    let mesh = create_floor();
    assert_eq!(mesh.indices, vec![0, 1, 2, 2, 1, 3]);
    for v in &mesh.vertices {
        assert_eq!(v.position[1], 0.0);
        assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        assert!(approx(v.position[0].abs(), 5.0));
        assert!(approx(v.position[2].abs(), 5.0));
    }
    for [a, b, c] in triangles(&mesh) {
        let p = |i: usize| Vec3::from(mesh.vertices[i].position);
        let n = (p(b) - p(a)).cross(p(c) - p(a));
        assert!(n.y > 0.0);
    }
}

#[test]
fn fullscreen_strip_covers_clip_space() {
    let mesh = create_fullscreen_quad();
    assert!(!mesh.is_indexed());
    assert_eq!(mesh.vertex_count(), 4);

    let xs: Vec<f32> = mesh.vertices.iter().map(|v| v.position[0]).collect();
    let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position[1]).collect();
    assert_eq!(xs.iter().copied().fold(f32::MAX, f32::min), -1.0);
    assert_eq!(xs.iter().copied().fold(f32::MIN, f32::max), 1.0);
    assert_eq!(ys.iter().copied().fold(f32::MAX, f32::min), -1.0);
    assert_eq!(ys.iter().copied().fold(f32::MIN, f32::max), 1.0);
}

// ============================================================================
// Lathe
// ============================================================================

#[test]
fn lathe_counts() {
    let profile = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    let mesh = create_lathe(&profile, &LatheOptions { slices: 8 });
    assert_eq!(mesh.vertex_count(), 4 * 9);
    assert_eq!(mesh.index_count(), 3 * 8 * 6);
}

#[test]
fn lathe_clamps_slices() {
    let profile = [[1.0, 0.0], [1.0, 1.0]];
    let mesh = create_lathe(&profile, &LatheOptions { slices: 1 });
    assert_eq!(mesh.vertex_count(), 2 * 4);
}

#[test]
fn lathe_seam_vertices_coincide() {
    let profile = [[1.0, 0.0], [1.0, 2.0]];
    let slices = 12;
    let mesh = create_lathe(&profile, &LatheOptions { slices });
    let ring = slices as usize + 1;
    for row in 0..profile.len() {
        let first = Vec3::from(mesh.vertices[row * ring].position);
        let last = Vec3::from(mesh.vertices[row * ring + ring - 1].position);
        assert!(first.distance(last) < EPSILON);
    }
}

#[test]
#[should_panic(expected = "at least two points")]
fn lathe_rejects_single_point() {
    let _ = create_lathe(&[[1.0, 0.0]], &LatheOptions::default());
}

#[test]
fn cylinder_normals_are_radial() {
    let profile = [[1.0, 0.0], [1.0, 1.0]];
    let mesh = create_lathe(&profile, &LatheOptions { slices: 16 });
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        let radial = Vec3::new(p.x, 0.0, p.z).normalize();
        assert!(n.distance(radial) < 1e-3, "normal {n:?} at {p:?}");
    }
}

// ============================================================================
// Pot Model
// ============================================================================

#[test]
fn pot_fits_16_bit_indices() {
    let pot = create_pot();
    assert!(pot.vertex_count() <= u32::from(u16::MAX));
    assert!(pot.is_indexed());
    assert_eq!(pot.index_count() % 3, 0);
    for &i in &pot.indices {
        assert!(u32::from(i) < pot.vertex_count());
    }
}

#[test]
fn pot_normals_are_unit_length() {
    for v in &create_pot().vertices {
        assert!(approx(Vec3::from(v.normal).length(), 1.0), "{:?}", v.normal);
    }
}

#[test]
fn pot_is_closed_at_both_poles() {
    let pot = create_pot();
    let lowest = pot
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MAX, f32::min);
    let highest = pot
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MIN, f32::max);
    assert!(approx(lowest, -0.85));
    assert!(highest > 1.0);

    let on_axis = |v: &VertexPN| approx(v.position[0], 0.0) && approx(v.position[2], 0.0);
    assert!(pot.vertices.iter().any(|v| on_axis(v) && approx(v.position[1], lowest)));
    assert!(pot.vertices.iter().any(|v| on_axis(v) && approx(v.position[1], highest)));
}

#[test]
fn pot_triangles_wind_clockwise_from_outside() {
    let pot = create_pot();
    let mut checked = 0;
    for [a, b, c] in triangles(&pot) {
        let p = |i: usize| Vec3::from(pot.vertices[i].position);
        let face = (p(b) - p(a)).cross(p(c) - p(a));
        if face.length_squared() < 1e-10 {
            // Collapsed triangles at the poles.
            continue;
        }
        let normal = Vec3::from(pot.vertices[a].normal)
            + Vec3::from(pot.vertices[b].normal)
            + Vec3::from(pot.vertices[c].normal);
        assert!(face.dot(normal) > 0.0, "triangle {a},{b},{c} faces inward");
        checked += 1;
    }
    assert!(checked > pot.primitive_count() / 2);
}

// ============================================================================
// MeshData
// ============================================================================

#[test]
fn mesh_data_byte_views() {
    let mesh = create_textured_quad();
    assert_eq!(mesh.vertex_bytes().len(), 4 * std::mem::size_of::<VertexPT>());
    assert_eq!(mesh.index_bytes().len(), 6 * 2);
}

#[test]
fn vertex_strides_match_layouts() {
    assert_eq!(VertexPC::layout().array_stride, 28);
    assert_eq!(VertexPT::layout().array_stride, 20);
    assert_eq!(VertexPN::layout().array_stride, 24);
    assert_eq!(VertexPN::ATTRIBUTES[1].offset, 12);
}

#[test]
fn triangle_colors_unpack_argb() {
    let mesh = create_triangle();
    assert_eq!(mesh.vertices[1].color, argb(0xffff_0000));
}
