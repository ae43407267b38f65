//! Surfaces of revolution.
//!
//! A profile of `(radius, height)` points is swept around the Y axis. Rings
//! share vertices with their neighbours, so normals are smoothed along the
//! profile by averaging the two adjacent segment normals.
//!
//! Triangles are emitted clockwise when seen from outside the surface.

use glam::{Vec2, Vec3};

use super::MeshData;
use crate::vertex::VertexPN;

/// Profile of the pot used by the lit and deferred samples.
///
/// Runs from the centre of the base up to the tip of the knob, so the
/// swept surface is closed. The base sits at `y = -0.85`.
const POT_PROFILE: &[[f32; 2]] = &[
    [0.00, -0.85],
    [0.55, -0.85],
    [0.75, -0.72],
    [0.90, -0.45],
    [0.96, -0.12],
    [0.92, 0.18],
    [0.78, 0.42],
    [0.62, 0.54],
    [0.64, 0.60],
    [0.56, 0.63],
    [0.40, 0.70],
    [0.20, 0.77],
    [0.09, 0.80],
    [0.12, 0.90],
    [0.09, 0.99],
    [0.00, 1.01],
];

#[derive(Debug, Clone, Copy)]
pub struct LatheOptions {
    /// Number of segments around the axis.
    pub slices: u32,
}

impl Default for LatheOptions {
    fn default() -> Self {
        Self { slices: 32 }
    }
}

/// Sweeps `profile` around the Y axis.
///
/// # Panics
///
/// Panics if the result would not fit 16-bit indices or if the profile has
/// fewer than two points.
#[must_use]
pub fn create_lathe(profile: &[[f32; 2]], options: &LatheOptions) -> MeshData<VertexPN> {
    assert!(profile.len() >= 2, "lathe profile needs at least two points");
    let slices = options.slices.max(3);
    let ring = slices as usize + 1;
    let vertex_count = profile.len() * ring;
    assert!(
        vertex_count <= usize::from(u16::MAX),
        "lathe mesh exceeds 16-bit index range"
    );

    let points: Vec<Vec2> = profile.iter().map(|&p| Vec2::from(p)).collect();

    // Outward normal of each profile segment in the (radius, height) plane.
    let segment_normals: Vec<Vec2> = points
        .windows(2)
        .map(|w| {
            let d = w[1] - w[0];
            Vec2::new(d.y, -d.x).normalize_or_zero()
        })
        .collect();

    let point_normals: Vec<Vec2> = (0..points.len())
        .map(|i| {
            let before = i.checked_sub(1).map(|j| segment_normals[j]);
            let after = segment_normals.get(i).copied();
            let sum = before.unwrap_or(Vec2::ZERO) + after.unwrap_or(Vec2::ZERO);
            sum.normalize_or_zero()
        })
        .collect();

    let mut vertices = Vec::with_capacity(vertex_count);
    for (point, normal) in points.iter().zip(&point_normals) {
        for s in 0..=slices {
            let theta = std::f32::consts::TAU * s as f32 / slices as f32 - std::f32::consts::FRAC_PI_2;
            let (sin, cos) = theta.sin_cos();
            let position = Vec3::new(point.x * cos, point.y, point.x * sin);
            let n = Vec3::new(normal.x * cos, normal.y, normal.x * sin).normalize_or_zero();
            vertices.push(VertexPN::new(position.to_array(), n.to_array()));
        }
    }

    let mut indices = Vec::with_capacity((points.len() - 1) * slices as usize * 6);
    for p in 0..points.len() - 1 {
        let lower = (p * ring) as u16;
        let upper = ((p + 1) * ring) as u16;
        for s in 0..slices as u16 {
            let (a, b) = (lower + s, lower + s + 1);
            let (c, d) = (upper + s, upper + s + 1);
            indices.extend_from_slice(&[a, c, d, a, d, b]);
        }
    }

    MeshData::new(vertices, indices)
}

/// The pot model: a closed body, rim, lid and knob roughly two units tall.
#[must_use]
pub fn create_pot() -> MeshData<VertexPN> {
    create_lathe(POT_PROFILE, &LatheOptions::default())
}
