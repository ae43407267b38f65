//! Deferred scene description.
//!
//! The light table, model placements and camera of the deferred sample. All
//! of it is constant data; the renderer uploads the lights once and reuses
//! the placements every frame.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

/// Capacity of the light array in the lighting-pass uniform block.
pub const MAX_LIGHTS: usize = 16;

/// Point light with a linear falloff to zero at `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub radius: f32,
    pub color: Vec3,
}

impl PointLight {
    #[must_use]
    pub const fn new(position: [f32; 3], radius: f32, color: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            radius,
            color: Vec3::from_array(color),
        }
    }

    /// Contribution factor at `distance`: `saturate(1 - d / radius)`.
    #[must_use]
    pub fn attenuation(&self, distance: f32) -> f32 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        (1.0 - distance / self.radius).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn to_gpu(&self) -> GpuLight {
        GpuLight {
            position_radius: self.position.extend(self.radius),
            color: self.color.extend(1.0),
        }
    }
}

/// GPU layout of one light: `vec4(position, radius)`, `vec4(color, 1)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuLight {
    pub position_radius: Vec4,
    pub color: Vec4,
}

/// Lighting-pass uniform block.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightingUniforms {
    pub lights: [GpuLight; MAX_LIGHTS],
    pub light_count: u32,
    pub _pad: [u32; 3],
}

impl Default for LightingUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl LightingUniforms {
    /// Packs up to [`MAX_LIGHTS`] lights; extras are dropped with a warning.
    #[must_use]
    pub fn from_lights(lights: &[PointLight]) -> Self {
        if lights.len() > MAX_LIGHTS {
            log::warn!(
                "{} lights given, only the first {MAX_LIGHTS} are used",
                lights.len()
            );
        }
        let mut uniforms = Self::default();
        for (slot, light) in uniforms.lights.iter_mut().zip(lights) {
            *slot = light.to_gpu();
        }
        uniforms.light_count = lights.len().min(MAX_LIGHTS) as u32;
        uniforms
    }
}

/// The sixteen lights of the deferred sample. The first is the wide
/// overhead fill light.
pub const DEFERRED_LIGHTS: [PointLight; MAX_LIGHTS] = [
    PointLight::new([0.0, 8.0, -4.0], 10.0, [1.0, 1.0, 1.0]),
    PointLight::new([0.0, 2.3, -1.0], 2.0, [1.0, 1.0, 1.0]),
    PointLight::new([-3.5, 2.3, -3.0], 2.0, [0.6, 0.1, 1.0]),
    PointLight::new([3.5, 2.3, -3.0], 2.0, [0.0, 1.0, 0.0]),
    PointLight::new([-3.5, 2.3, 1.0], 2.0, [0.0, 0.0, 1.0]),
    PointLight::new([3.5, 2.3, 1.0], 2.0, [1.0, 0.0, 0.0]),
    PointLight::new([-1.5, 1.0, -3.5], 3.0, [0.0, 0.8, 0.0]),
    PointLight::new([1.5, 1.0, -3.5], 3.0, [0.3, 0.6, 1.0]),
    PointLight::new([-1.5, 1.0, 0.5], 3.0, [1.0, 0.9, 0.1]),
    PointLight::new([1.5, 1.0, 0.5], 3.0, [1.0, 0.4, 0.9]),
    PointLight::new([0.0, 1.5, -1.5], 2.0, [0.3, 0.1, 0.9]),
    PointLight::new([-2.5, 3.0, -0.5], 4.0, [0.3, 1.0, 0.9]),
    PointLight::new([2.75, 0.85, 1.0], 3.0, [0.3, 1.0, 0.9]),
    PointLight::new([-3.0, 1.5, -4.0], 2.5, [0.3, 0.8, 1.0]),
    PointLight::new([3.0, 1.5, -4.0], 2.5, [0.8, 0.1, 1.0]),
    PointLight::new([2.5, 0.5, 1.0], 2.5, [1.0, 0.7, 0.1]),
];

/// A model instance in the geometry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub color: Vec4,
}

impl Placement {
    #[must_use]
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(position),
            color: Vec4::new(color[0], color[1], color[2], 1.0),
        }
    }

    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

/// The five pots, resting on the floor.
pub const POT_PLACEMENTS: [Placement; 5] = [
    Placement::new([0.0, 0.85, 0.0], [0.8, 1.0, 0.8]),
    Placement::new([-3.0, 0.85, -2.0], [0.8, 0.7, 0.6]),
    Placement::new([3.0, 0.85, -2.0], [0.3, 0.5, 0.4]),
    Placement::new([-3.0, 0.85, 2.0], [0.3, 0.5, 0.7]),
    Placement::new([3.0, 0.85, 2.0], [0.8, 0.8, 0.8]),
];

/// The floor, drawn last and without culling.
pub const FLOOR_PLACEMENT: Placement = Placement::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

/// Eye position of the deferred sample's camera, looking at the origin.
pub const DEFERRED_CAMERA_EYE: Vec3 = Vec3::new(0.0, 4.0, -10.0);
