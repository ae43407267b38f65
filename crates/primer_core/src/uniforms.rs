//! Uniform block layouts.
//!
//! Every struct here mirrors a WGSL `struct` bound as `var<uniform>`. Field
//! order and padding match the WGSL side byte for byte; sizes are multiples of
//! 16 so arrays of them keep uniform-buffer alignment.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Rounds `value` up to the next multiple of `alignment` (a power of two).
#[inline]
#[must_use]
pub const fn align_to(value: u64, alignment: u64) -> u64 {
    (value + alignment - 1) & !(alignment - 1)
}

/// A single combined world-view-projection matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TransformUniforms {
    pub world_view_proj: Mat4,
}

impl Default for TransformUniforms {
    fn default() -> Self {
        Self {
            world_view_proj: Mat4::IDENTITY,
        }
    }
}

impl TransformUniforms {
    #[must_use]
    pub fn new(world_view_proj: Mat4) -> Self {
        Self { world_view_proj }
    }
}

/// World and view-projection kept separate so the shader can light in world
/// space.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub world: Mat4,
    pub view_proj: Mat4,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
        }
    }
}

/// Per-camera block of the deferred geometry pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view_proj: Mat4,
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY,
        }
    }
}

/// Per-draw block of the deferred geometry pass, bound with a dynamic offset.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawUniforms {
    pub world: Mat4,
    pub color: Vec4,
}

impl Default for DrawUniforms {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            color: Vec4::ONE,
        }
    }
}

impl DrawUniforms {
    #[must_use]
    pub fn new(world: Mat4, color: Vec4) -> Self {
        Self { world, color }
    }
}
