use glam::{Mat4, Vec3};

/// Fixed left-handed perspective camera.
///
/// +X right, +Y up, +Z into the screen. Depth maps to `[0, 1]`, matching the
/// clip space wgpu expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// 45° vertical FOV, near 0.1, far 100.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
        }
    }

    /// Camera looking at the origin from `eye`.
    #[must_use]
    pub fn looking_at_origin(eye: Vec3, aspect: f32) -> Self {
        Self::new(eye, Vec3::ZERO, aspect)
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// World -> view.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    /// View -> clip.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Full world-view-projection for an object placed with `world`.
    #[must_use]
    pub fn world_view_projection(&self, world: Mat4) -> Mat4 {
        self.view_projection_matrix() * world
    }
}
