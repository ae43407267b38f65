//! Camera Tests
//!
//! Tests for:
//! - Left-handed view: +X right, +Z away from the eye
//! - Projection depth range [0, 1] between near and far
//! - Aspect ratio updates on resize

use glam::{Mat4, Vec3, Vec4};

use primer::primer_core::camera::Camera;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World point to normalised device coordinates.
fn project(camera: &Camera, world: Vec3) -> Vec3 {
    let clip = camera.view_projection_matrix() * Vec4::new(world.x, world.y, world.z, 1.0);
    clip.truncate() / clip.w
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn default_lens() {
    let camera = Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), 4.0 / 3.0);
    assert!(approx(camera.fov_y, 45.0_f32.to_radians()));
    assert!(approx(camera.near, 0.1));
    assert!(approx(camera.far, 100.0));
    assert_eq!(camera.up, Vec3::Y);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn set_aspect_from_size() {
    let mut camera = Camera::looking_at_origin(Vec3::new(0.0, 4.0, -10.0), 1.0);
    camera.set_aspect(1280, 720);
    assert!(approx(camera.aspect, 16.0 / 9.0));

    // A zero height must not divide by zero.
    camera.set_aspect(640, 0);
    assert!(camera.aspect.is_finite());
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn target_projects_to_screen_centre() {
    let camera = Camera::looking_at_origin(Vec3::new(0.0, 2.0, -4.0), 800.0 / 600.0);
    let ndc = project(&camera, Vec3::ZERO);
    assert!(approx(ndc.x, 0.0));
    assert!(approx(ndc.y, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn left_handed_axes() {
    let camera = Camera::looking_at_origin(Vec3::new(0.0, 0.0, -5.0), 1.0);
    assert!(project(&camera, Vec3::X).x > 0.0, "+X should appear on the right");
    assert!(project(&camera, Vec3::Y).y > 0.0, "+Y should appear at the top");

    let near = project(&camera, Vec3::new(0.0, 0.0, -1.0)).z;
    let far = project(&camera, Vec3::new(0.0, 0.0, 1.0)).z;
    assert!(near < far, "depth grows away from the eye");
}

#[test]
fn depth_range_spans_near_to_far() {
    let camera = Camera::new(Vec3::ZERO, Vec3::Z, 1.0);
    assert!(approx(project(&camera, Vec3::new(0.0, 0.0, 0.1)).z, 0.0));
    assert!(approx(project(&camera, Vec3::new(0.0, 0.0, 100.0)).z, 1.0));
}

#[test]
fn world_view_projection_composes() {
    let camera = Camera::looking_at_origin(Vec3::new(0.0, 4.0, -10.0), 16.0 / 9.0);
    let world = Mat4::from_translation(Vec3::new(3.0, 0.85, 2.0));
    let expected = camera.projection_matrix() * camera.view_matrix() * world;
    assert!(camera.world_view_projection(world).abs_diff_eq(expected, EPSILON));
    assert!(
        camera
            .world_view_projection(Mat4::IDENTITY)
            .abs_diff_eq(camera.view_projection_matrix(), EPSILON)
    );
}
