use glam::{Mat4, Vec3};

pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

/// View matrix for an eye looking at a target, world up +Y.
pub fn look_at(eye: Vec3, target: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, Vec3::Y)
}

/// Perspective projection, OpenGL clip space. `fov_y` in radians.
pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_y, aspect_ratio, near, far)
}

/// Orthographic projection sized by the vertical extent of the view volume.
pub fn orthographic(ortho_height: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    let half_h = ortho_height * 0.5;
    let half_w = half_h * aspect_ratio;
    Mat4::orthographic_rh_gl(-half_w, half_w, -half_h, half_h, near, far)
}
