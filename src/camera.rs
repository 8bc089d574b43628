use crate::math::{look_at, orthographic, perspective, DEG2RAD};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Look-at camera with switchable perspective/orthographic projection.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees (perspective mode).
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub orthographic: bool,
    /// Vertical height of the view volume (orthographic mode).
    pub ortho_size: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            fov_degrees: 60.0,
            aspect_ratio: 1080.0 / 720.0,
            near_plane: 0.1,
            far_plane: 100.0,
            orthographic: false,
            ortho_size: 6.0,
        }
    }
}

impl Camera {
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.target)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        if self.orthographic {
            orthographic(
                self.ortho_size,
                self.aspect_ratio,
                self.near_plane,
                self.far_plane,
            )
        } else {
            perspective(
                self.fov_degrees * DEG2RAD,
                self.aspect_ratio,
                self.near_plane,
                self.far_plane,
            )
        }
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
