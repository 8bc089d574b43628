use crate::math::DEG2RAD;
use glam::{EulerRot, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Position, euler rotation (degrees, applied Y then X then Z), scale.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_degrees: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation_degrees * DEG2RAD;
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::YXZ, r.y, r.x, r.z)
            * Mat4::from_scale(self.scale)
    }
}
