use glam::Vec3;
use serde::{Deserialize, Serialize};

pub const MAX_LIGHTS: usize = 4;

/// Scalar Blinn-Phong material coefficients.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shine: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.25,
            specular: 1.0,
            shine: 128.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Blinn-Phong shade at a surface point. Specular uses the half vector
/// between the light and view directions.
pub fn blinn_phong(
    point: Vec3,
    normal: Vec3,
    view_pos: Vec3,
    lights: &[PointLight],
    material: &Material,
) -> Vec3 {
    let n = normal.normalize_or_zero();
    let to_view = (view_pos - point).normalize_or_zero();
    let mut color = Vec3::ZERO;
    for light in lights {
        let to_light = (light.position - point).normalize_or_zero();
        let diffuse = material.diffuse * n.dot(to_light).max(0.0);
        let half = (to_light + to_view).normalize_or_zero();
        let specular = material.specular * n.dot(half).max(0.0).powf(material.shine);
        color += (material.ambient + diffuse + specular) * light.color;
    }
    color
}

/// Classic Phong variant: specular from the reflection vector instead of
/// the half vector.
pub fn phong(
    point: Vec3,
    normal: Vec3,
    view_pos: Vec3,
    lights: &[PointLight],
    material: &Material,
) -> Vec3 {
    let n = normal.normalize_or_zero();
    let to_view = (view_pos - point).normalize_or_zero();
    let mut color = Vec3::ZERO;
    for light in lights {
        let to_light = (light.position - point).normalize_or_zero();
        let diffuse = material.diffuse * n.dot(to_light).max(0.0);
        let reflected = (-to_light).reflect(n);
        let specular = material.specular * reflected.dot(to_view).max(0.0).powf(material.shine);
        color += (material.ambient + diffuse + specular) * light.color;
    }
    color
}
