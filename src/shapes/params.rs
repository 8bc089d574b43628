use crate::mesh::MeshData;
use crate::shapes::{create_cube, create_cylinder, create_plane, create_sphere, create_torus};
use crate::transform::Transform;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Parameter bundles pairing generator arguments with a transform that gets
/// baked into the generated mesh. Defaults match a sensible preview scene.

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    pub radius: f32,
    pub segments: u32,
    pub transform: Transform,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 16,
            transform: Transform::default(),
        }
    }
}

impl Sphere {
    pub fn mesh(&self) -> Result<MeshData> {
        let mut mesh = create_sphere(self.radius, self.segments)?;
        mesh.apply_transform(&self.transform);
        Ok(mesh)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Cylinder {
    pub height: f32,
    pub radius: f32,
    pub segments: u32,
    pub transform: Transform,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            height: 1.0,
            radius: 0.75,
            segments: 16,
            transform: Transform::default(),
        }
    }
}

impl Cylinder {
    pub fn mesh(&self) -> Result<MeshData> {
        let mut mesh = create_cylinder(self.height, self.radius, self.segments)?;
        mesh.apply_transform(&self.transform);
        Ok(mesh)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Plane {
    pub size: f32,
    pub subdivisions: u32,
    pub transform: Transform,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            size: 1.0,
            subdivisions: 8,
            transform: Transform::default(),
        }
    }
}

impl Plane {
    pub fn mesh(&self) -> Result<MeshData> {
        let mut mesh = create_plane(self.size, self.subdivisions)?;
        mesh.apply_transform(&self.transform);
        Ok(mesh)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Cube {
    pub size: f32,
    pub transform: Transform,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            size: 1.0,
            transform: Transform::default(),
        }
    }
}

impl Cube {
    pub fn mesh(&self) -> Result<MeshData> {
        let mut mesh = create_cube(self.size)?;
        mesh.apply_transform(&self.transform);
        Ok(mesh)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Torus {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub major_segments: u32,
    pub minor_segments: u32,
    pub transform: Transform,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            major_segments: 24,
            minor_segments: 12,
            transform: Transform::default(),
        }
    }
}

impl Torus {
    pub fn mesh(&self) -> Result<MeshData> {
        let mut mesh = create_torus(
            self.major_radius,
            self.minor_radius,
            self.major_segments,
            self.minor_segments,
        )?;
        mesh.apply_transform(&self.transform);
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_default_sphere_generates() {
        let mesh = Sphere::default().mesh().unwrap();
        assert!(mesh.validate().is_ok());
        assert!(!mesh.vertices.is_empty());
    }

    #[test]
    fn test_transform_is_baked() {
        let sphere = Sphere {
            transform: Transform::from_position(Vec3::new(10.0, 0.0, 0.0)),
            ..Sphere::default()
        };
        let bounds = sphere.mesh().unwrap().bounds().unwrap();
        assert!((bounds.center().x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_params_propagate() {
        let sphere = Sphere {
            segments: 1,
            ..Sphere::default()
        };
        assert!(sphere.mesh().is_err());
    }

    #[test]
    fn test_params_round_trip_json() {
        let cylinder = Cylinder {
            height: 2.5,
            ..Cylinder::default()
        };
        let json = serde_json::to_string(&cylinder).unwrap();
        let back: Cylinder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.height, 2.5);
        assert_eq!(back.segments, cylinder.segments);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let plane: Plane = serde_json::from_str(r#"{"size": 4.0}"#).unwrap();
        assert_eq!(plane.size, 4.0);
        assert_eq!(plane.subdivisions, 8);
    }
}
