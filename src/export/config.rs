use crate::mesh::MeshData;
use crate::shapes::{Cube, Cylinder, Plane, Sphere, Torus};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One shape in a batch config, tagged by shape name in the JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeConfig {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Plane(Plane),
    Cube(Cube),
    Torus(Torus),
}

impl ShapeConfig {
    pub fn shape_name(&self) -> &'static str {
        match self {
            ShapeConfig::Sphere(_) => "sphere",
            ShapeConfig::Cylinder(_) => "cylinder",
            ShapeConfig::Plane(_) => "plane",
            ShapeConfig::Cube(_) => "cube",
            ShapeConfig::Torus(_) => "torus",
        }
    }

    pub fn mesh(&self) -> Result<MeshData> {
        match self {
            ShapeConfig::Sphere(s) => s.mesh(),
            ShapeConfig::Cylinder(c) => c.mesh(),
            ShapeConfig::Plane(p) => p.mesh(),
            ShapeConfig::Cube(c) => c.mesh(),
            ShapeConfig::Torus(t) => t.mesh(),
        }
    }
}

/// Named entry in a batch config file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub name: String,
    #[serde(flatten)]
    pub config: ShapeConfig,
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Vec<ShapeEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .context(format!("failed to read config {:?}", path))?;
    let entries: Vec<ShapeEntry> =
        serde_json::from_str(&text).context(format!("failed to parse config {:?}", path))?;
    Ok(entries)
}
