use crate::mesh::{MeshData, Vertex};
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};

/// Subdivided square in the XZ plane, +Y normals, one corner at the origin.
pub fn create_plane(size: f32, subdivisions: u32) -> Result<MeshData> {
    if subdivisions < 1 {
        bail!("plane needs at least 1 subdivision, got {}", subdivisions);
    }

    let columns = subdivisions + 1;
    let mut mesh = MeshData::with_capacity(
        (columns * columns) as usize,
        (6 * subdivisions * subdivisions) as usize,
    );

    let step = size / subdivisions as f32;
    for row in 0..=subdivisions {
        for col in 0..=subdivisions {
            let position = Vec3::new(col as f32 * step, 0.0, row as f32 * step);
            let uv = Vec2::new(
                col as f32 / subdivisions as f32,
                row as f32 / subdivisions as f32,
            );
            mesh.vertices.push(Vertex::new(position, Vec3::Y, uv));
        }
    }

    for row in 0..subdivisions {
        for col in 0..subdivisions {
            let start = row * columns + col;
            mesh.push_triangle(start + columns, start + columns + 1, start);
            mesh.push_triangle(start + columns + 1, start + 1, start);
        }
    }

    Ok(mesh)
}
