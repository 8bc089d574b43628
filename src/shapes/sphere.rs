use crate::mesh::{MeshData, Vertex};
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

/// UV sphere from a latitude/longitude grid.
///
/// Rows run pole to pole (`phi` in [0, pi]), columns wrap around the Y axis.
/// Each row carries `segments + 1` vertices so the uv seam can duplicate the
/// first column. The pole rows collapse to a point per column; stitching is a
/// fan against each pole row plus quad bands between interior rows.
pub fn create_sphere(radius: f32, segments: u32) -> Result<MeshData> {
    if segments < 3 {
        bail!("sphere needs at least 3 segments, got {}", segments);
    }

    let columns = segments + 1;
    let mut mesh = MeshData::with_capacity(
        (columns * columns) as usize,
        (6 * segments * (segments - 1)) as usize,
    );

    let theta_step = TAU / segments as f32;
    let phi_step = PI / segments as f32;
    for row in 0..=segments {
        let phi = row as f32 * phi_step;
        for col in 0..=segments {
            let theta = col as f32 * theta_step;
            let position = radius
                * Vec3::new(
                    phi.sin() * theta.sin(),
                    phi.cos(),
                    phi.sin() * theta.cos(),
                );
            let uv = Vec2::new(
                col as f32 / segments as f32,
                row as f32 / segments as f32,
            );
            mesh.vertices
                .push(Vertex::new(position, position.normalize(), uv));
        }
    }

    // Top cap: fan between the pole row and the first full row
    let pole_start = 0;
    let side_start = columns;
    for i in 0..segments {
        mesh.push_triangle(side_start + i + 1, pole_start + i, side_start + i);
    }

    // Interior bands
    for row in 1..segments - 1 {
        for col in 0..segments {
            let start = row * columns + col;
            mesh.push_triangle(start + columns, start + 1, start);
            mesh.push_triangle(start + columns, start + columns + 1, start + 1);
        }
    }

    // Bottom cap: fan between the last full row and the pole row
    let pole_start = segments * columns;
    let side_start = (segments - 1) * columns;
    for i in 0..segments {
        mesh.push_triangle(side_start + i, pole_start + i, side_start + i + 1);
    }

    Ok(mesh)
}
