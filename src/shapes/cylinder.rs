use crate::mesh::{MeshData, Vertex};
use crate::shapes::ring::{ring_vertices, RingKind};
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};

/// Capped cylinder centered on the origin, axis +Y.
///
/// Cap and side vertices are kept separate so the rim gets a hard edge:
/// cap rings carry the face normal, edge rings carry radial normals.
pub fn create_cylinder(height: f32, radius: f32, segments: u32) -> Result<MeshData> {
    if segments < 3 {
        bail!("cylinder needs at least 3 segments, got {}", segments);
    }

    let top_y = height / 2.0;
    let bottom_y = -top_y;
    let mut mesh = MeshData::with_capacity(
        (4 * (segments + 1) + 2) as usize,
        (12 * segments) as usize,
    );

    mesh.vertices.push(Vertex::new(
        Vec3::new(0.0, top_y, 0.0),
        Vec3::Y,
        Vec2::splat(0.5),
    ));
    ring_vertices(
        &mut mesh.vertices,
        segments,
        radius,
        RingKind::TopFace,
        Vec3::new(0.0, top_y, 0.0),
    );

    let side_start = mesh.vertices.len() as u32;
    ring_vertices(
        &mut mesh.vertices,
        segments,
        radius,
        RingKind::TopEdge,
        Vec3::new(0.0, top_y, 0.0),
    );
    ring_vertices(
        &mut mesh.vertices,
        segments,
        radius,
        RingKind::BottomEdge,
        Vec3::new(0.0, bottom_y, 0.0),
    );

    let bottom_start = mesh.vertices.len() as u32;
    ring_vertices(
        &mut mesh.vertices,
        segments,
        radius,
        RingKind::BottomFace,
        Vec3::new(0.0, bottom_y, 0.0),
    );
    mesh.vertices.push(Vertex::new(
        Vec3::new(0.0, bottom_y, 0.0),
        Vec3::NEG_Y,
        Vec2::splat(0.5),
    ));

    // Top cap fan around the center vertex
    let center = 0;
    let start = 1;
    for i in 0..segments {
        mesh.push_triangle(start + i, center, start + i + 1);
    }

    // Bottom cap fan, wound the other way so it faces down
    let center = mesh.vertices.len() as u32 - 1;
    for i in 0..segments {
        mesh.push_triangle(bottom_start + i + 1, center, bottom_start + i);
    }

    // Side wall quads between the two edge rings
    let columns = segments + 1;
    for i in 0..segments {
        let start = side_start + i;
        mesh.push_triangle(start, start + 1, start + columns);
        mesh.push_triangle(start + 1, start + columns + 1, start + columns);
    }

    Ok(mesh)
}
