use crate::mesh::Vertex;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// How a circle of vertices is attributed: cap rings get the face normal
/// and disc uvs, edge rings get radial normals and wrapped uvs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RingKind {
    TopFace,
    BottomFace,
    TopEdge,
    BottomEdge,
}

/// Push `segments + 1` vertices on a circle in the XZ plane around `center`.
/// The last vertex duplicates the first so uvs can wrap without a seam.
pub fn ring_vertices(
    out: &mut Vec<Vertex>,
    segments: u32,
    radius: f32,
    kind: RingKind,
    center: Vec3,
) {
    let theta_step = TAU / segments as f32;
    for i in 0..=segments {
        let theta = i as f32 * theta_step;
        let (sin, cos) = theta.sin_cos();
        let position = center + Vec3::new(cos * radius, 0.0, sin * radius);
        let (normal, uv) = match kind {
            RingKind::TopFace => (Vec3::Y, Vec2::new((cos + 1.0) * 0.5, (sin + 1.0) * 0.5)),
            RingKind::BottomFace => (Vec3::NEG_Y, Vec2::new((cos + 1.0) * 0.5, (sin + 1.0) * 0.5)),
            RingKind::TopEdge => (Vec3::new(cos, 0.0, sin), Vec2::new(theta / TAU, 1.0)),
            RingKind::BottomEdge => (Vec3::new(cos, 0.0, sin), Vec2::new(theta / TAU, 0.0)),
        };
        out.push(Vertex::new(position, normal, uv));
    }
}
