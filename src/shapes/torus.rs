use crate::mesh::{MeshData, Vertex};
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Torus around the Y axis. `major_radius` runs from the origin to the tube
/// center, `minor_radius` is the tube itself. Both directions carry a
/// duplicated seam row/column so uvs wrap cleanly.
pub fn create_torus(
    major_radius: f32,
    minor_radius: f32,
    major_segments: u32,
    minor_segments: u32,
) -> Result<MeshData> {
    if major_segments < 3 || minor_segments < 3 {
        bail!(
            "torus needs at least 3 segments in each direction, got {}x{}",
            major_segments,
            minor_segments
        );
    }
    if minor_radius >= major_radius {
        bail!(
            "torus minor radius {} must be smaller than major radius {}",
            minor_radius,
            major_radius
        );
    }

    let columns = minor_segments + 1;
    let mut mesh = MeshData::with_capacity(
        ((major_segments + 1) * columns) as usize,
        (6 * major_segments * minor_segments) as usize,
    );

    for i in 0..=major_segments {
        let theta = i as f32 * TAU / major_segments as f32;
        // Unit direction from the axis out to this tube slice
        let radial = Vec3::new(theta.cos(), 0.0, theta.sin());
        for j in 0..=minor_segments {
            let phi = j as f32 * TAU / minor_segments as f32;
            let normal = radial * phi.cos() + Vec3::Y * phi.sin();
            let position = radial * major_radius + normal * minor_radius;
            let uv = Vec2::new(
                i as f32 / major_segments as f32,
                j as f32 / minor_segments as f32,
            );
            mesh.vertices.push(Vertex::new(position, normal, uv));
        }
    }

    for i in 0..major_segments {
        for j in 0..minor_segments {
            let start = i * columns + j;
            mesh.push_triangle(start, start + columns + 1, start + columns);
            mesh.push_triangle(start, start + 1, start + columns + 1);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_segments() {
        assert!(create_torus(1.0, 0.25, 2, 8).is_err());
        assert!(create_torus(1.0, 0.25, 8, 2).is_err());
    }

    #[test]
    fn test_rejects_degenerate_radii() {
        assert!(create_torus(0.5, 0.5, 8, 8).is_err());
        assert!(create_torus(0.25, 0.5, 8, 8).is_err());
    }

    #[test]
    fn test_vertex_and_triangle_counts() {
        let mesh = create_torus(1.0, 0.25, 24, 12).unwrap();
        assert_eq!(mesh.vertices.len(), 25 * 13);
        assert_eq!(mesh.triangle_count(), 2 * 24 * 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_vertices_at_tube_distance() {
        let mesh = create_torus(2.0, 0.5, 16, 8).unwrap();
        for v in &mesh.vertices {
            let p = v.position();
            // Distance from the ring through the tube centers
            let ring_dist = (Vec2::new(p.x, p.z).length() - 2.0).hypot(p.y);
            assert!((ring_dist - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_normals_unit_and_outward_from_tube() {
        let mesh = create_torus(2.0, 0.5, 16, 8).unwrap();
        for v in &mesh.vertices {
            let n = v.normal();
            assert!((n.length() - 1.0).abs() < 1e-5);
            let p = v.position();
            let radial = Vec3::new(p.x, 0.0, p.z).normalize();
            let tube_center = radial * 2.0;
            let expected = (p - tube_center).normalize();
            assert!((n - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_winding_matches_normals() {
        let mesh = create_torus(1.0, 0.25, 12, 8).unwrap();
        for tri in mesh.indices.chunks_exact(3) {
            let a = mesh.vertices[tri[0] as usize].position();
            let b = mesh.vertices[tri[1] as usize].position();
            let c = mesh.vertices[tri[2] as usize].position();
            let face = (b - a).cross(c - a);
            assert!(face.dot(mesh.vertices[tri[0] as usize].normal()) > 0.0);
        }
    }

    #[test]
    fn test_bounds_symmetric() {
        let mesh = create_torus(1.0, 0.25, 24, 12).unwrap();
        let bounds = mesh.bounds().unwrap();
        assert!((bounds.max.x - 1.25).abs() < 1e-3);
        assert!((bounds.min.x + 1.25).abs() < 1e-3);
        assert!((bounds.max.y - 0.25).abs() < 1e-3);
    }
}
