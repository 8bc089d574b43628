use crate::mesh::{MeshData, Vertex};
use anyhow::{bail, Result};
use glam::{Vec2, Vec3};

/// Axis-aligned cube centered on the origin, four vertices per face so each
/// face keeps its own flat normal.
pub fn create_cube(size: f32) -> Result<MeshData> {
    if size <= 0.0 {
        bail!("cube size must be positive, got {}", size);
    }

    let mut mesh = MeshData::with_capacity(24, 36);
    // Tangent and bitangent chosen per face so tangent x bitangent = normal
    push_face(&mut mesh, Vec3::X, Vec3::NEG_Z, Vec3::Y, size);
    push_face(&mut mesh, Vec3::NEG_X, Vec3::Z, Vec3::Y, size);
    push_face(&mut mesh, Vec3::Y, Vec3::X, Vec3::NEG_Z, size);
    push_face(&mut mesh, Vec3::NEG_Y, Vec3::X, Vec3::Z, size);
    push_face(&mut mesh, Vec3::Z, Vec3::X, Vec3::Y, size);
    push_face(&mut mesh, Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y, size);
    Ok(mesh)
}

fn push_face(mesh: &mut MeshData, normal: Vec3, tangent: Vec3, bitangent: Vec3, size: f32) {
    let half = size / 2.0;
    let center = normal * half;
    let base = mesh.vertices.len() as u32;
    let corners = [
        (center - tangent * half - bitangent * half, Vec2::new(0.0, 0.0)),
        (center + tangent * half - bitangent * half, Vec2::new(1.0, 0.0)),
        (center + tangent * half + bitangent * half, Vec2::new(1.0, 1.0)),
        (center - tangent * half + bitangent * half, Vec2::new(0.0, 1.0)),
    ];
    for (position, uv) in corners {
        mesh.vertices.push(Vertex::new(position, normal, uv));
    }
    mesh.push_triangle(base, base + 1, base + 2);
    mesh.push_triangle(base + 2, base + 3, base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(create_cube(0.0).is_err());
        assert!(create_cube(-1.0).is_err());
    }

    #[test]
    fn test_counts() {
        let mesh = create_cube(1.0).unwrap();
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_bounds_centered() {
        let mesh = create_cube(2.0).unwrap();
        let bounds = mesh.bounds().unwrap();
        assert!((bounds.min - Vec3::splat(-1.0)).length() < 1e-5);
        assert!((bounds.max - Vec3::splat(1.0)).length() < 1e-5);
    }

    #[test]
    fn test_face_normals_axis_aligned() {
        let mesh = create_cube(1.0).unwrap();
        for v in &mesh.vertices {
            let n = v.normal();
            assert!((n.length() - 1.0).abs() < 1e-6);
            // Exactly one axis component, the other two zero
            let nonzero = [n.x, n.y, n.z].iter().filter(|c| c.abs() > 0.5).count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        let mesh = create_cube(1.0).unwrap();
        for tri in mesh.indices.chunks_exact(3) {
            let a = mesh.vertices[tri[0] as usize].position();
            let b = mesh.vertices[tri[1] as usize].position();
            let c = mesh.vertices[tri[2] as usize].position();
            let face = (b - a).cross(c - a);
            let outward = mesh.vertices[tri[0] as usize].normal();
            assert!(face.dot(outward) > 0.0);
        }
    }

    #[test]
    fn test_vertices_on_surface() {
        let mesh = create_cube(3.0).unwrap();
        for v in &mesh.vertices {
            let p = v.position().abs();
            assert!((p.max_element() - 1.5).abs() < 1e-5);
        }
    }
}
