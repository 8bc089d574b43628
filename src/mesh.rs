use crate::math::AABB;
use crate::transform::Transform;
use anyhow::{bail, Result};
use glam::{Mat3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Vertex attribute layout shared by every generator.
///
/// `#[repr(C)]` + Pod so that a `&[Vertex]` casts straight to bytes for
/// buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}

/// Triangle mesh: vertex attributes plus a flat index list, three indices
/// per triangle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().map(Vertex::position))
    }

    /// Index list is a whole number of triangles and every index is in range.
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            bail!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            );
        }
        let vertex_count = self.vertices.len() as u32;
        for (i, &index) in self.indices.iter().enumerate() {
            if index >= vertex_count {
                bail!(
                    "index {} at position {} out of range (mesh has {} vertices)",
                    index,
                    i,
                    vertex_count
                );
            }
        }
        Ok(())
    }

    /// Replace normals with area-weighted face normals accumulated per vertex.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = self.vertices[a].position();
            let pb = self.vertices[b].position();
            let pc = self.vertices[c].position();
            // Cross product length is proportional to triangle area, so
            // summing unnormalized face normals weights by area.
            let face = (pb - pa).cross(pc - pa);
            accumulated[a] += face;
            accumulated[b] += face;
            accumulated[c] += face;
        }
        for (vertex, normal) in self.vertices.iter_mut().zip(accumulated) {
            vertex.normal = normal.normalize_or_zero().to_array();
        }
    }

    /// Bake a transform into positions and normals. Normals use the
    /// inverse-transpose so non-uniform scale keeps them perpendicular.
    pub fn apply_transform(&mut self, transform: &Transform) {
        let model = transform.model_matrix();
        let normal_matrix = Mat3::from_mat4(model).inverse().transpose();
        for vertex in &mut self.vertices {
            let p = model.transform_point3(vertex.position());
            let n = (normal_matrix * vertex.normal()).normalize_or_zero();
            vertex.position = p.to_array();
            vertex.normal = n.to_array();
        }
    }

    /// Append another mesh, offsetting its indices past our vertices.
    pub fn merge(&mut self, other: &MeshData) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
