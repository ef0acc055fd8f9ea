//! `TriangleMesh`: an immutable triangle surface with precomputed pseudo-normals

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::Real;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};
use std::sync::OnceLock;

pub mod normals;
pub mod shapes;

/// An edge identified by its sorted endpoint vertex indices.
pub type EdgeKey = (u32, u32);

/// Canonical key for the edge between vertices `a` and `b`.
#[inline]
pub const fn edge_key(a: u32, b: u32) -> EdgeKey {
    if a < b { (a, b) } else { (b, a) }
}

/// A triangle surface with per-face, per-vertex, and per-edge pseudo-normals
/// computed once at construction. Immutable afterwards, so `&self` access is
/// safe from any number of threads.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    vertices: Vec<Point3<Real>>,
    faces: Vec<[u32; 3]>,
    face_normals: Vec<Vector3<Real>>,
    vertex_normals: Vec<Vector3<Real>>,
    edge_normals: HashMap<EdgeKey, Vector3<Real>>,

    /// Lazily calculated AABB that spans `vertices`.
    bounding_box: OnceLock<Aabb>,
}

impl TriangleMesh {
    /// Build a mesh from a vertex buffer and a triangle index buffer.
    ///
    /// Triangle orientation is assumed consistent (outward-facing normals);
    /// that orientation is what makes the signed distance sign test valid.
    /// Every face index is validated before any normal is computed.
    pub fn new(
        vertices: Vec<Point3<Real>>,
        faces: Vec<[u32; 3]>,
    ) -> Result<Self, ValidationError> {
        for (face, indices) in faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertices.len() {
                    return Err(ValidationError::FaceIndexOutOfRange {
                        face,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }

        let (face_normals, vertex_normals, edge_normals) =
            normals::pseudo_normals(&vertices, &faces);

        Ok(TriangleMesh {
            vertices,
            faces,
            face_normals,
            vertex_normals,
            edge_normals,
            bounding_box: OnceLock::new(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> Point3<Real> {
        self.vertices[index]
    }

    #[inline]
    pub fn face(&self, index: usize) -> [u32; 3] {
        self.faces[index]
    }

    /// The three corner positions of face `index`.
    #[inline]
    pub fn triangle(&self, index: usize) -> (Point3<Real>, Point3<Real>, Point3<Real>) {
        let [a, b, c] = self.faces[index];
        (
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        )
    }

    /// Unit normal of face `index`; the zero vector for a degenerate face.
    #[inline]
    pub fn face_normal(&self, index: usize) -> Vector3<Real> {
        self.face_normals[index]
    }

    /// Angle-weighted pseudo-normal of vertex `index`.
    #[inline]
    pub fn vertex_normal(&self, index: usize) -> Vector3<Real> {
        self.vertex_normals[index]
    }

    /// Pseudo-normal of the edge between vertices `a` and `b`; the zero
    /// vector if no face uses that edge.
    pub fn edge_normal(&self, a: u32, b: u32) -> Vector3<Real> {
        self.edge_normals
            .get(&edge_key(a, b))
            .copied()
            .unwrap_or_else(Vector3::zeros)
    }

    pub fn bounding_box(&self) -> &Aabb {
        self.bounding_box
            .get_or_init(|| Aabb::from_points(&self.vertices))
    }
}
