//! Exact signed and unsigned distance queries against a triangle mesh.

pub mod triangle;

use crate::bvh::Bvh;
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::TriangleMesh;
use nalgebra::{Point3, Vector3};
use self::triangle::TriangleFeature;

/// The mesh feature (in global mesh indices) closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NearestEntity {
    Vertex(u32),
    /// Endpoint vertex indices, in face order.
    Edge(u32, u32),
    Face(usize),
}

/// Result of an unsigned distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceHit {
    pub distance: Real,
    /// Closest point on the mesh surface.
    pub point: Point3<Real>,
    /// Index of the closest triangle.
    pub face: usize,
    /// The exact feature of that triangle the closest point lies on.
    pub entity: NearestEntity,
}

/// Distance oracle composing a [`TriangleMesh`] with a [`Bvh`].
///
/// Construction fails fast on a mesh with no triangles; afterwards every
/// query is infallible and `&self`-only, so the oracle can be shared freely
/// across worker threads.
#[derive(Debug, Clone)]
pub struct MeshDistance {
    mesh: TriangleMesh,
    bvh: Bvh,
}

impl MeshDistance {
    pub fn new(mesh: TriangleMesh) -> Result<Self, ValidationError> {
        if mesh.face_count() == 0 {
            return Err(ValidationError::EmptyMesh);
        }
        let bvh = Bvh::build(&mesh);
        Ok(MeshDistance { mesh, bvh })
    }

    pub const fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Unsigned distance to the mesh, with the closest point and feature.
    pub fn distance(&self, p: &Point3<Real>) -> DistanceHit {
        let hit = self
            .bvh
            .nearest(&self.mesh, p)
            .expect("BVH over a non-empty mesh always yields a hit");

        let [a, b, c] = self.mesh.face(hit.face);
        let entity = match hit.feature {
            TriangleFeature::VertexA => NearestEntity::Vertex(a),
            TriangleFeature::VertexB => NearestEntity::Vertex(b),
            TriangleFeature::VertexC => NearestEntity::Vertex(c),
            TriangleFeature::EdgeAb => NearestEntity::Edge(a, b),
            TriangleFeature::EdgeBc => NearestEntity::Edge(b, c),
            TriangleFeature::EdgeCa => NearestEntity::Edge(c, a),
            TriangleFeature::Face => NearestEntity::Face(hit.face),
        };

        DistanceHit {
            distance: hit.distance_squared.sqrt(),
            point: hit.point,
            face: hit.face,
            entity,
        }
    }

    /// Closest point on the mesh surface.
    pub fn closest_point(&self, p: &Point3<Real>) -> Point3<Real> {
        self.distance(p).point
    }

    /// Unsigned distance only.
    pub fn unsigned_distance(&self, p: &Point3<Real>) -> Real {
        self.distance(p).distance
    }

    /// Signed distance: negative inside, positive outside, assuming
    /// consistently outward-oriented faces.
    ///
    /// The sign comes from the pseudo-normal of the exact feature the closest
    /// point lies on, which stays continuous across triangles sharing that
    /// feature.
    pub fn signed_distance(&self, p: &Point3<Real>) -> Real {
        let hit = self.distance(p);
        let direction = p - hit.point;
        if direction.dot(&self.pseudo_normal(&hit)) < 0.0 {
            -hit.distance
        } else {
            hit.distance
        }
    }

    fn pseudo_normal(&self, hit: &DistanceHit) -> Vector3<Real> {
        match hit.entity {
            NearestEntity::Vertex(v) => self.mesh.vertex_normal(v as usize),
            NearestEntity::Edge(a, b) => self.mesh.edge_normal(a, b),
            NearestEntity::Face(f) => self.mesh.face_normal(f),
        }
    }
}
