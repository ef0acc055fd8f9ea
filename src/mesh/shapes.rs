//! Simple closed meshes with consistent outward orientation, used by tests
//! and demo drivers.

use super::TriangleMesh;
use crate::float_types::Real;
use nalgebra::Point3;

impl TriangleMesh {
    /// Axis-aligned cube spanning `[0, size]^3`: 8 vertices, 12 outward-facing
    /// triangles.
    pub fn cube(size: Real) -> TriangleMesh {
        let s = size;
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(s, 0.0, 0.0),
            Point3::new(s, s, 0.0),
            Point3::new(0.0, s, 0.0),
            Point3::new(0.0, 0.0, s),
            Point3::new(s, 0.0, s),
            Point3::new(s, s, s),
            Point3::new(0.0, s, s),
        ];
        let faces = vec![
            // -z
            [0, 2, 1],
            [0, 3, 2],
            // +z
            [4, 5, 6],
            [4, 6, 7],
            // -y
            [0, 1, 5],
            [0, 5, 4],
            // +y
            [3, 6, 2],
            [3, 7, 6],
            // -x
            [0, 4, 7],
            [0, 7, 3],
            // +x
            [1, 2, 6],
            [1, 6, 5],
        ];
        // Indices are constructed in range, so this cannot fail.
        match TriangleMesh::new(vertices, faces) {
            Ok(mesh) => mesh,
            Err(_) => unreachable!(),
        }
    }

    /// A small regular-ish tetrahedron with outward-facing triangles.
    pub fn tetrahedron() -> TriangleMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.866, 0.0),
            Point3::new(0.5, 0.289, 0.816),
        ];
        let faces = vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
        match TriangleMesh::new(vertices, faces) {
            Ok(mesh) => mesh,
            Err(_) => unreachable!(),
        }
    }
}
