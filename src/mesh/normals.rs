//! Face, vertex, and edge pseudo-normal computation.
//!
//! Angle-weighted pseudo-normals (Bærentzen & Aanæs) keep the signed distance
//! sign test consistent when the closest mesh feature is a vertex or an edge,
//! where the single-triangle normal is ambiguous.

use super::{EdgeKey, edge_key};
use crate::float_types::{Real, tolerance};
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// Compute all three pseudo-normal families in one sweep over the faces.
///
/// Degenerate (zero-area) faces are skipped entirely: they contribute nothing
/// to any accumulation and keep a zero face normal.
pub(super) fn pseudo_normals(
    vertices: &[Point3<Real>],
    faces: &[[u32; 3]],
) -> (
    Vec<Vector3<Real>>,
    Vec<Vector3<Real>>,
    HashMap<EdgeKey, Vector3<Real>>,
) {
    let mut face_normals = vec![Vector3::zeros(); faces.len()];
    let mut vertex_normals = vec![Vector3::zeros(); vertices.len()];
    let mut edge_sums: HashMap<EdgeKey, Vector3<Real>> = HashMap::new();

    for (face, indices) in faces.iter().enumerate() {
        let a = vertices[indices[0] as usize];
        let b = vertices[indices[1] as usize];
        let c = vertices[indices[2] as usize];

        let cross = (b - a).cross(&(c - a));
        let double_area = cross.norm();
        if double_area <= tolerance() {
            continue;
        }
        let normal = cross / double_area;
        face_normals[face] = normal;

        // Vertex accumulation, weighted by the angle subtended at each corner.
        for corner in 0..3 {
            let v = indices[corner] as usize;
            let p = vertices[v];
            let e0 = (vertices[indices[(corner + 1) % 3] as usize] - p).normalize();
            let e1 = (vertices[indices[(corner + 2) % 3] as usize] - p).normalize();
            let angle = e0.dot(&e1).clamp(-1.0, 1.0).acos();
            vertex_normals[v] += normal * angle;
        }

        // Edge accumulation; a closed edge ends up with both adjacent face
        // normals summed, a boundary edge keeps its single face normal.
        for corner in 0..3 {
            let key = edge_key(indices[corner], indices[(corner + 1) % 3]);
            *edge_sums.entry(key).or_insert_with(Vector3::zeros) += normal;
        }
    }

    for normal in &mut vertex_normals {
        let len = normal.norm();
        if len > tolerance() {
            *normal /= len;
        }
    }

    let edge_normals = edge_sums
        .into_iter()
        .map(|(key, sum)| {
            let len = sum.norm();
            if len > tolerance() {
                (key, sum / len)
            } else {
                (key, sum)
            }
        })
        .collect();

    (face_normals, vertex_normals, edge_normals)
}
