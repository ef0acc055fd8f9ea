//! Validation errors

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (FaceIndexOutOfRange) A face references a vertex index outside the vertex buffer
    #[error(
        "(FaceIndexOutOfRange) face {face} references vertex {index}, but the mesh has {vertex_count} vertices"
    )]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
    /// (EmptyMesh) The mesh has no triangles, so no closest-triangle query can succeed
    #[error("(EmptyMesh) the mesh has no triangles")]
    EmptyMesh,
    /// (InvalidResolution) A grid axis has a zero cell count
    #[error("(InvalidResolution) resolution {0:?} has a zero axis")]
    InvalidResolution([u32; 3]),
    /// (UnsupportedDegree) The per-axis polynomial degree is outside the supported range
    #[error("(UnsupportedDegree) degree {0} is not in 1..=3")]
    UnsupportedDegree(u32),
    /// (OutOfDomain) The query point lies outside the grid's bounding box
    #[error("(OutOfDomain) point {0} lies outside the grid domain")]
    OutOfDomain(Point3<Real>),
}
