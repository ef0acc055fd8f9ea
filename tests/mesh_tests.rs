use nalgebra::Point3;
use sdfgrid::{MeshDistance, TriangleMesh, ValidationError};

#[test]
fn mesh_from_buffers() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let faces = vec![[0, 1, 2]];

    let mesh = TriangleMesh::new(vertices, faces).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.face_count(), 1);

    let (a, b, c) = mesh.triangle(0);
    assert_eq!(a, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(b, Point3::new(1.0, 0.0, 0.0));
    assert_eq!(c, Point3::new(0.0, 1.0, 0.0));
}

#[test]
fn out_of_range_face_index_is_rejected() {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    let faces = vec![[0, 1, 7]];

    let result = TriangleMesh::new(vertices, faces);
    assert_eq!(
        result.err(),
        Some(ValidationError::FaceIndexOutOfRange {
            face: 0,
            index: 7,
            vertex_count: 3,
        })
    );
}

#[test]
fn empty_mesh_fails_oracle_construction() {
    let mesh = TriangleMesh::new(Vec::new(), Vec::new()).unwrap();
    let result = MeshDistance::new(mesh);
    assert_eq!(result.err(), Some(ValidationError::EmptyMesh));
}

#[test]
fn vertex_only_mesh_fails_oracle_construction() {
    // Vertices without any triangle still make no distance oracle.
    let mesh = TriangleMesh::new(vec![Point3::new(1.0, 2.0, 3.0)], Vec::new()).unwrap();
    let result = MeshDistance::new(mesh);
    assert_eq!(result.err(), Some(ValidationError::EmptyMesh));
}

#[test]
fn cube_bounding_box() {
    let mesh = TriangleMesh::cube(3.0);
    let aabb = mesh.bounding_box();
    assert_eq!(aabb.mins, Point3::new(0.0, 0.0, 0.0));
    assert_eq!(aabb.maxs, Point3::new(3.0, 3.0, 3.0));
}

#[test]
fn validation_error_displays() {
    // ValidationError must be usable through the std error trait like any
    // other error type in a caller's stack.
    let err = ValidationError::EmptyMesh;
    let _dyn_err: &dyn std::error::Error = &err;
    assert!(err.to_string().contains("EmptyMesh"));
}
