use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use sdfgrid::float_types::Real;
use sdfgrid::{Aabb, DiscreteGrid, ValidationError};

fn unit_domain() -> Aabb {
    Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}

#[test]
fn zero_resolution_is_rejected() {
    let result = DiscreteGrid::new(unit_domain(), [0, 4, 4], 2);
    assert_eq!(
        result.err(),
        Some(ValidationError::InvalidResolution([0, 4, 4]))
    );
}

#[test]
fn unsupported_degrees_are_rejected() {
    assert_eq!(
        DiscreteGrid::new(unit_domain(), [2, 2, 2], 0).err(),
        Some(ValidationError::UnsupportedDegree(0))
    );
    assert_eq!(
        DiscreteGrid::new(unit_domain(), [2, 2, 2], 4).err(),
        Some(ValidationError::UnsupportedDegree(4))
    );
}

#[test]
fn node_deduplication_counts() {
    // For a (2,2,2) grid the shared lattice has (2*degree + 1)^3 unique
    // nodes, strictly fewer than 8 cells times (degree + 1)^3 nodes.
    for degree in 1..=3u32 {
        let grid = DiscreteGrid::new(unit_domain(), [2, 2, 2], degree).unwrap();
        let expected = (2 * degree as usize + 1).pow(3);
        assert_eq!(grid.node_count(), expected);
        assert!(grid.node_count() < 8 * grid.nodes_per_cell());
        assert_eq!(grid.cell_count(), 8);
    }
}

#[test]
fn cell_size_derivation() {
    let domain = Aabb::new(Point3::new(-1.0, 0.0, 2.0), Point3::new(1.0, 3.0, 4.0));
    let grid = DiscreteGrid::new(domain, [4, 3, 2], 1).unwrap();
    assert_relative_eq!(grid.cell_size().x, 0.5);
    assert_relative_eq!(grid.cell_size().y, 1.0);
    assert_relative_eq!(grid.cell_size().z, 1.0);
}

#[test]
fn linear_field_is_reproduced_exactly() {
    // A Lagrange basis of any supported degree contains the linear
    // polynomials, so a linear field must come back exactly at arbitrary
    // interior points, not just at nodes.
    let domain = Aabb::new(Point3::new(-1.0, -2.0, 0.0), Point3::new(2.0, 1.0, 3.0));
    let f = |p: &Point3<Real>| 3.0 * p.x - 2.0 * p.y + p.z + 0.5;

    for degree in 1..=3u32 {
        let mut grid = DiscreteGrid::new(domain, [3, 2, 4], degree).unwrap();
        let field = grid.add_field(f);

        let probes = [
            Point3::new(0.1, -0.7, 1.3),
            Point3::new(-0.9, 0.9, 0.05),
            Point3::new(1.99, -1.99, 2.99),
            Point3::new(0.5, -0.5, 1.5),
        ];
        for p in &probes {
            let value = grid.interpolate(field, p).unwrap();
            assert_relative_eq!(value, f(p), epsilon = 1e-9);

            let gradient = grid.gradient(field, p).unwrap();
            assert_relative_eq!(gradient.x, 3.0, epsilon = 1e-8);
            assert_relative_eq!(gradient.y, -2.0, epsilon = 1e-8);
            assert_relative_eq!(gradient.z, 1.0, epsilon = 1e-8);
        }
    }
}

#[test]
fn quadratic_field_needs_degree_two() {
    let domain = unit_domain();
    let f = |p: &Point3<Real>| p.x * p.x;

    let mut grid = DiscreteGrid::new(domain, [2, 2, 2], 2).unwrap();
    let field = grid.add_field(f);
    let p = Point3::new(0.3, 0.4, 0.6);
    assert_relative_eq!(grid.interpolate(field, &p).unwrap(), 0.09, epsilon = 1e-9);

    let gradient = grid.gradient(field, &p).unwrap();
    assert_relative_eq!(gradient.x, 0.6, epsilon = 1e-8);
    assert_relative_eq!(gradient.y, 0.0, epsilon = 1e-8);
}

#[test]
fn interpolation_is_idempotent() {
    let mut grid = DiscreteGrid::new(unit_domain(), [3, 3, 3], 3).unwrap();
    let field = grid.add_field(|p: &Point3<Real>| (p.x * 5.0).sin() + p.y * p.z);

    let p = Point3::new(0.37, 0.62, 0.11);
    let first = grid.interpolate(field, &p).unwrap();
    let second = grid.interpolate(field, &p).unwrap();
    assert_eq!(first, second);
}

#[test]
fn out_of_domain_is_recoverable() {
    let mut grid = DiscreteGrid::new(unit_domain(), [2, 2, 2], 1).unwrap();
    let field = grid.add_field(|p: &Point3<Real>| p.x);

    let outside = Point3::new(1.5, 0.5, 0.5);
    assert_eq!(
        grid.interpolate(field, &outside).err(),
        Some(ValidationError::OutOfDomain(outside))
    );
    assert_eq!(
        grid.gradient(field, &outside).err(),
        Some(ValidationError::OutOfDomain(outside))
    );

    // The grid stays fully usable afterwards.
    let inside = Point3::new(0.25, 0.25, 0.25);
    assert_relative_eq!(grid.interpolate(field, &inside).unwrap(), 0.25, epsilon = 1e-12);
}

#[test]
fn domain_corners_are_inside() {
    let mut grid = DiscreteGrid::new(unit_domain(), [2, 2, 2], 2).unwrap();
    let field = grid.add_field(|p: &Point3<Real>| p.x + p.y + p.z);

    // Both extreme corners evaluate without OutOfDomain.
    let min_corner = Point3::new(0.0, 0.0, 0.0);
    let max_corner = Point3::new(1.0, 1.0, 1.0);
    assert_relative_eq!(grid.interpolate(field, &min_corner).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(grid.interpolate(field, &max_corner).unwrap(), 3.0, epsilon = 1e-12);
}

#[test]
fn predicate_skips_nodes() {
    let mut grid = DiscreteGrid::new(unit_domain(), [2, 2, 2], 1).unwrap();

    // Only sample nodes in the lower half; everything else is marked.
    let field = grid.add_field_with_predicate(
        |p: &Point3<Real>| p.x,
        |p: &Point3<Real>| p.z < 0.25,
    );

    let values = grid.node_values(field);
    let skipped = values.iter().filter(|&&v| v == Real::MAX).count();
    let sampled = values.len() - skipped;
    // 27 lattice nodes, 9 of them on the z = 0 plane.
    assert_eq!(values.len(), 27);
    assert_eq!(sampled, 9);
}

#[test]
fn repeated_population_is_deterministic() {
    let mut grid = DiscreteGrid::new(unit_domain(), [3, 2, 2], 3).unwrap();
    let f = |p: &Point3<Real>| (p.x - 0.3).hypot(p.y - 0.6) * p.z;

    let first = grid.add_field(f);
    let second = grid.add_field(f);
    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(grid.field_count(), 2);
    assert_eq!(grid.node_values(first), grid.node_values(second));
}

/// One worker and N workers must produce identical node values: each node is
/// sampled exactly once from its position alone.
#[cfg(feature = "parallel")]
#[test]
fn single_thread_pool_matches_default_pool() {
    let f = |p: &Point3<Real>| (p.x * 7.0).sin() * (p.y * 3.0).cos() + p.z;

    let mut parallel_grid = DiscreteGrid::new(unit_domain(), [4, 4, 4], 2).unwrap();
    let parallel_field = parallel_grid.add_field(f);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap();
    let mut serial_grid = DiscreteGrid::new(unit_domain(), [4, 4, 4], 2).unwrap();
    let serial_field = pool.install(|| serial_grid.add_field(f));

    assert_eq!(
        parallel_grid.node_values(parallel_field),
        serial_grid.node_values(serial_field)
    );
}

#[test]
fn gradient_of_product_field() {
    let mut grid = DiscreteGrid::new(unit_domain(), [2, 2, 2], 3).unwrap();
    let field = grid.add_field(|p: &Point3<Real>| p.x * p.y * p.z);

    let p = Point3::new(0.5, 0.25, 0.75);
    let gradient = grid.gradient(field, &p).unwrap();
    let expected = Vector3::new(p.y * p.z, p.x * p.z, p.x * p.y);
    assert_relative_eq!(gradient.x, expected.x, epsilon = 1e-8);
    assert_relative_eq!(gradient.y, expected.y, epsilon = 1e-8);
    assert_relative_eq!(gradient.z, expected.z, epsilon = 1e-8);
}
