//! Closest point on a triangle, with the Voronoi-region feature it lies on.
//!
//! This implements the algorithm from "Real-Time Collision Detection" by
//! Christer Ericson, extended to report which feature region the closest
//! point falls in so the caller can pick the matching pseudo-normal.

use crate::float_types::Real;
use nalgebra::Point3;

/// The feature of a triangle `(a, b, c)` a closest point lies on.
///
/// Region tests run vertices first, then edges, then the face, so a query
/// point on a region boundary resolves deterministically to the feature of
/// lower dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleFeature {
    VertexA,
    VertexB,
    VertexC,
    EdgeAb,
    EdgeBc,
    EdgeCa,
    Face,
}

/// Compute the closest point on triangle `(a, b, c)` to `p`, and the feature
/// region it belongs to.
pub fn closest_point_on_triangle(
    p: &Point3<Real>,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
) -> (Point3<Real>, TriangleFeature) {
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);

    // Vertex region outside A
    if d1 <= 0.0 && d2 <= 0.0 {
        return (*a, TriangleFeature::VertexA);
    }

    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);

    // Vertex region outside B
    if d3 >= 0.0 && d4 <= d3 {
        return (*b, TriangleFeature::VertexB);
    }

    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);

    // Vertex region outside C
    if d6 >= 0.0 && d5 <= d6 {
        return (*c, TriangleFeature::VertexC);
    }

    // Edge region of AB
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (*a + ab * v, TriangleFeature::EdgeAb);
    }

    // Edge region of CA
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (*a + ac * w, TriangleFeature::EdgeCa);
    }

    // Edge region of BC
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return (*b + (c - b) * w, TriangleFeature::EdgeBc);
    }

    // Face region
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (*a + ab * v + ac * w, TriangleFeature::Face)
}
