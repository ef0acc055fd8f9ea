//! Equispaced 1-D Lagrange shape functions on the unit interval.
//!
//! Nodes sit at `i / degree` for `i in 0..=degree`, so a cell's coefficients
//! in this basis are exactly its sampled node values and no linear solve is
//! needed when fitting.

use crate::float_types::Real;

/// Largest per-axis polynomial degree the grid supports.
pub const MAX_DEGREE: u32 = 3;

/// Shape function values at local coordinate `t` in `[0, 1]`.
///
/// Only the first `degree + 1` entries are meaningful; the rest stay zero.
pub fn shape(degree: u32, t: Real) -> [Real; 4] {
    let mut n = [0.0; 4];
    match degree {
        1 => {
            n[0] = 1.0 - t;
            n[1] = t;
        }
        2 => {
            // nodes at 0, 1/2, 1
            n[0] = 2.0 * (t - 0.5) * (t - 1.0);
            n[1] = -4.0 * t * (t - 1.0);
            n[2] = 2.0 * t * (t - 0.5);
        }
        _ => {
            // nodes at 0, 1/3, 2/3, 1
            n[0] = -4.5 * (t - 1.0 / 3.0) * (t - 2.0 / 3.0) * (t - 1.0);
            n[1] = 13.5 * t * (t - 2.0 / 3.0) * (t - 1.0);
            n[2] = -13.5 * t * (t - 1.0 / 3.0) * (t - 1.0);
            n[3] = 4.5 * t * (t - 1.0 / 3.0) * (t - 2.0 / 3.0);
        }
    }
    n
}

/// First derivatives of the shape functions at `t`, with respect to the local
/// coordinate. Callers apply the chain rule for world-space gradients.
pub fn shape_derivative(degree: u32, t: Real) -> [Real; 4] {
    let mut d = [0.0; 4];
    match degree {
        1 => {
            d[0] = -1.0;
            d[1] = 1.0;
        }
        2 => {
            d[0] = 4.0 * t - 3.0;
            d[1] = -8.0 * t + 4.0;
            d[2] = 4.0 * t - 1.0;
        }
        _ => {
            d[0] = -4.5 * (3.0 * t * t - 4.0 * t + 11.0 / 9.0);
            d[1] = 13.5 * (3.0 * t * t - 10.0 / 3.0 * t + 2.0 / 3.0);
            d[2] = -13.5 * (3.0 * t * t - 8.0 / 3.0 * t + 1.0 / 3.0);
            d[3] = 4.5 * (3.0 * t * t - 2.0 * t + 2.0 / 9.0);
        }
    }
    d
}
