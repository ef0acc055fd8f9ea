//! Discretizes the **signed distance field** of a closed triangle mesh onto a regular
//! grid of cells carrying local [Lagrange](https://en.wikipedia.org/wiki/Lagrange_polynomial)
//! polynomial bases, so the field can be interpolated and differentiated in O(1)
//! anywhere inside a bounding box without re-querying the mesh.
//!
//! The pipeline: a [`TriangleMesh`] with precomputed angle-weighted pseudo-normals,
//! a [BVH](bvh) over its triangles, a [`MeshDistance`] oracle answering exact
//! closest-point and signed-distance queries, and a [`DiscreteGrid`] populated by
//! sampling the oracle once per unique grid node.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for multithreaded BVH construction and grid population
//!
//! # Example
//! ```
//! use sdfgrid::{TriangleMesh, MeshDistance, DiscreteGrid};
//! use sdfgrid::aabb::Aabb;
//! use nalgebra::Point3;
//!
//! let mesh = TriangleMesh::cube(1.0);
//! let md = MeshDistance::new(mesh).unwrap();
//!
//! let domain = Aabb::new(Point3::new(-0.1, -0.1, -0.1), Point3::new(1.1, 1.1, 1.1));
//! let mut grid = DiscreteGrid::new(domain, [4, 4, 4], 3).unwrap();
//! let field = grid.add_sdf(&md, true);
//!
//! let center = Point3::new(0.5, 0.5, 0.5);
//! let d = grid.interpolate(field, &center).unwrap();
//! assert!((d + 0.5).abs() < 1e-6);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod bvh;
pub mod distance;
pub mod errors;
pub mod float_types;
pub mod grid;
pub mod mesh;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use aabb::Aabb;
pub use distance::{DistanceHit, MeshDistance, NearestEntity};
pub use errors::ValidationError;
pub use grid::DiscreteGrid;
pub use mesh::TriangleMesh;
