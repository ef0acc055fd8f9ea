//! Regular grid of cells carrying local Lagrange polynomial bases.
//!
//! The grid owns a single shared node lattice: per axis there are
//! `degree * resolution + 1` node planes, so nodes on shared cell faces,
//! edges, and corners exist exactly once and are never resampled. Field
//! population samples every unique node once, then gathers each cell's node
//! values into a contiguous coefficient block for O(1) interpolation.

pub mod lagrange;
pub mod sampler;

use crate::aabb::Aabb;
use crate::distance::MeshDistance;
use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use self::sampler::SampleOps;

/// One sampled scalar field: node values plus per-cell coefficient blocks.
/// Written once during population, read-only afterwards.
#[derive(Debug, Clone)]
struct Field {
    node_values: Vec<Real>,
    /// Cell-major, `nodes_per_cell` coefficients per cell, local-node order.
    cell_coefficients: Vec<Real>,
}

/// Regular axis-aligned partition of a bounding box into cells with a shared
/// Lagrange node lattice.
#[derive(Debug, Clone)]
pub struct DiscreteGrid {
    domain: Aabb,
    resolution: [u32; 3],
    cell_size: Vector3<Real>,
    degree: u32,
    nodes_per_axis: [usize; 3],
    fields: Vec<Field>,
}

impl DiscreteGrid {
    /// Create an empty grid over `domain` with `resolution` cells per axis
    /// and a per-axis Lagrange `degree` of 1, 2, or 3.
    pub fn new(
        domain: Aabb,
        resolution: [u32; 3],
        degree: u32,
    ) -> Result<Self, ValidationError> {
        if resolution.iter().any(|&cells| cells == 0) {
            return Err(ValidationError::InvalidResolution(resolution));
        }
        if degree < 1 || degree > lagrange::MAX_DEGREE {
            return Err(ValidationError::UnsupportedDegree(degree));
        }

        let extents = domain.extents();
        let cell_size = Vector3::new(
            extents.x / resolution[0] as Real,
            extents.y / resolution[1] as Real,
            extents.z / resolution[2] as Real,
        );
        let nodes_per_axis = [
            (degree * resolution[0] + 1) as usize,
            (degree * resolution[1] + 1) as usize,
            (degree * resolution[2] + 1) as usize,
        ];

        Ok(DiscreteGrid {
            domain,
            resolution,
            cell_size,
            degree,
            nodes_per_axis,
            fields: Vec::new(),
        })
    }

    pub const fn domain(&self) -> &Aabb {
        &self.domain
    }

    pub const fn resolution(&self) -> [u32; 3] {
        self.resolution
    }

    pub const fn cell_size(&self) -> Vector3<Real> {
        self.cell_size
    }

    pub const fn degree(&self) -> u32 {
        self.degree
    }

    pub fn cell_count(&self) -> usize {
        self.resolution.iter().map(|&cells| cells as usize).product()
    }

    /// Number of unique nodes in the shared lattice.
    pub fn node_count(&self) -> usize {
        self.nodes_per_axis.iter().product()
    }

    pub fn nodes_per_cell(&self) -> usize {
        (self.degree as usize + 1).pow(3)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// World position of global node `index`.
    pub fn node_position(&self, index: usize) -> Point3<Real> {
        let [nx, ny, _] = self.nodes_per_axis;
        let i = index % nx;
        let jk = index / nx;
        let j = jk % ny;
        let k = jk / ny;

        let d = self.degree as Real;
        self.domain.mins
            + Vector3::new(
                i as Real * self.cell_size.x / d,
                j as Real * self.cell_size.y / d,
                k as Real * self.cell_size.z / d,
            )
    }

    /// Sampled values of every unique node of `field`.
    pub fn node_values(&self, field: usize) -> &[Real] {
        &self.fields[field].node_values
    }

    /// Sample `f` once at every unique node, then fit per-cell coefficients.
    /// Returns the id of the new field.
    pub fn add_field<F>(&mut self, f: F) -> usize
    where
        F: Fn(&Point3<Real>) -> Real + Sync,
    {
        self.add_field_with_predicate(f, |_: &Point3<Real>| true)
    }

    /// Like [`add_field`](Self::add_field), but nodes failing `predicate`
    /// are not sampled and store `Real::MAX` instead.
    pub fn add_field_with_predicate<F, P>(&mut self, f: F, predicate: P) -> usize
    where
        F: Fn(&Point3<Real>) -> Real + Sync,
        P: Fn(&Point3<Real>) -> bool + Sync,
    {
        #[cfg(not(feature = "parallel"))]
        let ops = sampler::SerialSampleOps;
        #[cfg(feature = "parallel")]
        let ops = sampler::ParallelSampleOps;

        let node_values = ops.sample_nodes(self, &f, &predicate);
        // Sampling is complete here; fitting only reads node values.
        let cell_coefficients = ops.fit_cells(self, &node_values);

        self.fields.push(Field {
            node_values,
            cell_coefficients,
        });
        self.fields.len() - 1
    }

    /// Populate a field by sampling a mesh distance oracle at every unique
    /// node: the signed distance when `signed` is set, the unsigned distance
    /// otherwise. Returns the id of the new field.
    pub fn add_sdf(&mut self, md: &MeshDistance, signed: bool) -> usize {
        if signed {
            self.add_field(|p| md.signed_distance(p))
        } else {
            self.add_field(|p| md.unsigned_distance(p))
        }
    }

    /// Evaluate `field` at `p` through the containing cell's local basis.
    pub fn interpolate(&self, field: usize, p: &Point3<Real>) -> Result<Real, ValidationError> {
        let (cell, local) = self.locate(p)?;
        let coefficients = self.cell_coefficients(field, cell);

        let nx = lagrange::shape(self.degree, local.x);
        let ny = lagrange::shape(self.degree, local.y);
        let nz = lagrange::shape(self.degree, local.z);

        let m = self.degree as usize + 1;
        let mut value = 0.0;
        let mut index = 0;
        for k in 0..m {
            for j in 0..m {
                for i in 0..m {
                    value += coefficients[index] * nx[i] * ny[j] * nz[k];
                    index += 1;
                }
            }
        }
        Ok(value)
    }

    /// Analytic gradient of `field` at `p`.
    pub fn gradient(
        &self,
        field: usize,
        p: &Point3<Real>,
    ) -> Result<Vector3<Real>, ValidationError> {
        let (cell, local) = self.locate(p)?;
        let coefficients = self.cell_coefficients(field, cell);

        let nx = lagrange::shape(self.degree, local.x);
        let ny = lagrange::shape(self.degree, local.y);
        let nz = lagrange::shape(self.degree, local.z);
        let dx = lagrange::shape_derivative(self.degree, local.x);
        let dy = lagrange::shape_derivative(self.degree, local.y);
        let dz = lagrange::shape_derivative(self.degree, local.z);

        let m = self.degree as usize + 1;
        let mut gradient = Vector3::zeros();
        let mut index = 0;
        for k in 0..m {
            for j in 0..m {
                for i in 0..m {
                    let c = coefficients[index];
                    gradient.x += c * dx[i] * ny[j] * nz[k];
                    gradient.y += c * nx[i] * dy[j] * nz[k];
                    gradient.z += c * nx[i] * ny[j] * dz[k];
                    index += 1;
                }
            }
        }
        // Chain rule from the local [0,1] coordinate to world space.
        gradient.x /= self.cell_size.x;
        gradient.y /= self.cell_size.y;
        gradient.z /= self.cell_size.z;
        Ok(gradient)
    }

    /// Find the cell containing `p` and the local coordinate inside it.
    /// Points exactly on the max boundary clamp into the last cell.
    fn locate(&self, p: &Point3<Real>) -> Result<([usize; 3], Vector3<Real>), ValidationError> {
        if !self.domain.contains(p) {
            return Err(ValidationError::OutOfDomain(*p));
        }
        let relative = p - self.domain.mins;

        let mut cell = [0usize; 3];
        let mut local = Vector3::zeros();
        for axis in 0..3 {
            let t = relative[axis] / self.cell_size[axis];
            let c = (t.floor() as usize).min(self.resolution[axis] as usize - 1);
            cell[axis] = c;
            local[axis] = t - c as Real;
        }
        Ok((cell, local))
    }

    /// Coefficient block of `cell` (given by axis indices) for `field`.
    fn cell_coefficients(&self, field: usize, cell: [usize; 3]) -> &[Real] {
        let [rx, ry, _] = self.resolution;
        let cell_index = (cell[2] * ry as usize + cell[1]) * rx as usize + cell[0];
        let npc = self.nodes_per_cell();
        let start = cell_index * npc;
        &self.fields[field].cell_coefficients[start..start + npc]
    }

    /// Copy one cell's node values into `out` in local-node order
    /// (x fastest, then y, then z).
    pub(crate) fn gather_cell(&self, cell: usize, node_values: &[Real], out: &mut [Real]) {
        let rx = self.resolution[0] as usize;
        let ry = self.resolution[1] as usize;
        let cx = cell % rx;
        let cyz = cell / rx;
        let cy = cyz % ry;
        let cz = cyz / ry;

        let [nx, ny, _] = self.nodes_per_axis;
        let d = self.degree as usize;
        let m = d + 1;

        let mut index = 0;
        for k in 0..m {
            let gk = cz * d + k;
            for j in 0..m {
                let gj = cy * d + j;
                for i in 0..m {
                    let gi = cx * d + i;
                    out[index] = node_values[(gk * ny + gj) * nx + gi];
                    index += 1;
                }
            }
        }
    }
}
