//! Strategy trait for grid population

use crate::float_types::Real;
use crate::grid::DiscreteGrid;
use nalgebra::Point3;

/// Strategy for populating node values and fitting cell coefficients.
///
/// Implementations must be deterministic in the node positions alone: the
/// sampler function is pure, so node values may not depend on execution
/// order or worker count.
pub trait SampleOps {
    /// Evaluate `f` exactly once per unique node, in global node order.
    /// Nodes failing `predicate` receive `Real::MAX` without being sampled.
    fn sample_nodes<F, P>(&self, grid: &DiscreteGrid, f: &F, predicate: &P) -> Vec<Real>
    where
        F: Fn(&Point3<Real>) -> Real + Sync,
        P: Fn(&Point3<Real>) -> bool + Sync;

    /// Gather every cell's node values into its contiguous coefficient
    /// block. Must only run once sampling has completed; cells exclusively
    /// read node values.
    fn fit_cells(&self, grid: &DiscreteGrid, node_values: &[Real]) -> Vec<Real>;
}
