//! Single-threaded grid population

use super::traits::SampleOps;
use crate::float_types::Real;
use crate::grid::DiscreteGrid;
use nalgebra::Point3;

pub struct SerialSampleOps;

impl SampleOps for SerialSampleOps {
    fn sample_nodes<F, P>(&self, grid: &DiscreteGrid, f: &F, predicate: &P) -> Vec<Real>
    where
        F: Fn(&Point3<Real>) -> Real + Sync,
        P: Fn(&Point3<Real>) -> bool + Sync,
    {
        (0..grid.node_count())
            .map(|node| {
                let p = grid.node_position(node);
                if predicate(&p) { f(&p) } else { Real::MAX }
            })
            .collect()
    }

    fn fit_cells(&self, grid: &DiscreteGrid, node_values: &[Real]) -> Vec<Real> {
        let npc = grid.nodes_per_cell();
        let mut coefficients = vec![0.0; grid.cell_count() * npc];
        for (cell, block) in coefficients.chunks_mut(npc).enumerate() {
            grid.gather_cell(cell, node_values, block);
        }
        coefficients
    }
}
