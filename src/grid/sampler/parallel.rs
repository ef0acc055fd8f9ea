//! Multithreaded grid population
//!
//! The node value array is partitioned into contiguous disjoint chunks, one
//! chunk per work item, so every slot is written by exactly one worker and
//! no lock is needed. Rayon's scope end is the barrier between the sampling
//! and fitting phases.

use super::traits::SampleOps;
use crate::float_types::Real;
use crate::grid::DiscreteGrid;
use nalgebra::Point3;
use rayon::prelude::*;

pub struct ParallelSampleOps;

impl SampleOps for ParallelSampleOps {
    fn sample_nodes<F, P>(&self, grid: &DiscreteGrid, f: &F, predicate: &P) -> Vec<Real>
    where
        F: Fn(&Point3<Real>) -> Real + Sync,
        P: Fn(&Point3<Real>) -> bool + Sync,
    {
        let node_count = grid.node_count();
        let mut values = vec![0.0; node_count];

        // A few chunks per thread to even out uneven sampling cost.
        let chunk = (node_count / (rayon::current_num_threads() * 4)).max(1);
        values
            .par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(chunk_index, slot)| {
                let base = chunk_index * chunk;
                for (offset, value) in slot.iter_mut().enumerate() {
                    let p = grid.node_position(base + offset);
                    *value = if predicate(&p) { f(&p) } else { Real::MAX };
                }
            });
        values
    }

    fn fit_cells(&self, grid: &DiscreteGrid, node_values: &[Real]) -> Vec<Real> {
        let npc = grid.nodes_per_cell();
        let mut coefficients = vec![0.0; grid.cell_count() * npc];
        coefficients
            .par_chunks_mut(npc)
            .enumerate()
            .for_each(|(cell, block)| {
                grid.gather_cell(cell, node_values, block);
            });
        coefficients
    }
}
