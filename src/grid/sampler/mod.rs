//! Field population for [`DiscreteGrid`](crate::grid::DiscreteGrid)
//!
//! This module provides node sampling and cell fitting with dependency
//! inversion, allowing for different strategy implementations
//! (serial/parallel).

pub mod traits;

#[cfg(not(feature = "parallel"))]
pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use traits::SampleOps;

#[cfg(not(feature = "parallel"))]
pub use serial::SerialSampleOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelSampleOps;
