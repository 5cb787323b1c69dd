//! Hole simulation and empirical aggregation.
//!
//! - [`engine`]: single-hole simulation and parallel Monte Carlo batches

pub mod engine;

pub use engine::{
    simulate_batch, simulate_batch_capped, simulate_hole, simulate_many_holes, SimulationResult,
};
