//! # Hardy — shots-to-par distributions for the three-outcome golf model
//!
//! G. H. Hardy's golf model: each shot is **good** (+2) with probability p,
//! **ordinary** (+1) with probability 1−p−q, or **bad** (+0) with probability
//! q, and a hole is complete once the accumulated value reaches par. This
//! crate answers "how many shots does that take?" two ways:
//!
//! | Approach | Module | Description |
//! |----------|--------|-------------|
//! | Monte Carlo | [`simulation`] | Seeded, rayon-parallel trials reduced to an empirical frequency table |
//! | Exact DP | [`density`] | Forward evolution of the transient-state probability vector, truncated at a step horizon |
//!
//! The exact side has two solvers with deliberately distinct contracts:
//!
//! - [`density::completion_pmf`] — distribution of shots to reach *or exceed*
//!   par (both boundary outcomes merged into one absorbing class).
//! - [`density::first_passage_pmf`] — distribution of shots to first reach
//!   one chosen boundary: landing exactly on par vs. overshooting to par+1.
//!   Mass absorbed at the other boundary is dropped, so this pmf sums to ≤ 1
//!   even at an infinite horizon; the dropped mass is reported separately.
//!
//! Truncated pmfs are sub-stochastic by design: the missing mass is the
//! caller's signal for how much tail the horizon cut off. Raising the horizon
//! tightens the estimate; no call ever returns a misleading "complete"
//! distribution.
//!
//! All randomness flows through explicitly seeded `SmallRng` streams — there
//! is no global RNG state anywhere in the crate.

pub mod constants;
pub mod density;
pub mod env_config;
pub mod error;
pub mod shot;
pub mod simulation;

pub use constants::{DEFAULT_HORIZON, DEFAULT_SHOT_CAP, DEFAULT_TRIALS};
pub use density::{completion_pmf, first_passage_pmf, CompletionPmf, FirstPassagePmf};
pub use error::HardyError;
pub use shot::{ShotOutcome, ShotProbs};
pub use simulation::{
    simulate_batch, simulate_batch_capped, simulate_hole, simulate_many_holes, SimulationResult,
};
