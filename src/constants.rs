//! Model constants and defaults.
//!
//! The shot alphabet is fixed at {0, 1, 2}: a good shot advances the
//! accumulated value by 2, an ordinary shot by 1, a bad shot not at all.
//! The ordinary/exceptional boundary split in the first-passage solver
//! depends on this — only a state at exactly par−1 receiving a +2 can
//! overshoot, so overshoot past par+1 is impossible in a single shot.

/// Value added by a good shot.
pub const GOOD_VALUE: u32 = 2;

/// Value added by an ordinary shot.
pub const ORDINARY_VALUE: u32 = 1;

/// Value added by a bad shot.
pub const BAD_VALUE: u32 = 0;

/// Default safety cap on shots per simulated hole.
///
/// Absorption is almost-sure for any valid p + q < 1, but the cap bounds
/// worst-case runtime and surfaces misconfiguration.
pub const DEFAULT_SHOT_CAP: u32 = 19;

/// Default step horizon for the truncated exact solvers.
pub const DEFAULT_HORIZON: usize = 19;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 100_000;
