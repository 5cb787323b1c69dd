//! Hole simulation — single trials and parallel Monte Carlo batches.
//!
//! One trial samples shots until the accumulated value reaches par, counting
//! shots as it goes. Batches fan out across rayon workers with each trial on
//! its own `SmallRng` derived from the top-level seed, so a batch is
//! reproducible from one seed and trials never share stream position.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::constants::DEFAULT_SHOT_CAP;
use crate::error::HardyError;
use crate::shot::ShotProbs;

/// Results of a batch simulation.
#[derive(Debug)]
pub struct SimulationResult {
    /// Empirical frequency of each observed shot count, keyed by shot count.
    pub frequencies: BTreeMap<u32, f64>,
    pub num_trials: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub elapsed: Duration,
}

/// Simulate one hole to absorption: sample shots until the accumulated value
/// reaches `par`, returning the number of shots taken.
///
/// Advances the caller's stream by exactly one draw per shot. Fails with
/// [`HardyError::BoundExceeded`] if the shot counter passes `max_shots`; the
/// error is a guard against runaway parameter combinations, not a retry
/// signal — callers must not catch it and resume from the same stream
/// position.
pub fn simulate_hole(
    par: u32,
    probs: ShotProbs,
    rng: &mut SmallRng,
    max_shots: u32,
) -> Result<u32, HardyError> {
    if par < 1 {
        return Err(HardyError::InvalidParameter(format!(
            "par must be at least 1 (got {par})"
        )));
    }

    let mut total = 0u32;
    let mut shots = 0u32;

    while total < par {
        total += probs.sample(rng).value();
        shots += 1;
        if shots > max_shots {
            return Err(HardyError::BoundExceeded { cap: max_shots });
        }
    }

    Ok(shots)
}

/// Simulate `num_trials` independent holes and reduce them to an empirical
/// frequency table: shot count → occurrences / num_trials.
///
/// Uses the default shot cap. A statistical estimator only — the estimate
/// error shrinks as the trial count grows.
pub fn simulate_many_holes(
    par: u32,
    probs: ShotProbs,
    num_trials: usize,
    seed: u64,
) -> Result<BTreeMap<u32, f64>, HardyError> {
    Ok(simulate_batch_capped(par, probs, num_trials, seed, DEFAULT_SHOT_CAP)?.frequencies)
}

/// Simulate `num_trials` holes in parallel with the default shot cap,
/// returning the frequency table plus aggregate statistics.
pub fn simulate_batch(
    par: u32,
    probs: ShotProbs,
    num_trials: usize,
    seed: u64,
) -> Result<SimulationResult, HardyError> {
    simulate_batch_capped(par, probs, num_trials, seed, DEFAULT_SHOT_CAP)
}

/// Like [`simulate_batch`] with an explicit shot cap.
///
/// Trial `i` runs on `SmallRng::seed_from_u64(seed.wrapping_add(i))`, so the
/// result is a function of (par, p, q, num_trials, seed, cap) alone no
/// matter how rayon schedules the trials.
pub fn simulate_batch_capped(
    par: u32,
    probs: ShotProbs,
    num_trials: usize,
    seed: u64,
    max_shots: u32,
) -> Result<SimulationResult, HardyError> {
    if num_trials == 0 {
        return Err(HardyError::InvalidParameter(
            "num_trials must be at least 1".to_string(),
        ));
    }

    let start = Instant::now();

    let shots: Vec<u32> = (0..num_trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_hole(par, probs, &mut rng, max_shots)
        })
        .collect::<Result<Vec<u32>, HardyError>>()?;

    let elapsed = start.elapsed();

    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for &s in &shots {
        *counts.entry(s).or_insert(0) += 1;
    }
    let frequencies = counts
        .iter()
        .map(|(&s, &c)| (s, c as f64 / num_trials as f64))
        .collect();

    let sum: f64 = shots.iter().map(|&s| s as f64).sum();
    let mean = sum / num_trials as f64;
    let variance: f64 = shots
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / num_trials as f64;
    let std_dev = variance.sqrt();
    let min = *shots.iter().min().unwrap_or(&0);
    let max = *shots.iter().max().unwrap_or(&0);

    Ok(SimulationResult {
        frequencies,
        num_trials,
        mean,
        std_dev,
        min,
        max,
        elapsed,
    })
}
