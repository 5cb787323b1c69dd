//! Forward density evolution — exact truncated shot-count distributions.
//!
//! Both solvers push a transient-state probability vector forward one shot at
//! a time. The state is the accumulated value s ∈ [0, par); each shot splits
//! the mass at s three ways: p to s+2, 1−p−q to s+1, and q back to s (a bad
//! shot leaves the accumulated value unchanged). Mass that crosses the
//! boundary is absorbed into the pmf entry for that shot and never evolves
//! again.
//!
//! [`completion_pmf`] treats any value ≥ par as one absorbing class.
//! [`first_passage_pmf`] distinguishes landing exactly on par (ordinary) from
//! overshooting to par+1 (exceptional) — with increments {0,1,2} no deeper
//! overshoot is reachable in one shot — and counts only the caller's target
//! boundary, discarding mass absorbed at the other.
//!
//! Both are truncated at a finite horizon: the pmf's missing mass is the
//! probability of absorption past the horizon. The solvers never fail due to
//! truncation; the caller reads the total mass and raises the horizon to
//! tighten the estimate.

use serde::Serialize;

use crate::error::HardyError;
use crate::shot::ShotProbs;

/// Absorption bookkeeping for the shared forward kernel.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Any value ≥ par: both boundaries merged into one absorbing class.
    Either,
    /// Landing exactly on par.
    Ordinary,
    /// Overshooting to par + 1.
    Exceptional,
}

/// Truncated PMF of shots needed to reach or exceed par.
///
/// `pmf[k]` is P(exactly `shots[k]` shots); the running sum is non-decreasing
/// and ≤ 1, with the deficit equal to the probability that absorption takes
/// more than the horizon.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionPmf {
    /// Shot counts 1..=n_max.
    pub shots: Vec<u32>,
    /// Probability of finishing in exactly that many shots.
    pub pmf: Vec<f64>,
}

impl CompletionPmf {
    /// Σ n·pmf[n] over the horizon. Under-counts the true mean by the
    /// truncated tail's contribution.
    pub fn mean(&self) -> f64 {
        self.shots
            .iter()
            .zip(&self.pmf)
            .map(|(&n, &p)| n as f64 * p)
            .sum()
    }

    /// Second central moment of the truncated distribution.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.shots
            .iter()
            .zip(&self.pmf)
            .map(|(&n, &p)| (n as f64 - mean).powi(2) * p)
            .sum()
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Captured probability mass, ≤ 1.
    pub fn total_mass(&self) -> f64 {
        self.pmf.iter().sum()
    }

    /// Probability that absorption takes more than the horizon.
    pub fn truncation_tail(&self) -> f64 {
        1.0 - self.total_mass()
    }
}

/// Truncated first-passage PMF to one of the two absorbing boundaries.
///
/// Sub-stochastic even in the untruncated limit: mass absorbed at the
/// non-target boundary is dropped from the pmf, not renormalized away.
#[derive(Debug, Clone, Serialize)]
pub struct FirstPassagePmf {
    /// Step counts 0..=n_max. Step 0 is nonzero only when start == target.
    pub steps: Vec<u32>,
    /// Probability of first reaching the target at exactly that step.
    pub pmf: Vec<f64>,
    /// Mass observed absorbing at the non-target boundary within the horizon.
    pub other_mass: f64,
}

impl FirstPassagePmf {
    /// Σ n·pmf[n]: mean steps to the target, weighted by the reachable mass
    /// only (not a conditional mean).
    pub fn mean(&self) -> f64 {
        self.steps
            .iter()
            .zip(&self.pmf)
            .map(|(&n, &p)| n as f64 * p)
            .sum()
    }

    /// Probability of reaching the target within the horizon.
    pub fn total_mass(&self) -> f64 {
        self.pmf.iter().sum()
    }
}

/// Forward kernel shared by both solvers.
///
/// Evolves mass from transient state `start` for `n_max` shots. Returns
/// (pmf, other_mass): `pmf[n]` is the mass absorbed into the target class on
/// shot n (index 0 is never touched here — degenerate starts are handled by
/// the callers), `other_mass` is the mass absorbed at the non-target boundary.
fn evolve(
    par: u32,
    start: u32,
    probs: ShotProbs,
    n_max: usize,
    target: Target,
) -> (Vec<f64>, f64) {
    let par = par as usize;
    let p_good = probs.good();
    let p_bad = probs.bad();
    let p_ord = probs.ordinary();

    let mut pmf = vec![0.0f64; n_max + 1];
    let mut other_mass = 0.0f64;

    let mut state = vec![0.0f64; par];
    state[start as usize] = 1.0;

    for shot in 1..=n_max {
        let mut next = vec![0.0f64; par];

        for s in 0..par {
            let mass = state[s];
            if mass == 0.0 {
                continue;
            }

            for (new_val, prob) in [(s + 2, p_good), (s + 1, p_ord)] {
                if new_val > par {
                    // Exceptional boundary: only reachable from par−1 via +2.
                    match target {
                        Target::Either | Target::Exceptional => pmf[shot] += mass * prob,
                        Target::Ordinary => other_mass += mass * prob,
                    }
                } else if new_val == par {
                    match target {
                        Target::Either | Target::Ordinary => pmf[shot] += mass * prob,
                        Target::Exceptional => other_mass += mass * prob,
                    }
                } else {
                    next[new_val] += mass * prob;
                }
            }

            // Bad shot: self-loop.
            next[s] += mass * p_bad;
        }

        state = next;
    }

    (pmf, other_mass)
}

/// Exact truncated distribution of shots needed to reach or exceed par,
/// starting from an accumulated value of 0.
pub fn completion_pmf(
    par: u32,
    probs: ShotProbs,
    n_max: usize,
) -> Result<CompletionPmf, HardyError> {
    if par < 1 {
        return Err(HardyError::InvalidParameter(format!(
            "par must be at least 1 (got {par})"
        )));
    }

    let (pmf, _) = evolve(par, 0, probs, n_max, Target::Either);

    Ok(CompletionPmf {
        shots: (1..=n_max).map(|n| n as u32).collect(),
        pmf: pmf[1..].to_vec(),
    })
}

/// Exact truncated first-passage distribution from `start` to `target`,
/// where `target` must be one of the two absorbing states: par (landing
/// exactly on par) or par + 1 (overshooting).
///
/// Degenerate cases, resolved before any state vector is built:
/// - `start == target`: pmf[0] = 1, everything else 0.
/// - `start` equal to the other boundary: identically zero pmf (the process
///   is already absorbed where the target can never be reached), with
///   `other_mass` = 1.
pub fn first_passage_pmf(
    par: u32,
    start: u32,
    target: u32,
    probs: ShotProbs,
    n_max: usize,
) -> Result<FirstPassagePmf, HardyError> {
    if par < 1 {
        return Err(HardyError::InvalidParameter(format!(
            "par must be at least 1 (got {par})"
        )));
    }

    let ordinary = par;
    let exceptional = par + 1;

    if start > exceptional {
        return Err(HardyError::InvalidParameter(format!(
            "start must be between 0 and {exceptional} (got {start})"
        )));
    }
    if target != ordinary && target != exceptional {
        return Err(HardyError::InvalidParameter(format!(
            "target must be par ({ordinary}) or par + 1 ({exceptional}) (got {target})"
        )));
    }

    let steps: Vec<u32> = (0..=n_max).map(|n| n as u32).collect();

    if start == target {
        let mut pmf = vec![0.0; n_max + 1];
        pmf[0] = 1.0;
        return Ok(FirstPassagePmf {
            steps,
            pmf,
            other_mass: 0.0,
        });
    }

    if start == ordinary || start == exceptional {
        // Already absorbed at the competing boundary.
        return Ok(FirstPassagePmf {
            steps,
            pmf: vec![0.0; n_max + 1],
            other_mass: 1.0,
        });
    }

    // Genuine transient start: 0 <= start <= par - 1.
    let mode = if target == ordinary {
        Target::Ordinary
    } else {
        Target::Exceptional
    };
    let (pmf, other_mass) = evolve(par, start, probs, n_max, mode);

    Ok(FirstPassagePmf {
        steps,
        pmf,
        other_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probs(p: f64, q: f64) -> ShotProbs {
        ShotProbs::new(p, q).unwrap()
    }

    #[test]
    fn test_par_one_is_geometric() {
        // Every non-bad shot finishes a par-1 hole, so the completion pmf is
        // geometric: pmf[n] = q^(n-1) * (1-q).
        let q = 0.3;
        let result = completion_pmf(1, probs(0.2, q), 10).unwrap();
        for (k, &p) in result.pmf.iter().enumerate() {
            let expected = q.powi(k as i32) * (1.0 - q);
            assert!((p - expected).abs() < 1e-12, "pmf[{}] = {}", k, p);
        }
    }

    #[test]
    fn test_completion_early_entries() {
        // Par 4 from 0: one shot can add at most 2, so pmf[1] = 0 and the
        // only two-shot finish is good-good.
        let p = 0.4;
        let result = completion_pmf(4, probs(p, 0.1), 10).unwrap();
        assert_eq!(result.shots[0], 1);
        assert_eq!(result.pmf[0], 0.0);
        assert!((result.pmf[1] - p * p).abs() < 1e-12);
    }

    #[test]
    fn test_completion_no_bad_shots_finite_support() {
        // With q = 0 every shot advances, so a par-4 hole finishes in 2..=4
        // shots and the pmf captures all mass by shot 4.
        let result = completion_pmf(4, probs(0.4, 0.0), 10).unwrap();
        assert_eq!(result.pmf[0], 0.0);
        assert!((result.total_mass() - 1.0).abs() < 1e-12);
        for &p in &result.pmf[4..] {
            assert_eq!(p, 0.0);
        }
    }

    #[test]
    fn test_completion_zero_horizon() {
        let result = completion_pmf(4, probs(0.4, 0.1), 0).unwrap();
        assert!(result.shots.is_empty());
        assert!(result.pmf.is_empty());
        assert_eq!(result.total_mass(), 0.0);
    }

    #[test]
    fn test_first_passage_start_equals_target() {
        for target in [4, 5] {
            let result = first_passage_pmf(4, target, target, probs(0.4, 0.1), 8).unwrap();
            assert_eq!(result.pmf[0], 1.0);
            assert!(result.pmf[1..].iter().all(|&p| p == 0.0));
            assert_eq!(result.other_mass, 0.0);
        }
    }

    #[test]
    fn test_first_passage_start_at_other_boundary() {
        // Starting at the competing absorbing state: the target is
        // unreachable at every horizon.
        let result = first_passage_pmf(4, 5, 4, probs(0.4, 0.1), 8).unwrap();
        assert!(result.pmf.iter().all(|&p| p == 0.0));
        assert_eq!(result.other_mass, 1.0);

        let result = first_passage_pmf(4, 4, 5, probs(0.4, 0.1), 8).unwrap();
        assert!(result.pmf.iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_first_passage_par_one_ordinary() {
        // Par 1, start 0, target the ordinary boundary, p = 0: every
        // ordinary shot lands exactly on par, bad shots recurse, and no
        // shot can overshoot. pmf[n] = q^(n-1) * (1-q), summing toward 1.
        let q = 0.3;
        let result = first_passage_pmf(1, 0, 1, probs(0.0, q), 40).unwrap();
        assert_eq!(result.pmf[0], 0.0);
        for n in 1..=10 {
            let expected = q.powi(n as i32 - 1) * (1.0 - q);
            assert!((result.pmf[n] - expected).abs() < 1e-12);
        }
        assert!(result.total_mass() > 0.999_999);
        assert!(result.total_mass() <= 1.0 + 1e-12);
        assert_eq!(result.other_mass, 0.0);
    }

    #[test]
    fn test_first_passage_drops_overshoot_mass() {
        // Par 1, start 0, target ordinary: a good shot overshoots to 2 and
        // its mass must be discarded, so pmf[1] is the ordinary probability
        // alone and other_mass picks up the good-shot mass.
        let p = 0.4;
        let q = 0.1;
        let result = first_passage_pmf(1, 0, 1, probs(p, q), 30).unwrap();
        assert!((result.pmf[1] - (1.0 - p - q)).abs() < 1e-12);
        // Absorbed-anywhere mass splits between the target pmf and other_mass.
        let absorbed = result.total_mass() + result.other_mass;
        assert!(absorbed <= 1.0 + 1e-12);
        assert!(result.other_mass > 0.0);
    }

    #[test]
    fn test_boundary_split_partitions_completion() {
        // The two first-passage pmfs partition the completion pmf shot by
        // shot, and each solver's other_mass equals its sibling's captured
        // mass.
        let pr = probs(0.35, 0.2);
        let n_max = 12;
        let completion = completion_pmf(5, pr, n_max).unwrap();
        let ord = first_passage_pmf(5, 0, 5, pr, n_max).unwrap();
        let exc = first_passage_pmf(5, 0, 6, pr, n_max).unwrap();

        for n in 1..=n_max {
            let merged = ord.pmf[n] + exc.pmf[n];
            assert!(
                (completion.pmf[n - 1] - merged).abs() < 1e-12,
                "shot {}: completion {} vs merged {}",
                n,
                completion.pmf[n - 1],
                merged
            );
        }
        assert!((ord.other_mass - exc.total_mass()).abs() < 1e-12);
        assert!((exc.other_mass - ord.total_mass()).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let pr = probs(0.4, 0.1);
        assert!(matches!(
            completion_pmf(0, pr, 10),
            Err(HardyError::InvalidParameter(_))
        ));
        assert!(matches!(
            first_passage_pmf(0, 0, 1, pr, 10),
            Err(HardyError::InvalidParameter(_))
        ));
        // Start outside [0, par+1].
        assert!(matches!(
            first_passage_pmf(4, 9, 4, pr, 10),
            Err(HardyError::InvalidParameter(_))
        ));
        // Target below par and target past par+1.
        assert!(matches!(
            first_passage_pmf(4, 0, 3, pr, 10),
            Err(HardyError::InvalidParameter(_))
        ));
        assert!(matches!(
            first_passage_pmf(4, 0, 6, pr, 10),
            Err(HardyError::InvalidParameter(_))
        ));
    }
}
