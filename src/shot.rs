//! Shot outcomes and the validated probability triple.
//!
//! A shot has three outcomes: good (+2, probability p), ordinary
//! (+1, probability 1−p−q), bad (+0, probability q). [`ShotProbs`] validates
//! (p, q) once at construction; every entry point in the crate takes it by
//! value, so downstream code never re-checks.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::constants::{BAD_VALUE, GOOD_VALUE, ORDINARY_VALUE};
use crate::error::HardyError;

/// One of the three shot outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// +2 to the accumulated value, probability p.
    Good,
    /// +1 to the accumulated value, probability 1−p−q.
    Ordinary,
    /// +0 to the accumulated value, probability q.
    Bad,
}

impl ShotOutcome {
    /// Value this outcome adds to the accumulated total.
    #[inline(always)]
    pub fn value(self) -> u32 {
        match self {
            ShotOutcome::Good => GOOD_VALUE,
            ShotOutcome::Ordinary => ORDINARY_VALUE,
            ShotOutcome::Bad => BAD_VALUE,
        }
    }
}

/// Validated shot-outcome probabilities: p ≥ 0, q ≥ 0, p + q < 1.
///
/// Immutable once constructed. NaN inputs fail validation (the comparisons
/// are written so a NaN never passes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShotProbs {
    good: f64,
    bad: f64,
}

impl ShotProbs {
    /// Validate and construct. `p` is the good-shot probability, `q` the
    /// bad-shot probability; the ordinary probability is the remainder.
    pub fn new(p: f64, q: f64) -> Result<Self, HardyError> {
        if !(p >= 0.0) || !(q >= 0.0) || !(p + q < 1.0) {
            return Err(HardyError::InvalidParameter(format!(
                "need 0 <= p, 0 <= q, and p + q < 1 (got p={p}, q={q})"
            )));
        }
        Ok(Self { good: p, bad: q })
    }

    /// Good-shot probability p.
    #[inline(always)]
    pub fn good(&self) -> f64 {
        self.good
    }

    /// Bad-shot probability q.
    #[inline(always)]
    pub fn bad(&self) -> f64 {
        self.bad
    }

    /// Ordinary-shot probability 1 − p − q.
    #[inline(always)]
    pub fn ordinary(&self) -> f64 {
        1.0 - self.good - self.bad
    }

    /// Draw one outcome, advancing the stream by exactly one draw.
    ///
    /// Inverse-CDF over [good, bad, ordinary]; the ordinary outcome takes the
    /// top of the unit interval so the split is exact even when p + q has
    /// rounding slack.
    #[inline(always)]
    pub fn sample(&self, rng: &mut SmallRng) -> ShotOutcome {
        let u: f64 = rng.random();
        if u < self.good {
            ShotOutcome::Good
        } else if u < self.good + self.bad {
            ShotOutcome::Bad
        } else {
            ShotOutcome::Ordinary
        }
    }
}
