//! Monte Carlo tests: determinism from a single top-level seed, and
//! convergence of the empirical distribution to the exact solver's.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use hardy::density::completion_pmf;
use hardy::error::HardyError;
use hardy::shot::ShotProbs;
use hardy::simulation::{simulate_batch, simulate_hole, simulate_many_holes};

#[test]
fn test_same_seed_same_frequencies() {
    let probs = ShotProbs::new(0.4, 0.1).unwrap();
    let f1 = simulate_many_holes(4, probs, 20_000, 42).unwrap();
    let f2 = simulate_many_holes(4, probs, 20_000, 42).unwrap();
    assert_eq!(f1, f2, "Same seed must reproduce the exact frequency table");
}

#[test]
fn test_different_seeds_different_frequencies() {
    // Trial i draws from seed + i, so two base seeds closer than the trial
    // count share most of their substreams; pick well-separated seeds.
    let probs = ShotProbs::new(0.4, 0.1).unwrap();
    let f1 = simulate_many_holes(4, probs, 20_000, 42).unwrap();
    let f2 = simulate_many_holes(4, probs, 20_000, 1_000_000_007).unwrap();
    assert_ne!(f1, f2);
}

#[test]
fn test_single_hole_stream_determinism() {
    let probs = ShotProbs::new(0.3, 0.2).unwrap();
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        assert_eq!(
            simulate_hole(4, probs, &mut rng1, 50).unwrap(),
            simulate_hole(4, probs, &mut rng2, 50).unwrap()
        );
    }
}

#[test]
fn test_empirical_mean_converges_to_exact() {
    let probs = ShotProbs::new(0.4, 0.1).unwrap();
    let result = simulate_batch(4, probs, 200_000, 42).unwrap();
    // Horizon 40 leaves a tail below 1e-9 for these parameters.
    let exact = completion_pmf(4, probs, 40).unwrap();

    let diff = (result.mean - exact.mean()).abs();
    assert!(
        diff < 0.02,
        "empirical mean {:.4} vs exact {:.4} (diff {:.4})",
        result.mean,
        exact.mean(),
        diff
    );
}

#[test]
fn test_empirical_frequencies_converge_to_pmf() {
    let probs = ShotProbs::new(0.4, 0.1).unwrap();
    let freqs = simulate_many_holes(4, probs, 200_000, 42).unwrap();
    let exact = completion_pmf(4, probs, 19).unwrap();

    for step in 2..=8u32 {
        let empirical = freqs.get(&step).copied().unwrap_or(0.0);
        let expected = exact.pmf[(step - 1) as usize];
        assert!(
            (empirical - expected).abs() < 0.01,
            "shots {}: empirical {:.5} vs exact {:.5}",
            step,
            empirical,
            expected
        );
    }
}

#[test]
fn test_frequencies_are_a_distribution() {
    let probs = ShotProbs::new(0.4, 0.1).unwrap();
    let freqs = simulate_many_holes(4, probs, 50_000, 42).unwrap();

    let total: f64 = freqs.values().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(freqs.values().all(|&f| f > 0.0));
    // A par-4 hole cannot finish in fewer than 2 shots.
    assert!(freqs.keys().all(|&s| s >= 2));
}

#[test]
fn test_bound_exceeded_surfaces_from_batch() {
    // All-ordinary shots: a par-25 hole always needs 25 shots, past the
    // default cap of 19.
    let probs = ShotProbs::new(0.0, 0.0).unwrap();
    assert_eq!(
        simulate_many_holes(25, probs, 100, 42).unwrap_err(),
        HardyError::BoundExceeded { cap: 19 }
    );
}
