//! hardy-simulate: Monte Carlo shot counts for one hole, cross-checked
//! against the exact completion solver.

use hardy::constants::{DEFAULT_HORIZON, DEFAULT_SHOT_CAP, DEFAULT_TRIALS};
use hardy::density::completion_pmf;
use hardy::env_config::init_rayon_threads;
use hardy::shot::ShotProbs;
use hardy::simulation::simulate_batch_capped;

struct Args {
    par: u32,
    p: f64,
    q: f64,
    trials: usize,
    seed: u64,
    cap: u32,
    horizon: usize,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        par: 4,
        p: 0.4,
        q: 0.1,
        trials: DEFAULT_TRIALS,
        seed: 42,
        cap: DEFAULT_SHOT_CAP,
        horizon: DEFAULT_HORIZON,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--par" => {
                i += 1;
                parsed.par = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --par value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--p" => {
                i += 1;
                parsed.p = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --p value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--q" => {
                i += 1;
                parsed.q = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --q value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--trials" => {
                i += 1;
                parsed.trials = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --trials value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                parsed.seed = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--cap" => {
                i += 1;
                parsed.cap = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --cap value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--horizon" => {
                i += 1;
                parsed.horizon = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --horizon value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --par N        Par of the hole (default 4)");
    println!("  --p X          Good-shot probability (default 0.4)");
    println!("  --q X          Bad-shot probability (default 0.1)");
    println!("  --trials N     Number of Monte Carlo trials (default 100000)");
    println!("  --seed N       Top-level seed (default 42)");
    println!("  --cap N        Shot safety cap per trial (default 19)");
    println!("  --horizon N    Exact-solver step horizon (default 19)");
}

fn main() {
    let args = parse_args();
    let num_threads = init_rayon_threads();

    let probs = ShotProbs::new(args.p, args.q).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!("=== hardy-simulate ===");
    println!(
        "par {}, p {:.3}, q {:.3}, ordinary {:.3}",
        args.par,
        probs.good(),
        probs.bad(),
        probs.ordinary()
    );
    println!(
        "{} trials, seed {}, cap {}, {} threads",
        args.trials, args.seed, args.cap, num_threads
    );

    let result = simulate_batch_capped(args.par, probs, args.trials, args.seed, args.cap)
        .unwrap_or_else(|e| {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        });

    println!();
    println!(" shots  frequency");
    for (&shots, &freq) in &result.frequencies {
        println!("  {:4}   {:.5}", shots, freq);
    }
    println!();
    println!(
        "mean {:.4}, std {:.4}, min {}, max {} ({:.2}s)",
        result.mean,
        result.std_dev,
        result.min,
        result.max,
        result.elapsed.as_secs_f64()
    );

    let exact = completion_pmf(args.par, probs, args.horizon).unwrap_or_else(|e| {
        eprintln!("Exact solver failed: {}", e);
        std::process::exit(1);
    });
    println!(
        "exact mean {:.4} at horizon {} (captured mass {:.6}), diff {:.4}",
        exact.mean(),
        args.horizon,
        exact.total_mass(),
        (result.mean - exact.mean()).abs()
    );
}
