//! hardy-finish-sweep: first-passage distributions to par across a sweep of
//! par values, written as plain CSV/JSON sequences for charting.
//!
//! For each par in the sweep, computes the first-passage pmf from a shared
//! starting state to the ordinary boundary (landing exactly on par) and
//! derives mean shots and reachable probability — the series an external
//! dashboard plots directly.

use std::fs;
use std::io::Write;

use hardy::constants::DEFAULT_HORIZON;
use hardy::density::{first_passage_pmf, FirstPassagePmf};
use hardy::shot::ShotProbs;

struct Args {
    pars: Vec<u32>,
    p: f64,
    q: f64,
    start: u32,
    horizon: usize,
    output_dir: String,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        pars: vec![3, 4, 5],
        p: 0.4,
        q: 0.1,
        start: 0,
        horizon: DEFAULT_HORIZON,
        output_dir: "outputs/finish".to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pars" => {
                i += 1;
                parsed.pars = args[i]
                    .split(',')
                    .map(|s| {
                        s.trim().parse::<u32>().unwrap_or_else(|_| {
                            eprintln!("Invalid --pars entry: {}", s);
                            std::process::exit(1);
                        })
                    })
                    .collect();
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
            "--start" => {
                i += 1;
                parsed.start = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --start value: {}", args[i]);
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
            "--output" => {
                i += 1;
                parsed.output_dir = args[i].clone();
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
    println!("Usage: finish_sweep [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --pars 3,4,5   Comma-separated par values to sweep (default 3,4,5)");
    println!("  --p X          Good-shot probability (default 0.4)");
    println!("  --q X          Bad-shot probability (default 0.1)");
    println!("  --start N      Shared starting state (default 0)");
    println!("  --horizon N    Step horizon (default 19)");
    println!("  --output DIR   Output directory (default outputs/finish)");
}

fn main() {
    let args = parse_args();

    let probs = ShotProbs::new(args.p, args.q).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!("=== hardy-finish-sweep ===");
    println!(
        "pars {:?}, p {:.3}, q {:.3}, start {}, horizon {}",
        args.pars, args.p, args.q, args.start, args.horizon
    );

    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {}", args.output_dir, e);
        std::process::exit(1);
    });

    let mut results: Vec<(u32, FirstPassagePmf)> = Vec::with_capacity(args.pars.len());
    for &par in &args.pars {
        // Target the ordinary boundary: landing exactly on par.
        let pmf = first_passage_pmf(par, args.start, par, probs, args.horizon)
            .unwrap_or_else(|e| {
                eprintln!("par {}: {}", par, e);
                std::process::exit(1);
            });
        results.push((par, pmf));
    }

    println!();
    println!("  par  mean shots  P(reach par)  other mass");
    for (par, pmf) in &results {
        println!(
            "  {:3}  {:10.4}  {:12.6}  {:10.6}",
            par,
            pmf.mean(),
            pmf.total_mass(),
            pmf.other_mass
        );
    }

    // Per-par JSON: the raw sequences plus derived summary values.
    for (par, pmf) in &results {
        let path = format!("{}/par{}.json", args.output_dir, par);
        let json = serde_json::json!({
            "par": par,
            "start": args.start,
            "p": args.p,
            "q": args.q,
            "horizon": args.horizon,
            "mean_shots": pmf.mean(),
            "reach_probability": pmf.total_mass(),
            "other_mass": pmf.other_mass,
            "steps": pmf.steps,
            "pmf": pmf.pmf,
        });
        fs::write(&path, serde_json::to_string_pretty(&json).unwrap())
            .unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
    }

    // Combined CSV: one row per step, one column per par.
    let csv_path = format!("{}/finish_pmf.csv", args.output_dir);
    let mut csv = fs::File::create(&csv_path).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {}", csv_path, e);
        std::process::exit(1);
    });
    let header: Vec<String> = std::iter::once("shots".to_string())
        .chain(results.iter().map(|(par, _)| format!("par{}", par)))
        .collect();
    writeln!(csv, "{}", header.join(",")).unwrap();
    for step in 0..=args.horizon {
        let mut row = vec![step.to_string()];
        for (_, pmf) in &results {
            row.push(format!("{:.10}", pmf.pmf[step]));
        }
        writeln!(csv, "{}", row.join(",")).unwrap();
    }

    println!();
    println!(
        "Wrote {} and {} per-par JSON files to {}",
        csv_path,
        results.len(),
        args.output_dir
    );
}
