// Monte Carlo Engine Benchmark Runner
// N seeded runs per scenario, invariant checks, throughput, JSON report
//
// Usage:
//   cargo run --release --bin bench                     # Run all scenarios (30 runs each)
//   cargo run --release --bin bench -- --runs 5         # Quick mode (5 runs each)
//   cargo run --release --bin bench -- FLOOR            # Filter by name/label/category
//   cargo run --release --bin bench -- --seed 42        # Custom base seed
//   RUST_LOG=montecarlo_engine=debug cargo run --bin bench   # Engine tracing

mod report;
mod scenarios;
mod monte_carlo;

use report::*;
use scenarios::*;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    runs: usize,
    seed: u64,
    filter: Option<String>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        runs: 30,
        seed: 0,
        filter: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                if i < args.len() {
                    cli.runs = args[i].parse().unwrap_or(30);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(0);
                }
            }
            arg if !arg.starts_with('-') => {
                cli.filter = Some(arg.to_string());
            }
            _ => {
                tracing::warn!(arg = %args[i], "unknown argument");
            }
        }
        i += 1;
    }

    cli
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_report(report: &BenchReport) -> std::io::Result<PathBuf> {
    let dir = Path::new("benchmark-results");
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("bench-{}.json", report.timestamp));
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(&path, json)?;
    Ok(path)
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    init_tracing();
    let cli = parse_args();
    let all_scenarios = scenarios();

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        tracing::error!(filter = ?cli.filter, "no scenarios match filter");
        std::process::exit(1);
    }

    println!("\n  Monte Carlo Engine Benchmark Runner");
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<32} {:>5} {:>16} {:>10} {:>10} {:>12} {:>8}",
        "Scenario", "Pass%", "Mean", "MeanErr/sd", "P95", "Samples/s", "Time");
    println!("  {}", "-".repeat(100));

    let suite_start = Instant::now();
    let mut mc_reports = Vec::new();

    for scenario in &to_run {
        let report = monte_carlo::run_monte_carlo(scenario, cli.runs, cli.seed);

        let pass_pct = report.pass_rate * 100.0;
        let status = if report.pass_rate >= 1.0 { "PASS" } else { "FAIL" };

        println!("  {:<32} {:>4}% {:>9.4}±{:<6.4} {:>10.4} {:>10.4} {:>12.2e} {:>6.0}ms  {}",
            report.label,
            pass_pct as u32,
            report.mean.mean, report.mean.half_width(),
            report.mean_error_sd.mean,
            report.p95.mean,
            report.samples_per_sec.mean,
            report.elapsed_ms.mean,
            status,
        );

        mc_reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Invariant Validation ───────────────────────────────────────────

    let runs = || mc_reports.iter().flat_map(|r| r.individual_runs.iter());
    let validation = InvariantValidation {
        floor_holds: runs().all(|r| r.floor_violations == 0),
        histogram_totals_exact: runs().all(|r| r.error.is_some() || r.histogram_total_ok),
        paired_lengths_exact: runs().all(|r| r.error.is_some() || r.paired_lengths_ok),
        percentiles_ordered: runs().all(|r| r.error.is_some() || r.percentile_order_ok),
        max_mean_error_sd: runs().map(|r| r.mean_error_sd).fold(0.0_f64, f64::max),
    };

    // ─── Summary ────────────────────────────────────────────────────────

    let total = mc_reports.len();
    let passed = mc_reports.iter().filter(|r| r.pass_rate >= 1.0).count();
    let failed = total - passed;

    let verdict = |ok: bool| if ok { "PASS" } else { "FAIL" };
    println!("  {}", "-".repeat(100));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_elapsed.as_secs_f64());

    println!("  Invariant Validation:");
    println!("    Floor holds:          {}", verdict(validation.floor_holds));
    println!("    Histogram totals:     {}", verdict(validation.histogram_totals_exact));
    println!("    Paired lengths:       {}", verdict(validation.paired_lengths_exact));
    println!("    Percentile order:     {}", verdict(validation.percentiles_ordered));
    println!("    Max mean error (sd):  {:.4}\n", validation.max_mean_error_sd);

    let all_invariants = validation.all_pass();

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let report = BenchReport {
        timestamp: ts.to_string(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        invariant_validation: validation,
        scenarios: mc_reports,
    };

    match write_report(&report) {
        Ok(path) => println!("  Results saved to: {}\n", path.display()),
        Err(e) => {
            tracing::error!(error = %e, "failed to write benchmark report");
            std::process::exit(1);
        }
    }

    if failed > 0 || !all_invariants {
        std::process::exit(1);
    }
}
