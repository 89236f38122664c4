// Monte Carlo Infrastructure — N runs per scenario with statistical aggregation
// Each scenario runs N times with seeds base..base+N, computing mean ± 95% CI

use montecarlo_engine::{parser, stats, Distribution, SimulationEngine, SimulationResult};

use crate::report::*;
use crate::scenarios::Scenario;

use std::time::Instant;

/// Run a single scenario iteration with a specific seed.
pub fn run_single(scenario: &Scenario, seed: u64) -> BenchResult {
    let observations = parser::parse(scenario.input);
    let config = scenario.config.clone().with_seed(seed);

    let start = Instant::now();
    let outcome = SimulationEngine::new().run(&observations, &config);
    let elapsed = start.elapsed();

    let mut bench = BenchResult {
        scenario: scenario.label.to_string(),
        name: scenario.name.to_string(),
        category: scenario.category.to_string(),
        seed,
        pass: false,
        error: None,
        observation_count: observations.len(),
        sample_count: 0,
        mean: 0.0,
        std_dev: 0.0,
        p5: 0.0,
        p50: 0.0,
        p95: 0.0,
        mean_error_sd: 0.0,
        floor_violations: 0,
        histogram_total_ok: false,
        paired_lengths_ok: false,
        percentile_order_ok: false,
        elapsed_ms: elapsed.as_millis(),
        samples_per_sec: 0.0,
    };

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(scenario = scenario.name, seed, error = %e, "run failed");
            bench.error = Some(e.to_string());
            return bench;
        }
    };

    let n = result.raw_samples.len();
    bench.sample_count = n;
    bench.mean = result.aggregate_stats.mean;
    bench.std_dev = result.aggregate_stats.std_dev;
    bench.p5 = result.percentiles.p5;
    bench.p50 = result.percentiles.p50;
    bench.p95 = result.percentiles.p95;
    bench.mean_error_sd = mean_error_sd(&observations, &result);
    bench.floor_violations = floor_violations(&result);
    bench.histogram_total_ok =
        result.histogram.iter().map(|b| b.count).sum::<u64>() == n as u64;
    bench.paired_lengths_ok = result
        .sample_datasets
        .iter()
        .all(|d| d.data.len() == observations.len());
    let p = result.percentiles;
    bench.percentile_order_ok = p.p5 <= p.p25 && p.p25 <= p.p50 && p.p50 <= p.p75 && p.p75 <= p.p95;
    bench.samples_per_sec = n as f64 / elapsed.as_secs_f64().max(1e-6);

    // Evaluate pass/fail
    let criteria = &scenario.criteria;
    let mut pass = true;
    if let Some(max_err) = criteria.max_mean_error_sd {
        if bench.mean_error_sd > max_err {
            pass = false;
        }
    }
    if criteria.require_floor && bench.floor_violations > 0 {
        pass = false;
    }
    if criteria.require_histogram_total && !bench.histogram_total_ok {
        pass = false;
    }
    if criteria.require_paired_lengths && !bench.paired_lengths_ok {
        pass = false;
    }
    if criteria.require_percentile_order && !bench.percentile_order_ok {
        pass = false;
    }
    bench.pass = pass;
    bench
}

/// Distance of the aggregate mean from the fitted model's mean, in input std-devs.
fn mean_error_sd(observations: &[f64], result: &SimulationResult) -> f64 {
    let Some(input) = stats::summarize(observations) else {
        return 0.0;
    };
    if input.std_dev == 0.0 {
        return 0.0;
    }
    let model_mean = match result.config.distribution {
        Distribution::Normal => input.mean,
        Distribution::Uniform => (input.min + input.max) / 2.0,
    };
    (result.aggregate_stats.mean - model_mean).abs() / input.std_dev
}

fn floor_violations(result: &SimulationResult) -> usize {
    if !result.config.floor_enabled {
        return 0;
    }
    let floor = result.config.floor_value;
    result
        .raw_samples
        .iter()
        .chain(result.sample_datasets.iter().flat_map(|d| d.data.iter()))
        .filter(|&&v| v < floor)
        .count()
}

/// Run Monte Carlo: N runs of a scenario, aggregate stats.
pub fn run_monte_carlo(scenario: &Scenario, n_runs: usize, base_seed: u64) -> MonteCarloReport {
    let mut results = Vec::with_capacity(n_runs);
    for i in 0..n_runs {
        let seed = base_seed + i as u64;
        results.push(run_single(scenario, seed));
    }

    aggregate(scenario, results)
}

/// Aggregate individual runs into a MonteCarloReport.
fn aggregate(scenario: &Scenario, results: Vec<BenchResult>) -> MonteCarloReport {
    let n = results.len();
    let passed = results.iter().filter(|r| r.pass).count();
    let pass_rate = if n > 0 { passed as f64 / n as f64 } else { 0.0 };

    let metric = |f: fn(&BenchResult) -> f64| {
        Stats::from_samples(&results.iter().map(f).collect::<Vec<_>>())
    };

    MonteCarloReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        n_runs: n,
        pass_rate,
        mean: metric(|r| r.mean),
        std_dev: metric(|r| r.std_dev),
        p5: metric(|r| r.p5),
        p50: metric(|r| r.p50),
        p95: metric(|r| r.p95),
        mean_error_sd: metric(|r| r.mean_error_sd),
        floor_violations: results.iter().map(|r| r.floor_violations).sum(),
        elapsed_ms: metric(|r| r.elapsed_ms as f64),
        samples_per_sec: metric(|r| r.samples_per_sec),
        individual_runs: results,
    }
}
