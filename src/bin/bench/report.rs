// Benchmark Report Types
// Structured output for independent statistical validation of the engine

use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    /// Sample statistics with a 95% normal-approximation CI on the mean.
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }

    pub fn half_width(&self) -> f64 {
        (self.ci_upper - self.ci_lower) / 2.0
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub scenario: String,
    pub name: String,
    pub category: String,
    pub seed: u64,
    pub pass: bool,
    pub error: Option<String>,
    pub observation_count: usize,
    pub sample_count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
    /// |aggregate mean − model mean| / input std-dev (0 when the input is constant)
    pub mean_error_sd: f64,
    pub floor_violations: usize,
    pub histogram_total_ok: bool,
    pub paired_lengths_ok: bool,
    pub percentile_order_ok: bool,
    pub elapsed_ms: u128,
    pub samples_per_sec: f64,
}

// ─── Monte Carlo Report (per-scenario aggregation) ──────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloReport {
    pub scenario_name: String,
    pub label: String,
    pub category: String,
    pub n_runs: usize,
    pub pass_rate: f64,
    pub mean: Stats,
    pub std_dev: Stats,
    pub p5: Stats,
    pub p50: Stats,
    pub p95: Stats,
    pub mean_error_sd: Stats,
    pub floor_violations: usize,
    pub elapsed_ms: Stats,
    pub samples_per_sec: Stats,
    pub individual_runs: Vec<BenchResult>,
}

// ─── Invariant Validation Summary ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct InvariantValidation {
    pub floor_holds: bool,
    pub histogram_totals_exact: bool,
    pub paired_lengths_exact: bool,
    pub percentiles_ordered: bool,
    pub max_mean_error_sd: f64,
}

impl InvariantValidation {
    pub fn all_pass(&self) -> bool {
        self.floor_holds
            && self.histogram_totals_exact
            && self.paired_lengths_exact
            && self.percentiles_ordered
    }
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub n_runs_per_scenario: usize,
    pub summary: Summary,
    pub invariant_validation: InvariantValidation,
    pub scenarios: Vec<MonteCarloReport>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f64,
}
