// Scenario Definitions — representative observation sets × run configurations
// Each scenario is parsed through the engine's own parser, then run per seed

use montecarlo_engine::{Distribution, SimulationConfig};

// ─── Scenario Configuration ─────────────────────────────────────────────────

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    /// Raw CSV-like text, exactly as a user would paste it
    pub input: &'static str,
    pub config: SimulationConfig,
    pub criteria: PassCriteria,
}

pub struct PassCriteria {
    /// Max |aggregate mean − model mean| in units of the input std-dev
    pub max_mean_error_sd: Option<f64>,
    pub require_floor: bool,
    pub require_histogram_total: bool,
    pub require_paired_lengths: bool,
    pub require_percentile_order: bool,
}

impl Default for PassCriteria {
    fn default() -> Self {
        Self {
            max_mean_error_sd: Some(0.1),
            require_floor: true,
            require_histogram_total: true,
            require_paired_lengths: true,
            require_percentile_order: true,
        }
    }
}

fn config(distribution: Distribution, sample_count: usize) -> SimulationConfig {
    SimulationConfig {
        sample_count,
        distribution,
        floor_enabled: false,
        ..Default::default()
    }
}

fn floored(distribution: Distribution, sample_count: usize, floor: f64) -> SimulationConfig {
    SimulationConfig {
        floor_enabled: true,
        floor_value: floor,
        ..config(distribution, sample_count)
    }
}

const ONE_TO_FIVE: &str = "1, 2, 3, 4, 5";
const LAB_READINGS: &str = "1.5, 2.3, 1.8, 2.1\n2.4\n1.9\n2.2, 2.0, 1.7, 2.6";
const SKEWED: &str = "0.2,0.4,0.5,0.7,0.9,1.1,1.6,2.8,4.9,12.5";
const NOISY_EXPORT: &str = "reading\n10.2\nn/a\n11.8\n\n9.7, ,13.1\nerr,12.4\n";
const CONSTANT: &str = "4,4,4,4,4,4";

pub fn scenarios() -> Vec<Scenario> {
    vec![
        // ─── Baseline (4) ───────────────────────────────────────────────
        Scenario { name: "NORMAL_BASELINE", label: "Normal 1..5 (10K)", category: "baseline",
            input: ONE_TO_FIVE, config: config(Distribution::Normal, 10_000),
            criteria: PassCriteria::default() },
        Scenario { name: "UNIFORM_BASELINE", label: "Uniform 1..5 (10K)", category: "baseline",
            input: ONE_TO_FIVE, config: config(Distribution::Uniform, 10_000),
            criteria: PassCriteria::default() },
        Scenario { name: "LAB_NORMAL", label: "Lab readings, Normal", category: "baseline",
            input: LAB_READINGS, config: config(Distribution::Normal, 10_000),
            criteria: PassCriteria::default() },
        Scenario { name: "NOISY_INPUT", label: "Malformed tokens dropped", category: "baseline",
            input: NOISY_EXPORT, config: config(Distribution::Uniform, 10_000),
            criteria: PassCriteria::default() },

        // ─── Floor Constraint (3) ───────────────────────────────────────
        Scenario { name: "FLOOR_AT_MEAN", label: "Floor at input mean", category: "floor",
            input: ONE_TO_FIVE, config: floored(Distribution::Normal, 10_000, 3.0),
            // Clamping shifts the mean right by design
            criteria: PassCriteria { max_mean_error_sd: None, ..Default::default() } },
        Scenario { name: "FLOOR_ZERO_SKEWED", label: "Skewed data, floor 0", category: "floor",
            input: SKEWED, config: floored(Distribution::Normal, 10_000, 0.0),
            criteria: PassCriteria { max_mean_error_sd: None, ..Default::default() } },
        Scenario { name: "FLOOR_UNIFORM", label: "Uniform, floor inside range", category: "floor",
            input: SKEWED, config: floored(Distribution::Uniform, 10_000, 2.0),
            criteria: PassCriteria { max_mean_error_sd: None, ..Default::default() } },

        // ─── Degenerate (2) ─────────────────────────────────────────────
        Scenario { name: "CONSTANT_INPUT", label: "Constant observations", category: "degenerate",
            input: CONSTANT, config: config(Distribution::Normal, 1_000),
            criteria: PassCriteria::default() },
        Scenario { name: "CLAMPED_COUNT", label: "Sample count below minimum", category: "degenerate",
            input: ONE_TO_FIVE, config: config(Distribution::Uniform, 10),
            criteria: PassCriteria { max_mean_error_sd: Some(0.5), ..Default::default() } },

        // ─── Scale (2) ──────────────────────────────────────────────────
        Scenario { name: "SCALE_100K", label: "Normal, 100K draws", category: "scale",
            input: LAB_READINGS, config: config(Distribution::Normal, 100_000),
            criteria: PassCriteria { max_mean_error_sd: Some(0.03), ..Default::default() } },
        Scenario { name: "SCALE_1M", label: "Uniform, 1M draws", category: "scale",
            input: SKEWED, config: config(Distribution::Uniform, 1_000_000),
            criteria: PassCriteria { max_mean_error_sd: Some(0.01), ..Default::default() } },
    ]
}
