// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Type Definitions

use serde::{Deserialize, Serialize};

// ─── Distribution ────────────────────────────────────────────────────────────

/// Probability model fitted to the observation set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Normal,
    Uniform,
}

impl Distribution {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Uniform => "uniform",
        }
    }
}

// ─── Statistics Record ───────────────────────────────────────────────────────

/// Descriptive statistics of a non-empty sequence.
///
/// Variance is the population variance (divide by N).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl Statistics {
    /// Spread between the extremes (`max - min`).
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

// ─── Histogram ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub bin_center: f64,
    pub count: u64,
    /// `100 * count / total`, rounded to two decimal places.
    pub frequency_percent: f64,
}

// ─── Percentiles ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Percentiles {
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

// ─── Paired Sample Dataset ───────────────────────────────────────────────────

/// One paired resample: `data[j]` is a perturbation of observation `j`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleDataset {
    /// 1-based position in the run's dataset list.
    pub id: usize,
    pub data: Vec<f64>,
    pub stats: Statistics,
}

impl SampleDataset {
    /// Download name used by the UI shell.
    pub fn file_name(&self) -> String {
        dataset_file_name(self.id)
    }

    /// Leading values for a table preview.
    pub fn preview(&self, n: usize) -> &[f64] {
        &self.data[..n.min(self.data.len())]
    }
}

pub fn dataset_file_name(id: usize) -> String {
    format!("monte_carlo_sample_{}.csv", id)
}

// ─── Simulation Result ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Aggregate-mode draws in generation order.
    pub raw_samples: Vec<f64>,
    pub aggregate_stats: Statistics,
    pub histogram: Vec<HistogramBin>,
    pub percentiles: Percentiles,
    pub sample_datasets: Vec<SampleDataset>,
    pub observation_count: usize,
    /// The validated configuration the run actually used.
    pub config: crate::config::SimulationConfig,
}
