// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Simulation Core
//
// Two generation modes share one variate stream per run:
//   aggregate: `sample_count` independent draws from the fitted distribution
//   paired:    per-observation perturbations, position j tracks observation j
// Aggregate draws are taken first, then the paired datasets, so a seeded run
// is reproducible end to end.

use tracing::{debug, info};

use crate::config::{SimulationConfig, SAMPLE_DATASET_COUNT};
use crate::error::EngineError;
use crate::histogram;
use crate::random::{RngSource, UniformSource, VariateGenerator};
use crate::stats;
use crate::types::*;

// ─── SimulationEngine ────────────────────────────────────────────────────────

/// Stateless Monte Carlo runner; each `run` is independent of the last.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    dataset_count: usize,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self { dataset_count: SAMPLE_DATASET_COUNT }
    }
}

impl SimulationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run with a ChaCha8 stream seeded from `config.seed` (entropy if unset).
    pub fn run(
        &self,
        observations: &[f64],
        config: &SimulationConfig,
    ) -> Result<SimulationResult, EngineError> {
        self.run_with(observations, config, RngSource::for_seed(config.seed))
    }

    /// Run drawing from an explicit uniform source.
    ///
    /// # Errors
    /// - [`EngineError::NoInputData`] when `observations` is empty; nothing is drawn.
    /// - [`EngineError::InvalidConfig`] when the config fails validation.
    pub fn run_with<S: UniformSource>(
        &self,
        observations: &[f64],
        config: &SimulationConfig,
        source: S,
    ) -> Result<SimulationResult, EngineError> {
        let input = stats::summarize(observations).ok_or(EngineError::NoInputData)?;
        let config = config.validate()?;
        debug!(
            observations = input.count,
            samples = config.sample_count,
            distribution = config.distribution.label(),
            floor = config.floor_enabled,
            "starting simulation run"
        );

        let mut gen = VariateGenerator::new(source);
        let raw_samples = Self::aggregate_samples(&mut gen, &input, &config);
        let sample_datasets = self.paired_datasets(&mut gen, observations, &input, &config)?;

        // One sort feeds the summary and every percentile lookup.
        let mut sorted = raw_samples.clone();
        sorted.sort_by(f64::total_cmp);
        let aggregate_stats =
            stats::summarize_sorted(&raw_samples, &sorted).ok_or(EngineError::NoInputData)?;
        let percentiles = stats::percentiles_sorted(&sorted).ok_or(EngineError::NoInputData)?;
        let histogram = histogram::build_with_range(
            &raw_samples,
            aggregate_stats.min,
            aggregate_stats.max,
            config.bin_count,
        );

        info!(
            samples = raw_samples.len(),
            datasets = sample_datasets.len(),
            mean = aggregate_stats.mean,
            "simulation run complete"
        );

        Ok(SimulationResult {
            raw_samples,
            aggregate_stats,
            histogram,
            percentiles,
            sample_datasets,
            observation_count: observations.len(),
            config,
        })
    }

    /// Aggregate mode: `config.sample_count` independent draws, floor applied.
    ///
    /// Normal uses the input mean/std-dev; uniform spans the input min..max.
    pub fn aggregate_samples<S: UniformSource>(
        gen: &mut VariateGenerator<S>,
        input: &Statistics,
        config: &SimulationConfig,
    ) -> Vec<f64> {
        (0..config.sample_count)
            .map(|_| {
                let value = match config.distribution {
                    Distribution::Normal => gen.normal(input.mean, input.std_dev),
                    Distribution::Uniform => gen.uniform(input.min, input.max),
                };
                config.apply_floor(value)
            })
            .collect()
    }

    /// Paired mode: one perturbation per observation, for each dataset.
    ///
    /// Normal centres each draw on the observation with the global std-dev.
    /// Uniform draws from `obs ± range/4`, intersected with the input min..max.
    /// Always yields `dataset_count` datasets.
    ///
    /// # Errors
    /// [`EngineError::NoInputData`] when `observations` is empty.
    pub fn paired_datasets<S: UniformSource>(
        &self,
        gen: &mut VariateGenerator<S>,
        observations: &[f64],
        input: &Statistics,
        config: &SimulationConfig,
    ) -> Result<Vec<SampleDataset>, EngineError> {
        if observations.is_empty() {
            return Err(EngineError::NoInputData);
        }
        let quarter_range = input.range() / 4.0;

        (1..=self.dataset_count)
            .map(|id| {
                let data: Vec<f64> = observations
                    .iter()
                    .map(|&v| {
                        let value = match config.distribution {
                            Distribution::Normal => gen.normal(v, input.std_dev),
                            Distribution::Uniform => {
                                let local_min = (v - quarter_range).max(input.min);
                                let local_max = (v + quarter_range).min(input.max);
                                gen.uniform(local_min, local_max)
                            }
                        };
                        config.apply_floor(value)
                    })
                    .collect();
                let stats = stats::summarize(&data).ok_or(EngineError::NoInputData)?;
                Ok(SampleDataset { id, data, stats })
            })
            .collect()
    }
}
