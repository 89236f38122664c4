// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Simulation Configuration

//! Run parameters handed in by the UI shell, plus the validation policy.
//!
//! `sample_count` is clamped into `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`.
//! A non-finite floor (while the floor is enabled) or a zero bin count is
//! rejected with [`EngineError::InvalidConfig`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;
use crate::types::Distribution;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MIN_SAMPLE_COUNT: usize = 100;
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Parser keeps at most this many observations.
pub const MAX_OBSERVATIONS: usize = 100;

/// Paired datasets produced per run.
pub const SAMPLE_DATASET_COUNT: usize = 10;

pub const DEFAULT_BIN_COUNT: usize = 50;

// ---------------------------------------------------------------------------
// SimulationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Aggregate-mode draws per run.
    pub sample_count: usize,
    pub distribution: Distribution,
    /// Clamp every generated value up to `floor_value` when set.
    pub floor_enabled: bool,
    pub floor_value: f64,
    pub bin_count: usize,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            distribution: Distribution::Normal,
            floor_enabled: true,
            floor_value: 0.0,
            bin_count: DEFAULT_BIN_COUNT,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::invalid_config(e.to_string()))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Normalised copy of this config, or the reason it cannot be run.
    pub fn validate(&self) -> Result<Self, EngineError> {
        if self.floor_enabled && !self.floor_value.is_finite() {
            return Err(EngineError::invalid_config(format!(
                "floor value must be finite, got {}",
                self.floor_value
            )));
        }
        if self.bin_count == 0 {
            return Err(EngineError::invalid_config("bin count must be at least 1"));
        }

        let mut validated = self.clone();
        let clamped = self.sample_count.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT);
        if clamped != self.sample_count {
            warn!(
                requested = self.sample_count,
                clamped, "sample count out of range, clamping"
            );
            validated.sample_count = clamped;
        }
        Ok(validated)
    }

    /// Applies the floor constraint to a single generated value.
    #[inline]
    pub fn apply_floor(&self, value: f64) -> f64 {
        if self.floor_enabled && value < self.floor_value {
            self.floor_value
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_ui_shell() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.sample_count, 10_000);
        assert_eq!(cfg.distribution, Distribution::Normal);
        assert!(cfg.floor_enabled);
        assert_eq!(cfg.floor_value, 0.0);
        assert_eq!(cfg.bin_count, 50);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_sample_count_clamped_low_and_high() {
        let low = SimulationConfig { sample_count: 5, ..Default::default() };
        assert_eq!(low.validate().unwrap().sample_count, MIN_SAMPLE_COUNT);

        let high = SimulationConfig { sample_count: 5_000_000, ..Default::default() };
        assert_eq!(high.validate().unwrap().sample_count, MAX_SAMPLE_COUNT);

        let ok = SimulationConfig { sample_count: 2_500, ..Default::default() };
        assert_eq!(ok.validate().unwrap().sample_count, 2_500);
    }

    #[test]
    fn test_non_finite_floor_rejected_only_when_enabled() {
        let cfg = SimulationConfig { floor_value: f64::NAN, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig { .. })));

        let disabled = SimulationConfig {
            floor_enabled: false,
            floor_value: f64::INFINITY,
            ..Default::default()
        };
        assert!(disabled.validate().is_ok());
    }

    #[test]
    fn test_zero_bins_rejected() {
        let cfg = SimulationConfig { bin_count: 0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_from_json_partial_fields_take_defaults() {
        let cfg = SimulationConfig::from_json(
            r#"{"sampleCount": 1000, "distribution": "uniform", "floorEnabled": false, "seed": 9}"#,
        )
        .unwrap();
        assert_eq!(cfg.sample_count, 1000);
        assert_eq!(cfg.distribution, Distribution::Uniform);
        assert!(!cfg.floor_enabled);
        assert_eq!(cfg.bin_count, DEFAULT_BIN_COUNT);
        assert_eq!(cfg.seed, Some(9));
    }

    #[test]
    fn test_from_json_malformed_is_invalid_config() {
        let err = SimulationConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_apply_floor() {
        let cfg = SimulationConfig { floor_value: 1.5, ..Default::default() };
        assert_eq!(cfg.apply_floor(-3.0), 1.5);
        assert_eq!(cfg.apply_floor(2.0), 2.0);

        let off = SimulationConfig { floor_enabled: false, floor_value: 1.5, ..Default::default() };
        assert_eq!(off.apply_floor(-3.0), -3.0);
    }
}
