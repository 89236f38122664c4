// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Errors

/// Local, recoverable engine conditions.
///
/// Numeric degeneracies (zero Box-Muller draw, zero-width histogram range,
/// inverted uniform window) are absorbed internally and never surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Input text produced no numeric values.
    #[error("input contained no numeric values")]
    ParseEmpty,
    /// A run was requested without a usable observation set.
    #[error("no input data -- parse observations before running a simulation")]
    NoInputData,
    #[error("invalid simulation config: {reason}")]
    InvalidConfig { reason: String },
}

impl EngineError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}
