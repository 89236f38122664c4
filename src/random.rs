// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Random Variate Generation
//
// Normal draws use the Box-Muller transform, uniform draws linear
// interpolation. Both consume an injected uniform [0, 1) source so runs can be
// seeded (ChaCha8Rng) or pinned to a fixed sequence in tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Smallest `u1` fed to `ln` in Box-Muller; a zero draw is clamped up to it.
pub const BOX_MULLER_MIN_U1: f64 = f64::EPSILON;

// ─── Uniform Sources ─────────────────────────────────────────────────────────

/// Provider of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

impl RngSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn for_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

// ─── Variate Generator ───────────────────────────────────────────────────────

pub struct VariateGenerator<S> {
    source: S,
}

impl<S: UniformSource> VariateGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Box-Muller draw: `sqrt(-2 ln u1) * cos(2π u2) * std_dev + mean`.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.source.next_unit().max(BOX_MULLER_MIN_U1);
        let u2 = self.source.next_unit();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        z * std_dev + mean
    }

    /// `low + r * (high - low)`; an inverted range is swapped first.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let (low, high) = if low > high { (high, low) } else { (low, high) };
        let r = self.source.next_unit();
        low + r * (high - low)
    }
}
