// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Histogram Builder

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::types::HistogramBin;

/// Fixed-width histogram over the data's own `[min, max]`.
///
/// `bin_count == 0` is treated as a single bin. When every value is equal the
/// result is one bin centred on that value holding the full count.
pub fn build(data: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    build_with_range(data, min, max, bin_count)
}

/// As [`build`], with the extremes already known.
pub fn build_with_range(data: &[f64], min: f64, max: f64, bin_count: usize) -> Vec<HistogramBin> {
    let total = data.len();
    if total == 0 {
        return Vec::new();
    }
    let bin_count = bin_count.max(1);
    // Divided before subtracting so a span near f64::MAX stays finite.
    let width = max / bin_count as f64 - min / bin_count as f64;

    if width <= 0.0 || !width.is_finite() {
        debug!(total, min, max, "zero-width histogram range, using a single bin");
        return vec![HistogramBin {
            bin_center: min,
            count: total as u64,
            frequency_percent: 100.0,
        }];
    }

    let mut counts = vec![0u64; bin_count];
    for &v in data {
        let idx = (v / width - min / width).floor() as usize;
        counts[idx.min(bin_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            bin_center: min + (i as f64 + 0.5) * width,
            count,
            frequency_percent: round_percent(count as f64 / total as f64 * 100.0),
        })
        .collect()
}

/// Two decimal places, half away from zero.
fn round_percent(pct: f64) -> f64 {
    Decimal::from_f64(pct)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(pct)
}
