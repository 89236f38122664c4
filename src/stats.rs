// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Descriptive Statistics

use crate::types::{Percentiles, Statistics};

/// Summarize a sequence; `None` when `data` is empty.
///
/// Works on a sorted copy, so callers relying on positional order keep it.
pub fn summarize(data: &[f64]) -> Option<Statistics> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    summarize_sorted(data, &sorted)
}

/// Shared body for callers that already hold a sorted copy of `data`.
pub(crate) fn summarize_sorted(data: &[f64], sorted: &[f64]) -> Option<Statistics> {
    let n = data.len();
    if n == 0 {
        return None;
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    Some(Statistics {
        count: n,
        mean,
        variance,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        median,
    })
}

/// Nearest-rank lookup at `floor(len * p)` into an ascending slice.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = (sorted.len() as f64 * p).floor() as usize;
    Some(sorted[idx.min(sorted.len() - 1)])
}

/// p5/p25/p50/p75/p95 from a single ascending slice.
pub fn percentiles_sorted(sorted: &[f64]) -> Option<Percentiles> {
    Some(Percentiles {
        p5: percentile_sorted(sorted, 0.05)?,
        p25: percentile_sorted(sorted, 0.25)?,
        p50: percentile_sorted(sorted, 0.50)?,
        p75: percentile_sorted(sorted, 0.75)?,
        p95: percentile_sorted(sorted, 0.95)?,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn ordering_invariants(data in proptest::collection::vec(-1e6_f64..1e6, 1..=100)) {
            let s = summarize(&data).unwrap();
            prop_assert!(s.min <= s.median && s.median <= s.max);
            let tol = 1e-9 * s.min.abs().max(s.max.abs()).max(1.0);
            prop_assert!(s.min - tol <= s.mean && s.mean <= s.max + tol);
            prop_assert!(s.variance >= 0.0);
            prop_assert_eq!(s.count, data.len());
        }

        #[test]
        fn constant_sequence(v in -1e6_f64..1e6, n in 1_usize..100) {
            let s = summarize(&vec![v; n]).unwrap();
            prop_assert!((s.mean - v).abs() <= 1e-9 * v.abs().max(1.0));
            prop_assert!(s.variance.abs() < 1e-6);
            prop_assert_eq!(s.min, v);
            prop_assert_eq!(s.max, v);
            prop_assert_eq!(s.median, v);
        }
    }
}
