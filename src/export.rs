// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Monte Carlo Sampling Engine - Dataset Export

use crate::types::SampleDataset;

/// Separator between exported values.
pub const CSV_SEPARATOR: &str = ",\n";

/// Values joined by `",\n"`: no header, no trailing separator.
///
/// `f64` formatting is shortest round-trip, so re-parsing recovers the
/// exact values.
pub fn export_csv(dataset: &SampleDataset) -> String {
    values_to_csv(&dataset.data)
}

pub fn values_to_csv(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(CSV_SEPARATOR)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::parser;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn export_parse_round_trip(data in proptest::collection::vec(-1e9_f64..1e9, 0..=100)) {
            prop_assert_eq!(parser::parse(&values_to_csv(&data)), data);
        }
    }
}
