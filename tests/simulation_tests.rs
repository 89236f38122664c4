#[cfg(test)]
mod tests {
    use montecarlo_engine::random::{SequenceSource, VariateGenerator};
    use montecarlo_engine::{
        export, parser, run_from_json, stats, Distribution, EngineError, SimulationConfig,
        SimulationEngine,
    };

    fn seeded(distribution: Distribution, samples: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            sample_count: samples,
            distribution,
            floor_enabled: false,
            seed: Some(seed),
            ..Default::default()
        }
    }

    // ========== Parse → Summarize → Run ==========

    #[test]
    fn test_one_to_five_end_to_end() {
        let obs = parser::parse("1, 2, 3\n4\n5");
        let input = stats::summarize(&obs).unwrap();
        assert_eq!(input.count, 5);
        assert_eq!(input.mean, 3.0);
        assert!((input.std_dev - 1.41421).abs() < 1e-5);
        assert_eq!((input.min, input.max, input.median), (1.0, 5.0, 3.0));

        let result = SimulationEngine::new()
            .run(&obs, &seeded(Distribution::Normal, 1000, 2024))
            .unwrap();
        assert!(
            (result.aggregate_stats.mean - 3.0).abs() < 0.5,
            "aggregate mean {} drifted from 3",
            result.aggregate_stats.mean
        );
        let p = result.percentiles;
        assert!(p.p5 <= p.p25 && p.p25 <= p.p50 && p.p50 <= p.p75 && p.p75 <= p.p95);
    }

    #[test]
    fn test_empty_text_then_run_fails() {
        let obs = parser::parse("");
        assert!(obs.is_empty());
        let err = SimulationEngine::new().run(&obs, &SimulationConfig::default()).unwrap_err();
        assert_eq!(err, EngineError::NoInputData);
    }

    #[test]
    fn test_run_from_json_config() {
        let result = run_from_json(
            &[4.0, 8.0, 15.0, 16.0, 23.0, 42.0],
            r#"{"sampleCount": 500, "distribution": "uniform", "floorEnabled": false, "binCount": 20, "seed": 1}"#,
        )
        .unwrap();
        assert_eq!(result.raw_samples.len(), 500);
        assert_eq!(result.histogram.len(), 20);
        assert!(result.raw_samples.iter().all(|&v| (4.0..=42.0).contains(&v)));
    }

    #[test]
    fn test_non_finite_floor_rejected() {
        let cfg = SimulationConfig { floor_value: f64::NAN, ..SimulationConfig::default() };
        let err = SimulationEngine::new().run(&[1.0, 2.0], &cfg).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    // ========== Injected Uniform Source ==========

    #[test]
    fn test_fixed_sequence_pins_formulas() {
        let mut gen = VariateGenerator::new(SequenceSource::new(vec![0.0, 0.5, 0.999]));
        // u1 = 0 is clamped, u2 = 0.5 gives cos(π) = -1.
        let expected = -(-2.0 * f64::EPSILON.ln()).sqrt();
        assert!((gen.normal(0.0, 1.0) - expected).abs() < 1e-9);
        // Next draw is 0.999.
        assert!((gen.uniform(0.0, 10.0) - 9.99).abs() < 1e-12);
    }

    #[test]
    fn test_run_with_fixed_source_is_deterministic() {
        let engine = SimulationEngine::new();
        let cfg = seeded(Distribution::Uniform, 100, 0);
        let obs = [2.0, 6.0];
        let result = engine
            .run_with(&obs, &cfg, SequenceSource::new(vec![0.5]))
            .unwrap();
        assert!(result.raw_samples.iter().all(|&v| v == 4.0));
        for ds in &result.sample_datasets {
            // Local windows: [2, 3] and [5, 6], midpoint draws.
            assert_eq!(ds.data, vec![2.5, 5.5]);
        }
    }

    // ========== Paired Datasets ==========

    #[test]
    fn test_paired_positional_correspondence() {
        let obs: Vec<f64> = (0..40).map(|i| i as f64 * 100.0).collect();
        let result = SimulationEngine::new()
            .run(&obs, &seeded(Distribution::Uniform, 100, 9))
            .unwrap();
        let quarter = (obs[39] - obs[0]) / 4.0;
        for ds in &result.sample_datasets {
            assert_eq!(ds.data.len(), obs.len());
            for (j, &v) in ds.data.iter().enumerate() {
                assert!((v - obs[j]).abs() <= quarter, "point {} moved too far", j);
            }
            assert_eq!(ds.stats, stats::summarize(&ds.data).unwrap());
        }
    }

    #[test]
    fn test_dataset_export_round_trip() {
        let result = SimulationEngine::new()
            .run(&[1.5, 2.3, 1.8, 2.1], &seeded(Distribution::Normal, 200, 3))
            .unwrap();
        for ds in &result.sample_datasets {
            let csv = export::export_csv(ds);
            assert!(!csv.ends_with(','));
            assert_eq!(csv.matches(",\n").count(), ds.data.len() - 1);
            assert_eq!(parser::parse(&csv), ds.data);
        }
        assert_eq!(result.sample_datasets[9].file_name(), "monte_carlo_sample_10.csv");
    }

    // ========== Result Replacement ==========

    #[test]
    fn test_runs_do_not_share_state() {
        let engine = SimulationEngine::new();
        let first = engine.run(&[1.0, 2.0, 3.0], &seeded(Distribution::Normal, 300, 5)).unwrap();
        let _other = engine.run(&[100.0, 200.0], &seeded(Distribution::Uniform, 900, 6)).unwrap();
        let again = engine.run(&[1.0, 2.0, 3.0], &seeded(Distribution::Normal, 300, 5)).unwrap();
        assert_eq!(first, again);
    }
}

#[cfg(test)]
mod proptests {
    use montecarlo_engine::{Distribution, SimulationConfig, SimulationEngine};
    use proptest::prelude::*;

    fn distribution() -> impl Strategy<Value = Distribution> {
        prop_oneof![Just(Distribution::Normal), Just(Distribution::Uniform)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn floor_holds_everywhere(
            obs in proptest::collection::vec(-100.0_f64..100.0, 1..=100),
            floor in -50.0_f64..50.0,
            dist in distribution(),
            seed in any::<u64>(),
        ) {
            let cfg = SimulationConfig {
                sample_count: 500,
                distribution: dist,
                floor_enabled: true,
                floor_value: floor,
                seed: Some(seed),
                ..Default::default()
            };
            let result = SimulationEngine::new().run(&obs, &cfg).unwrap();
            prop_assert!(result.raw_samples.iter().all(|&v| v >= floor));
            prop_assert!(result.sample_datasets.iter().flat_map(|d| &d.data).all(|&v| v >= floor));
        }

        #[test]
        fn histogram_total_and_paired_lengths(
            obs in proptest::collection::vec(-1e3_f64..1e3, 1..=100),
            bins in 1_usize..120,
            samples in 100_usize..2_000,
            dist in distribution(),
            seed in any::<u64>(),
        ) {
            let cfg = SimulationConfig {
                sample_count: samples,
                distribution: dist,
                floor_enabled: false,
                bin_count: bins,
                seed: Some(seed),
                ..Default::default()
            };
            let result = SimulationEngine::new().run(&obs, &cfg).unwrap();
            let total: u64 = result.histogram.iter().map(|b| b.count).sum();
            prop_assert_eq!(total, samples as u64);
            prop_assert_eq!(result.sample_datasets.len(), 10);
            for ds in &result.sample_datasets {
                prop_assert_eq!(ds.data.len(), obs.len());
            }
        }
    }
}
