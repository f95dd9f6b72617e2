//! # End-to-End Benchmark Flow
//!
//! Real backends through validation, the harness, the collector and the
//! JSON writer.

#[cfg(test)]
mod tests {
    use bench_harness::{
        BackendFactory, BenchmarkConfig, BenchmarkHarness, BenchmarkReport, MetricsCollector,
        TestConfig, ValidationSuite,
    };
    use bench_runtime::{BenchmarkRunner, RuntimeConfig};
    use shared_crypto::SchemeId;

    fn e2e_config() -> BenchmarkConfig {
        BenchmarkConfig::new("test", 10, vec![SchemeId::Ecdsa, SchemeId::MlDsa44]).unwrap()
    }

    /// Test: {"test", 10 iterations, [ECDSA, ML-DSA-44]} yields two ordered,
    /// strictly positive records and a summary naming only those two
    #[test]
    fn test_two_scheme_run() {
        let config = e2e_config();
        let mut collector = MetricsCollector::new(TestConfig::from_benchmark_config(&config));
        let harness = BenchmarkHarness::new(BackendFactory, config);

        for record in harness.run_all().unwrap() {
            collector.add_result(record);
        }

        let records = collector.results();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].algorithm, "ECDSA");
        assert_eq!(records[1].algorithm, "ML-DSA-44");

        for record in records {
            assert!(record.keygen_time_ms > 0.0, "{}", record.algorithm);
            assert!(record.sign_time_ms > 0.0, "{}", record.algorithm);
            assert!(record.verify_time_ms > 0.0, "{}", record.algorithm);
            assert!(record.public_key_bytes > 0);
            assert!(record.private_key_bytes > 0);
            assert!(record.signature_bytes > 0);
        }

        let summary = collector.compute_summary();
        let names = ["ECDSA", "ML-DSA-44"];
        for winner in [
            &summary.fastest_keygen,
            &summary.fastest_sign,
            &summary.fastest_verify,
            &summary.smallest_public_key,
            &summary.smallest_private_key,
            &summary.smallest_signature,
        ] {
            assert!(names.contains(&winner.algorithm.as_str()));
        }
        assert_eq!(summary.smallest_signature.algorithm, "ECDSA");
        assert_eq!(
            summary.smallest_public_key.value,
            shared_crypto::ecdsa::PUBLIC_KEY_BYTES as f64
        );
    }

    #[test]
    fn test_ml_dsa_sizes_are_library_constants() {
        let config = BenchmarkConfig::new(
            "sizes",
            1,
            vec![SchemeId::MlDsa44, SchemeId::MlDsa65, SchemeId::MlDsa87],
        )
        .unwrap();
        let harness = BenchmarkHarness::new(BackendFactory, config);

        let sizes: Vec<_> = harness
            .run_all()
            .unwrap()
            .into_iter()
            .map(|r| (r.public_key_bytes, r.private_key_bytes, r.signature_bytes))
            .collect();

        assert_eq!(
            sizes,
            vec![(1312, 2560, 2420), (1952, 4032, 3309), (2592, 4896, 4627)]
        );
    }

    #[test]
    fn test_validation_of_every_backend() {
        let reports = ValidationSuite::new(BackendFactory)
            .validate_all(&SchemeId::ALL)
            .unwrap();
        assert_eq!(reports.len(), SchemeId::ALL.len());
    }

    /// Test: the runtime writes a results document that reads back intact
    #[test]
    fn test_runtime_writes_results_file() {
        let temp = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            benchmark: BenchmarkConfig::new("test", 2, vec![SchemeId::Ecdsa]).unwrap(),
            output_dir: temp.path().join("results"),
            validate: true,
            throughput_modes: Vec::new(),
        };

        let outcome = BenchmarkRunner::new(BackendFactory, config)
            .run(&mut Vec::new())
            .unwrap();

        let file_name = outcome
            .report_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert!(file_name.starts_with("crypto_benchmark_"));
        assert!(file_name.ends_with(".json"));

        let text = std::fs::read_to_string(&outcome.report_path).unwrap();
        let saved: BenchmarkReport = serde_json::from_str(&text).unwrap();
        assert_eq!(saved.test_configuration.algorithms, vec!["ECDSA"]);
        assert_eq!(saved.summary.fastest_sign.algorithm, "ECDSA");
    }
}
