//! # Failure Paths
//!
//! Broken schemes must stop the run with a typed error instead of producing
//! numbers.

#[cfg(test)]
mod tests {
    use bench_harness::test_utils::{MockBehavior, MockFactory};
    use bench_harness::{BenchError, BenchmarkConfig, BenchmarkHarness, Phase, ValidationSuite};
    use shared_crypto::SchemeId;

    fn config(schemes: Vec<SchemeId>) -> BenchmarkConfig {
        BenchmarkConfig::new("test", 4, schemes).unwrap()
    }

    /// Test: two verifications disagreeing on identical input is a hard failure
    #[test]
    fn test_inconsistent_verifier_aborts() {
        let harness = BenchmarkHarness::new(
            MockFactory::new(MockBehavior::FlipFlop),
            config(vec![SchemeId::MlDsa44]),
        );

        let err = harness.run_all().unwrap_err();

        assert!(matches!(err, BenchError::Consistency { .. }));
        assert_eq!(err.scheme(), Some(SchemeId::MlDsa44));
    }

    /// Test: the first failing scheme stops the remaining ones
    #[test]
    fn test_failure_stops_later_schemes() {
        let factory = MockFactory::failing_after(5);
        let harness = BenchmarkHarness::new(&factory, config(vec![SchemeId::Ecdsa, SchemeId::MlDsa87]));

        let err = harness.run_all().unwrap_err();

        assert!(matches!(
            err,
            BenchError::Scheme {
                scheme: SchemeId::Ecdsa,
                phase: Phase::Signing,
                ..
            }
        ));
        assert_eq!(factory.created(), 5);
    }

    #[test]
    fn test_stub_scheme_fails_validation() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::EmptySignature));

        let err = suite.validate_all(&SchemeId::ALL).unwrap_err();

        assert!(matches!(err, BenchError::Validation { scheme: SchemeId::Ecdsa, .. }));
    }

    #[test]
    fn test_zero_iterations_never_reach_the_harness() {
        assert!(matches!(
            BenchmarkConfig::new("test", 0, vec![SchemeId::Ecdsa]),
            Err(BenchError::InvalidConfig(_))
        ));
    }
}
