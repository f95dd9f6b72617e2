//! # Validation Suite
//!
//! Functional battery run before any timing. A scheme that cannot round-trip
//! its own signatures must never produce benchmark numbers, so the first
//! failure aborts the whole run.

use shared_crypto::{SchemeId, SignatureScheme};
use tracing::{debug, info, warn};

use crate::domain::{BenchError, Phase, TrialTiming};
use crate::ports::outbound::SchemeFactory;

/// Representative messages every scheme must sign and verify.
pub const VALIDATION_MESSAGES: [&str; 4] = [
    "Short test",
    "This is a longer test message with more content to validate",
    "Test with special chars: !@#$%^&*()_+-=[]{}|;':\",./<>?",
    "",
];

/// Outcome of verifying instance A's signature with an unrelated instance B.
///
/// Informational only. B never imported A's key, so `Rejected` is the
/// expected result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrossInstanceOutcome {
    Accepted,
    Rejected,
    Errored(String),
}

/// What a successful validation observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub scheme: SchemeId,
    pub messages_checked: usize,
    pub public_key_bytes: usize,
    pub private_key_bytes: usize,
    pub cross_instance: CrossInstanceOutcome,
    /// One signing call, floored to a microsecond
    pub sign_time: TrialTiming,
}

/// Pre-benchmark functional checks.
pub struct ValidationSuite<F: SchemeFactory> {
    factory: F,
}

impl<F: SchemeFactory> ValidationSuite<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Validate every scheme in order, failing fast.
    pub fn validate_all(&self, schemes: &[SchemeId]) -> Result<Vec<ValidationReport>, BenchError> {
        schemes.iter().map(|&id| self.validate_scheme(id)).collect()
    }

    /// Run the battery against one instance of `id`.
    pub fn validate_scheme(&self, id: SchemeId) -> Result<ValidationReport, BenchError> {
        let scheme = self
            .factory
            .create(id)
            .map_err(BenchError::during(id, Phase::KeyGeneration, None))?;

        for (index, message) in VALIDATION_MESSAGES.iter().enumerate() {
            let signature = scheme.sign(message.as_bytes()).map_err(|e| {
                BenchError::validation(id, format!("sign failed for message {}: {}", index, e))
            })?;
            if signature.is_empty() {
                return Err(BenchError::validation(
                    id,
                    format!("empty signature for message {}", index),
                ));
            }

            let valid = scheme.verify(message.as_bytes(), &signature).map_err(|e| {
                BenchError::validation(id, format!("verify failed for message {}: {}", index, e))
            })?;
            if !valid {
                return Err(BenchError::validation(
                    id,
                    format!("signature rejected for message {}", index),
                ));
            }
            debug!(scheme = %id, message = index, "Round trip ok");
        }

        let public_key = scheme
            .export_public_key()
            .map_err(|e| BenchError::validation(id, format!("public key export failed: {}", e)))?;
        let private_key = scheme
            .export_private_key()
            .map_err(|e| BenchError::validation(id, format!("private key export failed: {}", e)))?;
        if public_key.is_empty() || private_key.is_empty() {
            return Err(BenchError::validation(id, "key export returned no bytes"));
        }

        let cross_instance = self.cross_instance_check(id, &*scheme)?;

        let (signed, sign_time) =
            TrialTiming::measure(|| scheme.sign(VALIDATION_MESSAGES[0].as_bytes()));
        signed.map_err(|e| BenchError::validation(id, format!("timed sign failed: {}", e)))?;

        info!(
            scheme = %id,
            sign_time_us = sign_time.duration().as_micros() as u64,
            "Validation passed"
        );

        Ok(ValidationReport {
            scheme: id,
            messages_checked: VALIDATION_MESSAGES.len(),
            public_key_bytes: public_key.len(),
            private_key_bytes: private_key.len(),
            cross_instance,
            sign_time,
        })
    }

    /// Sign with `signer`, verify with a second, unrelated instance.
    ///
    /// Creating the second instance and signing are scheme operations like
    /// any other and fail validation. Only the verification outcome is
    /// observed without judgement.
    fn cross_instance_check(
        &self,
        id: SchemeId,
        signer: &dyn SignatureScheme,
    ) -> Result<CrossInstanceOutcome, BenchError> {
        let message = b"Cross-instance test";
        let signature = signer
            .sign(message)
            .map_err(|e| BenchError::validation(id, format!("cross-instance sign failed: {}", e)))?;
        let other = self
            .factory
            .create(id)
            .map_err(BenchError::during(id, Phase::KeyGeneration, None))?;

        let outcome = match other.verify(message, &signature) {
            Ok(true) => CrossInstanceOutcome::Accepted,
            Ok(false) => CrossInstanceOutcome::Rejected,
            Err(e) => {
                warn!(scheme = %id, error = %e, "Cross-instance verification errored");
                CrossInstanceOutcome::Errored(e.to_string())
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::BackendFactory;
    use crate::test_utils::{MockBehavior, MockFactory, MockScheme};

    #[test]
    fn test_battery_includes_empty_message() {
        assert!(VALIDATION_MESSAGES.iter().any(|m| m.is_empty()));
    }

    #[test]
    fn test_honest_scheme_passes() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::Honest));

        let report = suite.validate_scheme(SchemeId::Ecdsa).unwrap();

        assert_eq!(report.messages_checked, 4);
        assert_eq!(report.cross_instance, CrossInstanceOutcome::Rejected);
        assert!(report.sign_time.duration().as_nanos() >= 1_000);
    }

    #[test]
    fn test_rejecting_scheme_fails() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::AlwaysReject));
        let err = suite.validate_scheme(SchemeId::MlDsa44).unwrap_err();
        assert!(matches!(err, BenchError::Validation { scheme: SchemeId::MlDsa44, .. }));
    }

    #[test]
    fn test_empty_signature_fails() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::EmptySignature));
        let err = suite.validate_scheme(SchemeId::Ecdsa).unwrap_err();
        assert!(err.to_string().contains("empty signature"));
    }

    #[test]
    fn test_empty_key_export_fails() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::EmptyExport));
        let err = suite.validate_scheme(SchemeId::Ecdsa).unwrap_err();
        assert!(err.to_string().contains("key export"));
    }

    /// Test: failing to create the second instance fails validation
    #[test]
    fn test_cross_instance_keygen_failure_is_fatal() {
        let factory = MockFactory::failing_after(1);
        let suite = ValidationSuite::new(&factory);

        let err = suite.validate_scheme(SchemeId::MlDsa87).unwrap_err();

        assert!(matches!(
            err,
            BenchError::Scheme {
                scheme: SchemeId::MlDsa87,
                phase: Phase::KeyGeneration,
                ..
            }
        ));
    }

    /// Test: a verifier error in the cross-instance check is recorded, not fatal
    #[test]
    fn test_cross_instance_verify_error_is_recorded() {
        let suite = ValidationSuite::new(MockFactory::new(MockBehavior::Honest));
        let signer = MockScheme::new(SchemeId::Ecdsa, MockBehavior::Honest, 99);
        let errors = MockFactory::new(MockBehavior::VerifyError);

        let honest = suite.cross_instance_check(SchemeId::Ecdsa, &signer).unwrap();
        let errored = ValidationSuite::new(&errors)
            .cross_instance_check(SchemeId::Ecdsa, &signer)
            .unwrap();

        assert_eq!(honest, CrossInstanceOutcome::Rejected);
        assert!(matches!(errored, CrossInstanceOutcome::Errored(_)));
    }

    #[test]
    fn test_validate_all_fails_fast() {
        let factory = MockFactory::failing_after(2);
        let suite = ValidationSuite::new(&factory);

        let err = suite
            .validate_all(&[SchemeId::Ecdsa, SchemeId::MlDsa44])
            .unwrap_err();

        assert_eq!(err.scheme(), Some(SchemeId::MlDsa44));
    }

    #[test]
    fn test_real_schemes_validate() {
        let reports = ValidationSuite::new(BackendFactory)
            .validate_all(&SchemeId::ALL)
            .unwrap();

        assert_eq!(reports.len(), 4);
        for report in reports {
            assert_eq!(report.cross_instance, CrossInstanceOutcome::Rejected);
        }
    }
}
