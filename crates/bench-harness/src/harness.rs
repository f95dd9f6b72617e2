//! # Benchmark Harness
//!
//! Drives one scheme through isolated, repeated trials and reduces them to a
//! [`MetricsRecord`].
//!
//! ## Trial protocol
//!
//! | Phase | Fresh instances per trial | Timed span |
//! |-------|---------------------------|------------|
//! | Key generation | 1 | instance construction |
//! | Signing | 1 | `sign(message)` |
//! | Verification | 2 (signer + verifier) | `verify`, measured twice, longer kept |
//!
//! Sizes are measured once per scheme from a reference instance and the last
//! signature of the signing phase. Any failure aborts the scheme's run; no
//! partial record is ever produced.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{SecondsFormat, Utc};
use shared_crypto::{SchemeId, Signature};
use tracing::{debug, info};

use crate::domain::{
    duration_to_ms, mean_trial, BenchError, BenchmarkConfig, MetricsRecord, Phase, TrialTiming,
};
use crate::ports::outbound::SchemeFactory;

/// Per-trial verification message: `base ++ "_{trial}_{unix_nanos}"`.
///
/// The nanosecond suffix keeps messages distinct across runs as well as
/// across trials.
pub fn unique_message(base: &[u8], trial: usize) -> Vec<u8> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut message = base.to_vec();
    message.extend_from_slice(format!("_{}_{}", trial, nanos).as_bytes());
    message
}

/// Current time as RFC 3339, the format every record carries.
pub(crate) fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Isolated-trial benchmark driver.
pub struct BenchmarkHarness<F: SchemeFactory> {
    factory: F,
    config: BenchmarkConfig,
}

impl<F: SchemeFactory> BenchmarkHarness<F> {
    /// Create a harness over `factory` for one run configuration.
    pub fn new(factory: F, config: BenchmarkConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Benchmark every configured scheme in order, stopping at the first
    /// failure.
    pub fn run_all(&self) -> Result<Vec<MetricsRecord>, BenchError> {
        self.config
            .schemes()
            .iter()
            .map(|&id| self.run(id))
            .collect()
    }

    /// Produce the metrics record for one scheme.
    ///
    /// # Errors
    /// The first scheme failure, tagged with phase and trial, or a
    /// verification rejection / consistency failure.
    pub fn run(&self, id: SchemeId) -> Result<MetricsRecord, BenchError> {
        info!(
            scheme = %id,
            iterations = self.config.iterations(),
            "Benchmarking scheme"
        );

        let reference = self
            .factory
            .create(id)
            .map_err(BenchError::during(id, Phase::KeyGeneration, None))?;

        let keygen = self.time_key_generation(id)?;
        let (sign, last_signature) = self.time_signing(id)?;
        let verify = self.time_verification(id)?;

        let public_key = reference
            .export_public_key()
            .map_err(BenchError::during(id, Phase::SizeMeasurement, None))?;
        let private_key = reference
            .export_private_key()
            .map_err(BenchError::during(id, Phase::SizeMeasurement, None))?;

        let record = MetricsRecord {
            algorithm: id.name().to_string(),
            keygen_time_ms: duration_to_ms(keygen),
            sign_time_ms: duration_to_ms(sign),
            verify_time_ms: duration_to_ms(verify),
            public_key_bytes: public_key.len(),
            private_key_bytes: private_key.len(),
            signature_bytes: last_signature.len(),
            timestamp: rfc3339_now(),
        };

        info!(
            scheme = %id,
            keygen_ms = record.keygen_time_ms,
            sign_ms = record.sign_time_ms,
            verify_ms = record.verify_time_ms,
            public_key_bytes = record.public_key_bytes,
            private_key_bytes = record.private_key_bytes,
            signature_bytes = record.signature_bytes,
            "Scheme benchmark complete"
        );

        Ok(record)
    }

    /// Mean construction time of a fresh instance.
    pub fn time_key_generation(&self, id: SchemeId) -> Result<Duration, BenchError> {
        debug!(scheme = %id, phase = %Phase::KeyGeneration, "Starting phase");

        let mut timings = Vec::with_capacity(self.config.iterations());
        for trial in 0..self.config.iterations() {
            let (created, timing) = TrialTiming::measure(|| self.factory.create(id));
            created.map_err(BenchError::during(id, Phase::KeyGeneration, Some(trial)))?;
            timings.push(timing);
        }

        Ok(mean_trial(&timings))
    }

    /// Mean signing time over the base message, plus the last signature
    /// produced.
    pub fn time_signing(&self, id: SchemeId) -> Result<(Duration, Signature), BenchError> {
        debug!(scheme = %id, phase = %Phase::Signing, "Starting phase");

        let message = self.config.message();
        let mut timings = Vec::with_capacity(self.config.iterations());
        let mut last = None;

        for trial in 0..self.config.iterations() {
            let signer = self
                .factory
                .create(id)
                .map_err(BenchError::during(id, Phase::Signing, Some(trial)))?;

            let (signed, timing) = TrialTiming::measure(|| signer.sign(message));
            last = Some(signed.map_err(BenchError::during(id, Phase::Signing, Some(trial)))?);
            timings.push(timing);
        }

        let signature = last.ok_or_else(|| {
            BenchError::InvalidConfig("iterations must be at least 1".to_string())
        })?;
        Ok((mean_trial(&timings), signature))
    }

    /// Mean verification time across independent signer/verifier pairs.
    pub fn time_verification(&self, id: SchemeId) -> Result<Duration, BenchError> {
        debug!(scheme = %id, phase = %Phase::Verification, "Starting phase");

        let mut timings = Vec::with_capacity(self.config.iterations());
        for trial in 0..self.config.iterations() {
            timings.push(self.verification_trial(id, trial)?);
        }

        Ok(mean_trial(&timings))
    }

    fn verification_trial(&self, id: SchemeId, trial: usize) -> Result<TrialTiming, BenchError> {
        let during = |phase| BenchError::during(id, phase, Some(trial));

        let signer = self.factory.create(id).map_err(during(Phase::Verification))?;
        let mut verifier = self.factory.create(id).map_err(during(Phase::Verification))?;

        let message = unique_message(self.config.message(), trial);
        let signature = signer.sign(&message).map_err(during(Phase::Verification))?;
        let public_key = signer
            .export_public_key()
            .map_err(during(Phase::Verification))?;
        verifier
            .import_public_key(&public_key)
            .map_err(during(Phase::Verification))?;

        let (first, first_timing) = TrialTiming::measure(|| verifier.verify(&message, &signature));
        if !first.map_err(during(Phase::Verification))? {
            return Err(BenchError::VerificationRejected { scheme: id, trial });
        }

        let (second, second_timing) =
            TrialTiming::measure(|| verifier.verify(&message, &signature));
        let source = match second {
            Ok(true) => return Ok(first_timing.longer(second_timing)),
            Ok(false) => None,
            Err(e) => Some(e),
        };
        Err(BenchError::Consistency {
            scheme: id,
            trial,
            first: true,
            second: false,
            source,
        })
    }
}
