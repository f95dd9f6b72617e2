//! # Benchmark Errors
//!
//! Every error is fatal to the enclosing run for its scheme. There is no
//! retry and no partial record.

use std::fmt;

use shared_crypto::{SchemeError, SchemeId};
use thiserror::Error;

/// Which stage of a run raised an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Key-pair construction trials
    KeyGeneration,
    /// Signing trials
    Signing,
    /// Verification trials (including the signer/verifier setup)
    Verification,
    /// Key and signature size measurement
    SizeMeasurement,
    /// Ledger throughput simulation
    Throughput,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::KeyGeneration => "key generation",
            Phase::Signing => "signing",
            Phase::Verification => "verification",
            Phase::SizeMeasurement => "size measurement",
            Phase::Throughput => "throughput simulation",
        };
        f.write_str(name)
    }
}

/// Errors produced by the benchmark core.
#[derive(Debug, Error)]
pub enum BenchError {
    /// A scheme operation failed (key generation, signing, verification,
    /// export or import)
    #[error("{scheme}: {phase} failed{}: {source}", trial_suffix(.trial))]
    Scheme {
        scheme: SchemeId,
        phase: Phase,
        trial: Option<usize>,
        #[source]
        source: SchemeError,
    },

    /// The measured verification rejected a freshly produced signature
    #[error("{scheme}: signature verification failed (trial {trial})")]
    VerificationRejected { scheme: SchemeId, trial: usize },

    /// Two verifications of the same input disagreed, or the second one
    /// raised an error (carried as `source`)
    #[error(
        "{scheme}: verification consistency check failed (trial {trial}: first={first}, second={second})"
    )]
    Consistency {
        scheme: SchemeId,
        trial: usize,
        first: bool,
        second: bool,
        #[source]
        source: Option<SchemeError>,
    },

    /// The pre-benchmark functional battery failed
    #[error("{scheme}: validation failed: {reason}")]
    Validation { scheme: SchemeId, reason: String },

    /// Configuration rejected before any trial ran
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Ledger payload could not be encoded
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

fn trial_suffix(trial: &Option<usize>) -> String {
    match trial {
        Some(trial) => format!(" at trial {}", trial),
        None => String::new(),
    }
}

impl BenchError {
    /// Adapter for `map_err` that tags a scheme error with where it happened.
    pub fn during(
        scheme: SchemeId,
        phase: Phase,
        trial: Option<usize>,
    ) -> impl FnOnce(SchemeError) -> BenchError {
        move |source| BenchError::Scheme {
            scheme,
            phase,
            trial,
            source,
        }
    }

    /// Build a validation failure.
    pub fn validation(scheme: SchemeId, reason: impl Into<String>) -> Self {
        BenchError::Validation {
            scheme,
            reason: reason.into(),
        }
    }

    /// The scheme this error is attributed to, if any.
    pub fn scheme(&self) -> Option<SchemeId> {
        match self {
            BenchError::Scheme { scheme, .. }
            | BenchError::VerificationRejected { scheme, .. }
            | BenchError::Consistency { scheme, .. }
            | BenchError::Validation { scheme, .. } => Some(*scheme),
            BenchError::InvalidConfig(_) | BenchError::Encoding(_) => None,
        }
    }
}
