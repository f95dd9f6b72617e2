//! # Run Configuration
//!
//! `BenchmarkConfig` is what the harness consumes; `TestConfig` is the
//! serializable echo of it that lands in the results document.

use serde::{Deserialize, Serialize};
use shared_crypto::SchemeId;

use super::errors::BenchError;

/// Default base message, matching the reference tool.
pub const DEFAULT_MESSAGE: &str =
    "Hyperledger Fabric ML-DSA vs ECDSA Performance Benchmark Test Message";

/// Default trial count per operation.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Immutable configuration for one benchmark run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    message: Vec<u8>,
    iterations: usize,
    schemes: Vec<SchemeId>,
}

impl BenchmarkConfig {
    /// Build a configuration.
    ///
    /// # Errors
    /// `BenchError::InvalidConfig` when `iterations` is zero or no scheme is
    /// listed.
    pub fn new(
        message: impl Into<Vec<u8>>,
        iterations: usize,
        schemes: Vec<SchemeId>,
    ) -> Result<Self, BenchError> {
        if iterations == 0 {
            return Err(BenchError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        if schemes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one scheme must be selected".to_string(),
            ));
        }
        Ok(Self {
            message: message.into(),
            iterations,
            schemes,
        })
    }

    /// Base test message.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Trials per operation.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Schemes in caller-specified run order.
    pub fn schemes(&self) -> &[SchemeId] {
        &self.schemes
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.as_bytes().to_vec(),
            iterations: DEFAULT_ITERATIONS,
            schemes: SchemeId::ALL.to_vec(),
        }
    }
}

/// Run configuration as written into the results document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    pub test_message: String,
    pub iterations: usize,
    pub algorithms: Vec<String>,
    /// Human-readable wall time of the whole run; filled in on finish.
    pub test_duration: String,
}

impl TestConfig {
    pub fn from_benchmark_config(config: &BenchmarkConfig) -> Self {
        Self {
            test_message: String::from_utf8_lossy(config.message()).into_owned(),
            iterations: config.iterations(),
            algorithms: config
                .schemes()
                .iter()
                .map(|id| id.name().to_string())
                .collect(),
            test_duration: String::new(),
        }
    }
}
