//! # Bench Harness - Signature Scheme Benchmark Core
//!
//! Measures key generation, signing and verification latency plus artifact
//! sizes for every configured scheme, and reduces them to a comparable
//! summary.
//!
//! ## Architecture
//!
//! ```text
//! ValidationSuite ──► BenchmarkHarness ──► MetricsCollector ──► BenchmarkReport
//!        │                    │
//!        └──── SchemeFactory (port) ──── BackendFactory (adapter)
//! ```
//!
//! ## Isolation
//!
//! Every trial runs on freshly keyed instances and every verification trial
//! on a fresh message, so no library-level cache can understate cost.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bench_harness::{BackendFactory, BenchmarkConfig, BenchmarkHarness, MetricsCollector, TestConfig};
//! use shared_crypto::SchemeId;
//!
//! let config = BenchmarkConfig::new("test", 10, vec![SchemeId::Ecdsa, SchemeId::MlDsa44])?;
//! let mut collector = MetricsCollector::new(TestConfig::from_benchmark_config(&config));
//! let harness = BenchmarkHarness::new(BackendFactory, config);
//! for record in harness.run_all()? {
//!     collector.add_result(record);
//! }
//! let report = collector.finish();
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod collector;
pub mod domain;
pub mod harness;
pub mod ports;
pub mod throughput;
pub mod validation;

/// Mock schemes and factories.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-exports
pub use adapters::BackendFactory;
pub use collector::{BenchmarkReport, MetricsCollector};
pub use domain::{
    compute_summary, duration_to_ms, mean_duration, BenchError, BenchmarkConfig, MetricWinner,
    MetricsRecord, Phase, SummaryRecord, TestConfig, TrialTiming, DEFAULT_ITERATIONS,
    DEFAULT_MESSAGE, MIN_TRIAL_DURATION,
};
pub use harness::{unique_message, BenchmarkHarness};
pub use ports::SchemeFactory;
pub use throughput::{
    LedgerSimulator, SimulationMode, SimulationParams, ThroughputRecord, ThroughputReport,
};
pub use validation::{CrossInstanceOutcome, ValidationReport, ValidationSuite, VALIDATION_MESSAGES};
