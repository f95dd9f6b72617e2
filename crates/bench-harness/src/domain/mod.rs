//! Domain layer: timings, records, configuration and errors.

pub mod config;
pub mod errors;
pub mod metrics;
pub mod timing;

pub use config::{BenchmarkConfig, TestConfig, DEFAULT_ITERATIONS, DEFAULT_MESSAGE};
pub use errors::{BenchError, Phase};
pub use metrics::{compute_summary, MetricWinner, MetricsRecord, SummaryRecord};
pub use timing::{duration_to_ms, mean_duration, mean_trial, TrialTiming, MIN_TRIAL_DURATION};
