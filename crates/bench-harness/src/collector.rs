//! # Metrics Collector
//!
//! Owns the ordered per-scheme records of one run and derives the summary.
//! Insertion order is the only ordering guarantee; records are never
//! re-sorted.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{compute_summary, MetricsRecord, SummaryRecord, TestConfig};
use crate::harness::rfc3339_now;

/// Complete results document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub test_configuration: TestConfig,
    pub results: Vec<MetricsRecord>,
    pub summary: SummaryRecord,
    pub timestamp: String,
}

/// Accumulates records for one run.
#[derive(Debug)]
pub struct MetricsCollector {
    results: Vec<MetricsRecord>,
    config: TestConfig,
    started: Instant,
}

impl MetricsCollector {
    /// Start collecting; the run clock starts now.
    pub fn new(config: TestConfig) -> Self {
        Self {
            results: Vec::new(),
            config,
            started: Instant::now(),
        }
    }

    /// Append one scheme's record.
    pub fn add_result(&mut self, record: MetricsRecord) {
        debug!(scheme = %record.algorithm, position = self.results.len(), "Recorded result");
        self.results.push(record);
    }

    /// Records in insertion order.
    pub fn results(&self) -> &[MetricsRecord] {
        &self.results
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Time since the collector was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Fastest/smallest winners over everything recorded so far.
    pub fn compute_summary(&self) -> SummaryRecord {
        compute_summary(&self.results)
    }

    /// Stamp the run duration and assemble the results document.
    ///
    /// Can be called more than once; each call re-stamps the duration.
    pub fn finish(&mut self) -> BenchmarkReport {
        self.config.test_duration = format!("{:?}", self.elapsed());

        BenchmarkReport {
            test_configuration: self.config.clone(),
            results: self.results.clone(),
            summary: self.compute_summary(),
            timestamp: rfc3339_now(),
        }
    }
}
