//! # Benchmark Runner
//!
//! Orchestrates a full run in fixed order:
//!
//! 1. Validate every selected scheme (unless disabled). Any failure aborts
//!    before a single timing is taken.
//! 2. Benchmark the schemes in the order given.
//! 3. Print the summary and write the results document.
//! 4. Optionally run the ledger throughput simulation.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bench_harness::{
    BenchmarkHarness, BenchmarkReport, LedgerSimulator, MetricsCollector, SchemeFactory,
    SimulationMode, SimulationParams, TestConfig, ThroughputReport, ValidationSuite,
};
use chrono::Local;
use quantum_telemetry::{bench_span, log_event};
use tracing::info;

use crate::cli::RuntimeConfig;
use crate::console::{render_record, render_summary, render_throughput};
use crate::report::{benchmark_file_name, throughput_file_name, write_json};

/// Everything a completed run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: BenchmarkReport,
    pub report_path: PathBuf,
    /// Wall time from before validation until the report was assembled
    pub duration: Duration,
    pub throughput: Option<(ThroughputReport, PathBuf)>,
}

/// Drives validation, benchmarking, reporting and the optional simulation.
pub struct BenchmarkRunner<F: SchemeFactory> {
    factory: F,
    config: RuntimeConfig,
    simulation: SimulationParams,
}

impl<F: SchemeFactory> BenchmarkRunner<F> {
    pub fn new(factory: F, config: RuntimeConfig) -> Self {
        Self {
            factory,
            config,
            simulation: SimulationParams::default(),
        }
    }

    /// Override the ledger simulation shape.
    pub fn with_simulation(mut self, simulation: SimulationParams) -> Self {
        self.simulation = simulation;
        self
    }

    /// Execute the run, writing progress to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunOutcome> {
        let benchmark = &self.config.benchmark;
        let schemes = benchmark.schemes();

        writeln!(out, "Post-Quantum Signature Benchmark")?;
        writeln!(out, "================================")?;
        writeln!(out, "Test Message: {}", String::from_utf8_lossy(benchmark.message()))?;
        writeln!(out, "Iterations: {}", benchmark.iterations())?;
        writeln!(out, "Output Directory: {}", self.config.output_dir.display())?;
        writeln!(out)?;

        let mut collector = MetricsCollector::new(TestConfig::from_benchmark_config(benchmark));

        if self.config.validate {
            writeln!(out, "Step 1: Validating Implementation")?;
            let _span = bench_span!("validation").entered();
            let suite = ValidationSuite::new(&self.factory);
            for &id in schemes {
                writeln!(out, "Validating {}...", id)?;
                suite
                    .validate_scheme(id)
                    .context("implementation validation failed")?;
            }
            writeln!(out, "✓ Implementation validation passed\n")?;
        }

        writeln!(out, "Step 2: Running Benchmarks")?;
        let harness = BenchmarkHarness::new(&self.factory, benchmark.clone());

        for (position, &id) in schemes.iter().enumerate() {
            writeln!(out, "Running benchmark {}/{}: {}", position + 1, schemes.len(), id)?;
            let _span = bench_span!("benchmark", scheme = %id).entered();

            let record = harness
                .run(id)
                .with_context(|| format!("benchmark failed for {}", id))?;
            write!(out, "{}", render_record(&record))?;
            writeln!(out)?;
            collector.add_result(record);
        }

        let duration = collector.elapsed();
        let report = collector.finish();
        writeln!(out, "Total benchmark duration: {}", report.test_configuration.test_duration)?;
        write!(out, "{}", render_summary(&report))?;

        writeln!(out, "\nStep 3: Saving Results")?;
        let report_path = write_json(
            &self.config.output_dir,
            &benchmark_file_name(Local::now()),
            &report,
        )?;
        writeln!(out, "Results saved to: {}", report_path.display())?;

        let throughput = if self.config.throughput_modes.is_empty() {
            None
        } else {
            Some(self.run_throughput(out)?)
        };

        writeln!(out, "\n✓ Benchmark completed successfully!")?;
        info!(schemes = schemes.len(), path = %report_path.display(), "Run complete");

        Ok(RunOutcome {
            report,
            report_path,
            duration,
            throughput,
        })
    }

    fn run_throughput(&self, out: &mut dyn Write) -> Result<(ThroughputReport, PathBuf)> {
        writeln!(out, "\nStep 4: Ledger Throughput Simulation")?;
        let simulator = LedgerSimulator::new(&self.factory, self.simulation);
        let schemes = self.config.benchmark.schemes();

        let mut sequential = Vec::new();
        let mut parallel = Vec::new();

        for &mode in &self.config.throughput_modes {
            writeln!(out, "\nStarting {:?} Simulation", mode)?;
            writeln!(out, "{}", "=".repeat(50))?;

            for &id in schemes {
                let _span = bench_span!("throughput", scheme = %id).entered();
                let record = simulator
                    .simulate(id, mode)
                    .with_context(|| format!("ledger simulation failed for {}", id))?;
                log_event!(info, id, "Simulated ledger throughput", tps = record.tps);
                write!(out, "{}", render_throughput(&record))?;

                match mode {
                    SimulationMode::Sequential => sequential.push(record),
                    SimulationMode::Parallel => parallel.push(record),
                }
            }
        }

        let report = ThroughputReport::new(self.simulation, sequential, parallel);
        let path = write_json(
            &self.config.output_dir,
            &throughput_file_name(Local::now()),
            &report,
        )?;
        writeln!(out, "\nThroughput results saved to: {}", path.display())?;

        Ok((report, path))
    }
}
