//! # crypto-benchmark
//!
//! Compares ECDSA with ML-DSA-44/65/87 on key generation, signing and
//! verification latency and on key and signature sizes.
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line
//! 2. Initialize logging from `BENCH_*` environment variables
//! 3. Resolve configuration (flags, then environment, then defaults)
//! 4. Validate, benchmark, report

use std::io;

use anyhow::Result;
use bench_harness::BackendFactory;
use bench_runtime::{load_config, Args, BenchmarkRunner};
use clap::Parser;
use quantum_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.verbose();
    }
    let _telemetry = init_telemetry(telemetry)?;

    let config = load_config(args, |key| std::env::var(key).ok())?;
    let runner = BenchmarkRunner::new(BackendFactory, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)?;

    Ok(())
}
