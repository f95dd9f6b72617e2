//! # Command Line and Environment Configuration
//!
//! Precedence for every setting: command-line flag, then environment
//! variable, then built-in default.
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `BENCH_ITERATIONS` | `--iterations` |
//! | `BENCH_OUTPUT_DIR` | `--output` |

use std::path::PathBuf;

use anyhow::{Context, Result};
use bench_harness::{BenchmarkConfig, SimulationMode, DEFAULT_ITERATIONS, DEFAULT_MESSAGE};
use clap::{ArgAction, Parser};
use shared_crypto::SchemeId;
use tracing::warn;

/// Default results directory.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// crypto-benchmark: ECDSA vs ML-DSA signature benchmark
#[derive(Parser, Debug, Clone)]
#[command(name = "crypto-benchmark")]
#[command(about = "Benchmark ECDSA against ML-DSA-44/65/87 key generation, signing, verification and sizes")]
pub struct Args {
    /// Base message to sign
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Trials per operation [default: 100]
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Results directory [default: results]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Validate every scheme before benchmarking (`--validate=false` to skip)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub validate: bool,

    /// Comma-separated schemes to run (ECDSA, ML-DSA-44, ML-DSA-65, ML-DSA-87)
    #[arg(short, long, value_delimiter = ',', default_values_t = SchemeId::ALL)]
    pub schemes: Vec<SchemeId>,

    /// Also run the ledger throughput simulation
    #[arg(long)]
    pub throughput: bool,

    /// Add the parallel endorsement mode to the throughput simulation
    #[arg(long)]
    pub parallel: bool,

    /// Raise the default log level to debug
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub benchmark: BenchmarkConfig,
    pub output_dir: PathBuf,
    pub validate: bool,
    /// Ledger simulation modes to run; empty means skip the simulation
    pub throughput_modes: Vec<SimulationMode>,
}

/// Resolve `args` against environment variables read through `lookup`.
pub fn load_config<L>(args: Args, lookup: L) -> Result<RuntimeConfig>
where
    L: Fn(&str) -> Option<String>,
{
    let iterations = match args.iterations {
        Some(iterations) => iterations,
        None => env_iterations(&lookup).unwrap_or(DEFAULT_ITERATIONS),
    };

    let output_dir = args
        .output
        .or_else(|| lookup("BENCH_OUTPUT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let benchmark = BenchmarkConfig::new(args.message, iterations, args.schemes)
        .context("invalid benchmark configuration")?;

    let mut throughput_modes = Vec::new();
    if args.throughput || args.parallel {
        throughput_modes.push(SimulationMode::Sequential);
    }
    if args.parallel {
        throughput_modes.push(SimulationMode::Parallel);
    }

    Ok(RuntimeConfig {
        benchmark,
        output_dir,
        validate: args.validate,
        throughput_modes,
    })
}

fn env_iterations<L>(lookup: &L) -> Option<usize>
where
    L: Fn(&str) -> Option<String>,
{
    let raw = lookup("BENCH_ITERATIONS")?;
    match raw.trim().parse() {
        Ok(iterations) => Some(iterations),
        Err(_) => {
            warn!(value = %raw, "BENCH_ITERATIONS is not a number, ignoring");
            None
        }
    }
}
