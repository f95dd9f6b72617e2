//! # Bench Runtime Library
//!
//! Internal modules of the `crypto-benchmark` binary, exposed for testing.
//!
//! - `cli` - command line parsing and environment overrides
//! - `runner` - validation, benchmarking, reporting, ledger simulation
//! - `console` - human-readable output
//! - `report` - JSON results files

pub mod cli;
pub mod console;
pub mod report;
pub mod runner;

pub use cli::{load_config, Args, RuntimeConfig, DEFAULT_OUTPUT_DIR};
pub use runner::{BenchmarkRunner, RunOutcome};
