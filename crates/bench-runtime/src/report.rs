//! JSON results writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

/// `crypto_benchmark_<YYYY-MM-DD_HH-MM-SS>.json`
pub fn benchmark_file_name(at: DateTime<Local>) -> String {
    format!("crypto_benchmark_{}.json", at.format("%Y-%m-%d_%H-%M-%S"))
}

/// `ledger_tps_<YYYYMMDD_HHMMSS>.json`
pub fn throughput_file_name(at: DateTime<Local>) -> String {
    format!("ledger_tps_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Write `value` pretty-printed to `dir/file_name`, creating `dir` first.
pub fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create results directory {}", dir.display()))?;

    let json = serde_json::to_string_pretty(value).context("failed to encode results as JSON")?;
    let path = dir.join(file_name);
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "Results saved");
    Ok(path)
}
