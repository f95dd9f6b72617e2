//! # Quantum Telemetry
//!
//! Logging bootstrap for the signature benchmark.
//!
//! Library crates only emit `tracing` events; the binary installs the
//! subscriber once through [`init_telemetry`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantum_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!     // Benchmark runs here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BENCH_SERVICE_NAME` | `crypto-benchmark` | Service name on every log line |
//! | `BENCH_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `BENCH_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `BENCH_CONSOLE_OUTPUT` | `true` | Write logs to the console at all |

#![warn(missing_docs)]

mod config;
mod logging;
mod subscriber;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use subscriber::{env_filter, init_subscriber};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The configuration could not be turned into a filter
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
///
/// Returns a guard to hold for the lifetime of the application; dropping it
/// logs the shutdown.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    init_subscriber(&config)?;

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Telemetry initialized"
    );

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl TelemetryGuard {
    /// Service name the subscriber was installed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
