//! Human-readable console output.

use std::fmt::Write as _;

use bench_harness::{BenchmarkReport, MetricWinner, MetricsRecord, ThroughputRecord};

/// Per-scheme lines, indented under the scheme's heading.
pub fn render_record(record: &MetricsRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Key Generation: {:.3} ms", record.keygen_time_ms);
    let _ = writeln!(out, "  Signing: {:.3} ms", record.sign_time_ms);
    let _ = writeln!(out, "  Verification: {:.3} ms", record.verify_time_ms);
    let _ = writeln!(out, "  Public Key: {} bytes", record.public_key_bytes);
    let _ = writeln!(out, "  Private Key: {} bytes", record.private_key_bytes);
    let _ = writeln!(out, "  Signature: {} bytes", record.signature_bytes);
    out
}

fn time_leader(label: &str, winner: &MetricWinner) -> String {
    format!("  {}: {} ({:.3} ms)\n", label, winner.algorithm, winner.value)
}

fn size_leader(label: &str, winner: &MetricWinner) -> String {
    format!("  {}: {} ({} bytes)\n", label, winner.algorithm, winner.value as u64)
}

/// Full summary: configuration, every record, then the leaders.
pub fn render_summary(report: &BenchmarkReport) -> String {
    let config = &report.test_configuration;
    let summary = &report.summary;
    let mut out = String::from("\n=== BENCHMARK SUMMARY ===\n");

    let _ = writeln!(out, "Test Configuration:");
    let _ = writeln!(out, "  Message: {}", config.test_message);
    let _ = writeln!(out, "  Iterations: {}", config.iterations);
    let _ = writeln!(out, "  Duration: {}", config.test_duration);
    let _ = writeln!(out, "  Algorithms: [{}]", config.algorithms.join(", "));

    out.push_str("\nResults by Algorithm:\n");
    for record in &report.results {
        let _ = writeln!(out, "\n{}:", record.algorithm);
        out.push_str(&render_record(record));
    }

    out.push_str("\nPerformance Leaders:\n");
    out.push_str(&time_leader("Fastest Key Generation", &summary.fastest_keygen));
    out.push_str(&time_leader("Fastest Signing", &summary.fastest_sign));
    out.push_str(&time_leader("Fastest Verification", &summary.fastest_verify));
    out.push_str(&size_leader("Smallest Public Key", &summary.smallest_public_key));
    out.push_str(&size_leader("Smallest Private Key", &summary.smallest_private_key));
    out.push_str(&size_leader("Smallest Signature", &summary.smallest_signature));
    out
}

/// One ledger simulation result block.
pub fn render_throughput(record: &ThroughputRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- {} ---", record.algorithm);
    let _ = writeln!(out, "TPS                    : {:.2}", record.tps);
    let _ = writeln!(out, "Avg Sign Time          : {:.3} ms", record.avg_sign_time_ms);
    let _ = writeln!(out, "Avg Verify Time        : {:.3} ms", record.avg_verify_time_ms);
    let _ = writeln!(out, "Avg Tx Latency         : {:.3} ms", record.avg_latency_ms);
    let _ = writeln!(out, "Avg Block Time         : {:.3} ms", record.avg_block_time_ms);
    let _ = writeln!(out, "Avg Block Size         : {:.1} bytes", record.avg_block_size_bytes);
    out
}
