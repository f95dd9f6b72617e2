//! # Metrics Records
//!
//! Per-scheme aggregates and the derived cross-scheme summary.
//!
//! ## Tie-break
//!
//! Every summary category is a left-to-right scan with strict `<`, so the
//! first record holding the minimum wins. Output is deterministic for
//! deterministic input.

use serde::{Deserialize, Serialize};

/// Unit label for time categories.
pub const UNIT_MS: &str = "ms";
/// Unit label for size categories.
pub const UNIT_BYTES: &str = "bytes";

/// Aggregated benchmark outcome for one scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub algorithm: String,
    pub keygen_time_ms: f64,
    pub sign_time_ms: f64,
    pub verify_time_ms: f64,
    pub public_key_bytes: usize,
    pub private_key_bytes: usize,
    pub signature_bytes: usize,
    /// RFC 3339 creation time
    pub timestamp: String,
}

/// Winning scheme for one summary category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricWinner {
    pub algorithm: String,
    pub value: f64,
    pub unit: String,
}

impl MetricWinner {
    fn new(algorithm: &str, value: f64, unit: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// Fastest/smallest winners across all records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub fastest_keygen: MetricWinner,
    pub fastest_sign: MetricWinner,
    pub fastest_verify: MetricWinner,
    pub smallest_public_key: MetricWinner,
    pub smallest_private_key: MetricWinner,
    pub smallest_signature: MetricWinner,
}

/// First record with the minimum `metric`, or `None` for no records.
fn first_minimum<'a, F>(records: &'a [MetricsRecord], metric: F) -> Option<(&'a MetricsRecord, f64)>
where
    F: Fn(&MetricsRecord) -> f64,
{
    let mut iter = records.iter();
    let first = iter.next()?;
    let mut best = (first, metric(first));

    for record in iter {
        let value = metric(record);
        if value < best.1 {
            best = (record, value);
        }
    }

    Some(best)
}

fn winner<F>(records: &[MetricsRecord], unit: &str, metric: F) -> MetricWinner
where
    F: Fn(&MetricsRecord) -> f64,
{
    first_minimum(records, metric)
        .map(|(record, value)| MetricWinner::new(&record.algorithm, value, unit))
        .unwrap_or_default()
}

/// Derive the summary. An empty slice yields an all-default summary.
pub fn compute_summary(records: &[MetricsRecord]) -> SummaryRecord {
    SummaryRecord {
        fastest_keygen: winner(records, UNIT_MS, |r| r.keygen_time_ms),
        fastest_sign: winner(records, UNIT_MS, |r| r.sign_time_ms),
        fastest_verify: winner(records, UNIT_MS, |r| r.verify_time_ms),
        smallest_public_key: winner(records, UNIT_BYTES, |r| r.public_key_bytes as f64),
        smallest_private_key: winner(records, UNIT_BYTES, |r| r.private_key_bytes as f64),
        smallest_signature: winner(records, UNIT_BYTES, |r| r.signature_bytes as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, keygen: f64, pk: usize) -> MetricsRecord {
        MetricsRecord {
            algorithm: name.to_string(),
            keygen_time_ms: keygen,
            sign_time_ms: 1.0,
            verify_time_ms: 1.0,
            public_key_bytes: pk,
            private_key_bytes: 32,
            signature_bytes: 64,
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    /// Test: [A=5, B=3, C=3] picks B, the first occurrence of the minimum
    #[test]
    fn test_tie_break_first_minimum_wins() {
        let records = vec![record("A", 5.0, 100), record("B", 3.0, 100), record("C", 3.0, 100)];

        let summary = compute_summary(&records);

        assert_eq!(summary.fastest_keygen.algorithm, "B");
        assert_eq!(summary.fastest_keygen.value, 3.0);
        assert_eq!(summary.fastest_keygen.unit, UNIT_MS);
    }

    /// Test: all-equal categories go to the first record
    #[test]
    fn test_all_equal_goes_to_first() {
        let records = vec![record("A", 5.0, 100), record("B", 3.0, 100), record("C", 3.0, 100)];

        let summary = compute_summary(&records);

        assert_eq!(summary.fastest_sign.algorithm, "A");
        assert_eq!(summary.smallest_public_key.algorithm, "A");
        assert_eq!(summary.smallest_signature.unit, UNIT_BYTES);
    }

    #[test]
    fn test_size_category_picks_smallest() {
        let records = vec![record("ML-DSA-44", 1.0, 1312), record("ECDSA", 2.0, 91)];

        let summary = compute_summary(&records);

        assert_eq!(summary.smallest_public_key.algorithm, "ECDSA");
        assert_eq!(summary.smallest_public_key.value, 91.0);
        assert_eq!(summary.fastest_keygen.algorithm, "ML-DSA-44");
    }

    /// Test: empty input is a zero-valued summary, not an error
    #[test]
    fn test_empty_records_yield_default_summary() {
        let summary = compute_summary(&[]);

        assert_eq!(summary, SummaryRecord::default());
        assert_eq!(summary.fastest_verify.value, 0.0);
        assert!(summary.smallest_signature.algorithm.is_empty());
    }

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(record("ECDSA", 0.5, 91)).unwrap();
        for field in [
            "algorithm",
            "keygen_time_ms",
            "sign_time_ms",
            "verify_time_ms",
            "public_key_bytes",
            "private_key_bytes",
            "signature_bytes",
            "timestamp",
        ] {
            assert!(json.get(field).is_some(), "missing {}", field);
        }
    }
}
