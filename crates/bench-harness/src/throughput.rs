//! # Ledger Throughput Simulation
//!
//! Approximates per-scheme transaction throughput of a block-producing
//! ledger: every transaction is signed and verified, every block is
//! serialized, hashed and signed by the producer.
//!
//! ## Modes
//!
//! - **Sequential**: one transaction at a time, verified once. Latency runs
//!   from transaction creation to inclusion.
//! - **Parallel**: each block's transactions are processed on the `rayon`
//!   pool and verified by every endorser. Latency is signing time plus the
//!   mean endorser verification time.
//!
//! One key pair per scheme is used for the whole simulation.

use std::time::{Duration, Instant};

use chrono::Utc;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use shared_crypto::{message_digest, SchemeId, SignatureScheme};
use tracing::{debug, info};

use crate::domain::{duration_to_ms, mean_duration, mean_trial, BenchError, Phase, TrialTiming};
use crate::harness::rfc3339_now;
use crate::ports::outbound::SchemeFactory;

/// Transactions per block.
pub const TX_PER_BLOCK: usize = 100;
/// Blocks per simulation.
pub const TOTAL_BLOCKS: usize = 5;
/// Endorsing peers per transaction in parallel mode.
pub const NUM_ENDORSERS: usize = 4;

const BLOCK_VERSION: u32 = 1;

/// Shape of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub tx_per_block: usize,
    pub total_blocks: usize,
    pub endorsers: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            tx_per_block: TX_PER_BLOCK,
            total_blocks: TOTAL_BLOCKS,
            endorsers: NUM_ENDORSERS,
        }
    }
}

impl SimulationParams {
    pub fn total_transactions(&self) -> usize {
        self.tx_per_block * self.total_blocks
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    Sequential,
    Parallel,
}

/// Throughput figures for one scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThroughputRecord {
    pub algorithm: String,
    pub tps: f64,
    pub avg_sign_time_ms: f64,
    pub avg_verify_time_ms: f64,
    pub avg_latency_ms: f64,
    pub avg_block_time_ms: f64,
    pub avg_block_size_bytes: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationInfo {
    pub timestamp: String,
    pub tx_per_block: usize,
    pub total_blocks: usize,
    pub total_transactions: usize,
    pub simulation_types: Vec<SimulationMode>,
}

/// Throughput results document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThroughputReport {
    pub simulation_info: SimulationInfo,
    pub sequential_results: Vec<ThroughputRecord>,
    pub parallel_results: Vec<ThroughputRecord>,
}

impl ThroughputReport {
    pub fn new(
        params: SimulationParams,
        sequential_results: Vec<ThroughputRecord>,
        parallel_results: Vec<ThroughputRecord>,
    ) -> Self {
        let mut simulation_types = Vec::new();
        if !sequential_results.is_empty() {
            simulation_types.push(SimulationMode::Sequential);
        }
        if !parallel_results.is_empty() {
            simulation_types.push(SimulationMode::Parallel);
        }

        Self {
            simulation_info: SimulationInfo {
                timestamp: rfc3339_now(),
                tx_per_block: params.tx_per_block,
                total_blocks: params.total_blocks,
                total_transactions: params.total_transactions(),
                simulation_types,
            },
            sequential_results,
            parallel_results,
        }
    }
}

// =============================================================================
// LEDGER PAYLOADS
// =============================================================================
// Fields are declared in key order so the JSON encoding is key-sorted.

#[derive(Clone, Debug, Serialize)]
struct TransactionPayload {
    amount: u32,
    from: String,
    to: String,
    txid: String,
}

impl TransactionPayload {
    fn random(block: usize, index: usize) -> Self {
        Self {
            amount: rand::thread_rng().gen_range(1..=100),
            from: format!("user{}", index % 10),
            to: format!("user{}", (index + 1) % 10),
            txid: format!("tx-{}-{}", block, index),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct SignedTransaction {
    amount: u32,
    from: String,
    public_key: String,
    signature: String,
    to: String,
    txid: String,
}

#[derive(Debug, Serialize)]
struct Block<'a> {
    height: usize,
    prev_hash: String,
    timestamp: i64,
    transactions: &'a [SignedTransaction],
    version: u32,
}

struct TxOutcome {
    tx: SignedTransaction,
    sign_time: Duration,
    verify_time: Duration,
    latency: Duration,
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, BenchError> {
    serde_json::to_vec(value).map_err(|e| BenchError::Encoding(e.to_string()))
}

// =============================================================================
// SIMULATOR
// =============================================================================

/// Runs the ledger workload against schemes from a factory.
pub struct LedgerSimulator<F: SchemeFactory> {
    factory: F,
    params: SimulationParams,
}

impl<F: SchemeFactory> LedgerSimulator<F> {
    pub fn new(factory: F, params: SimulationParams) -> Self {
        Self { factory, params }
    }

    pub fn params(&self) -> SimulationParams {
        self.params
    }

    /// Simulate every scheme in order.
    pub fn simulate_all(
        &self,
        schemes: &[SchemeId],
        mode: SimulationMode,
    ) -> Result<Vec<ThroughputRecord>, BenchError> {
        schemes.iter().map(|&id| self.simulate(id, mode)).collect()
    }

    /// Simulate `total_blocks` blocks for one scheme.
    ///
    /// # Errors
    /// A failed sign, a rejected verification or an encoding failure aborts
    /// the scheme's simulation.
    pub fn simulate(
        &self,
        id: SchemeId,
        mode: SimulationMode,
    ) -> Result<ThroughputRecord, BenchError> {
        info!(scheme = %id, ?mode, blocks = self.params.total_blocks, "Starting ledger simulation");

        let signer = self
            .factory
            .create(id)
            .map_err(BenchError::during(id, Phase::Throughput, None))?;
        let public_key_hex = hex::encode(
            signer
                .export_public_key()
                .map_err(BenchError::during(id, Phase::Throughput, None))?,
        );

        let total = self.params.total_transactions();
        let mut sign_times = Vec::with_capacity(total);
        let mut verify_times = Vec::with_capacity(total);
        let mut latencies = Vec::with_capacity(total);
        let mut block_times = Vec::with_capacity(self.params.total_blocks);
        let mut block_sizes = Vec::with_capacity(self.params.total_blocks);

        for height in 0..self.params.total_blocks {
            let block_start = Instant::now();

            let process = |index: usize| {
                self.process_transaction(id, signer.as_ref(), &public_key_hex, height, index, mode)
            };
            let outcomes = match mode {
                SimulationMode::Sequential => (0..self.params.tx_per_block)
                    .map(process)
                    .collect::<Result<Vec<_>, _>>()?,
                SimulationMode::Parallel => (0..self.params.tx_per_block)
                    .into_par_iter()
                    .map(process)
                    .collect::<Result<Vec<_>, _>>()?,
            };

            let mut transactions = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                sign_times.push(outcome.sign_time);
                verify_times.push(outcome.verify_time);
                latencies.push(outcome.latency);
                transactions.push(outcome.tx);
            }

            let block = Block {
                height,
                prev_hash: "00".repeat(32),
                timestamp: Utc::now().timestamp(),
                transactions: &transactions,
                version: BLOCK_VERSION,
            };
            let block_bytes = encode(&block)?;
            let block_hash = message_digest(&block_bytes);
            signer
                .sign(&block_hash)
                .map_err(BenchError::during(id, Phase::Throughput, None))?;

            let block_time = TrialTiming::from_raw(block_start.elapsed());
            debug!(
                scheme = %id,
                height,
                size_bytes = block_bytes.len(),
                block_ms = duration_to_ms(block_time.duration()),
                "Block sealed"
            );
            block_sizes.push(block_bytes.len());
            block_times.push(block_time);
        }

        let total_block_time: Duration = block_times.iter().map(TrialTiming::duration).sum();
        let record = ThroughputRecord {
            algorithm: id.name().to_string(),
            tps: if total_block_time.is_zero() {
                0.0
            } else {
                total as f64 / total_block_time.as_secs_f64()
            },
            avg_sign_time_ms: duration_to_ms(mean_duration(sign_times)),
            avg_verify_time_ms: duration_to_ms(mean_duration(verify_times)),
            avg_latency_ms: duration_to_ms(mean_duration(latencies)),
            avg_block_time_ms: duration_to_ms(mean_trial(&block_times)),
            avg_block_size_bytes: mean_size(&block_sizes),
        };

        info!(scheme = %id, ?mode, tps = record.tps, "Ledger simulation complete");
        Ok(record)
    }

    fn process_transaction(
        &self,
        id: SchemeId,
        signer: &dyn SignatureScheme,
        public_key_hex: &str,
        height: usize,
        index: usize,
        mode: SimulationMode,
    ) -> Result<TxOutcome, BenchError> {
        let tx_number = height * self.params.tx_per_block + index;
        let created = Instant::now();

        let payload = TransactionPayload::random(height, index);
        let bytes = encode(&payload)?;

        let (signed, sign_time) = TrialTiming::measure(|| signer.sign(&bytes));
        let signature =
            signed.map_err(BenchError::during(id, Phase::Throughput, Some(tx_number)))?;

        let endorsers = match mode {
            SimulationMode::Sequential => 1,
            SimulationMode::Parallel => self.params.endorsers.max(1),
        };
        let mut endorsements = Vec::with_capacity(endorsers);
        for _ in 0..endorsers {
            let (verified, timing) = TrialTiming::measure(|| signer.verify(&bytes, &signature));
            if !verified.map_err(BenchError::during(id, Phase::Throughput, Some(tx_number)))? {
                return Err(BenchError::VerificationRejected {
                    scheme: id,
                    trial: tx_number,
                });
            }
            endorsements.push(timing);
        }
        let verify_time = mean_trial(&endorsements);

        let latency = match mode {
            SimulationMode::Sequential => created.elapsed(),
            SimulationMode::Parallel => sign_time.duration() + verify_time,
        };

        Ok(TxOutcome {
            tx: SignedTransaction {
                amount: payload.amount,
                from: payload.from,
                public_key: public_key_hex.to_string(),
                signature: hex::encode(signature.as_bytes()),
                to: payload.to,
                txid: payload.txid,
            },
            sign_time: sign_time.duration(),
            verify_time,
            latency,
        })
    }
}

fn mean_size(sizes: &[usize]) -> f64 {
    if sizes.is_empty() {
        return 0.0;
    }
    sizes.iter().sum::<usize>() as f64 / sizes.len() as f64
}
