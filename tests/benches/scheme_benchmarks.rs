//! # Signature Scheme Benchmarks
//!
//! Criterion baselines for the raw scheme operations, independent of the
//! harness's isolation protocol.
//!
//! | Group | Operation |
//! |-------|-----------|
//! | `keygen` | fresh instance construction |
//! | `sign` | sign a 256-byte message |
//! | `verify` | verify a 256-byte message |

use std::time::Duration;

use bench_harness::{BackendFactory, BenchmarkConfig, BenchmarkHarness};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shared_crypto::SchemeId;

const MESSAGE: [u8; 256] = [0x42; 256];

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("keygen");
    group.measurement_time(Duration::from_secs(5));

    for id in SchemeId::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(id), &id, |b, &id| {
            b.iter(|| black_box(id.instantiate().unwrap()))
        });
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("sign");

    for id in SchemeId::ALL {
        let scheme = id.instantiate().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(id), &MESSAGE, |b, message| {
            b.iter(|| black_box(scheme.sign(message).unwrap()))
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");

    for id in SchemeId::ALL {
        let scheme = id.instantiate().unwrap();
        let signature = scheme.sign(&MESSAGE).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(id), &MESSAGE, |b, message| {
            b.iter(|| black_box(scheme.verify(message, &signature).unwrap()))
        });
    }

    group.finish();
}

fn bench_harness_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("harness");
    group.sample_size(10);

    let config = BenchmarkConfig::new("criterion", 5, vec![SchemeId::Ecdsa]).unwrap();
    let harness = BenchmarkHarness::new(BackendFactory, config);

    group.bench_function("ecdsa_run_5_iterations", |b| {
        b.iter(|| black_box(harness.run(SchemeId::Ecdsa).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify, bench_harness_run);
criterion_main!(benches);
