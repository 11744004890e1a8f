//! Fingerprint generation benchmark
//!
//! Purpose: keep single-hash generation and batch throughput visible.
//! Finishes within a minute locally and on CI.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glyphprint::app::batch::render_batch;
use glyphprint::app::composer::Plan;
use glyphprint::domain::tuning::tune_wave;
use glyphprint::{HashInput, Options, generate};

#[cfg(feature = "parallel")]
use glyphprint::app::batch::render_batch_parallel;

const HASH: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

fn batch_hashes(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let bytes: [u8; 32] = std::array::from_fn(|j| (i * 31 + j * 7) as u8);
            HashInput::from_bytes(bytes).to_hex()
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let options = Options::default();

    group.bench_function("svg_120", |b| {
        b.iter(|| generate(black_box(HASH), &options))
    });

    group.bench_function("svg_120_grid", |b| {
        let options = options.with_grid(true);
        b.iter(|| generate(black_box(HASH), &options))
    });

    group.bench_function("plan_only", |b| {
        let input = HashInput::parse(HASH).unwrap();
        b.iter(|| Plan::new(black_box(&input), 120.0))
    });

    group.bench_function("tune_wave", |b| {
        b.iter(|| tune_wave(black_box(7), 0.62, 45.36, 0.7))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let hashes = batch_hashes(256);
    let options = Options::default();

    group.bench_function("sequential_256", |b| {
        b.iter(|| render_batch(black_box(&hashes), &options))
    });

    #[cfg(feature = "parallel")]
    {
        group.bench_function("parallel_rayon_256", |b| {
            b.iter(|| render_batch_parallel(black_box(&hashes), &options))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_generate, bench_batch,
}

criterion_main!(benches);
