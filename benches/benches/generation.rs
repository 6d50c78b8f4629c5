//! Round-Constant Generation Criterion Benchmark
//!
//! Cost of each layer: raw bits, words, field elements, whole tables.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use poseidon2_rc::{
    build_table, build_table_with, build_tables, GrainLfsr, PermutationConfig, Prime,
    SamplingMode,
};
use rand::prelude::*;
use std::hint::black_box;

const GOLDILOCKS: &str = "0xFFFFFFFF00000001";

fn random_lfsr() -> GrainLfsr {
    let mut seed = [0u8; 32];
    rand::rng().fill(&mut seed[..]);
    GrainLfsr::from_seed(&seed)
}

// =============================================================================
// BENCHMARK 1: BIT STREAM
// =============================================================================

/// Raw LFSR stepping: single bits and packed 64-bit words.
fn bench_bit_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Bit-Stream");

    group.throughput(Throughput::Elements(1));
    group.bench_function("next_bit", |b| {
        let mut lfsr = random_lfsr();
        b.iter(|| black_box(lfsr.next_bit()));
    });

    group.throughput(Throughput::Bytes(8));
    group.bench_function("next_u64", |b| {
        let mut lfsr = random_lfsr();
        b.iter(|| black_box(lfsr.next_u64()));
    });

    group.bench_function("seed_sha256", |b| {
        b.iter(|| GrainLfsr::from_seed(black_box(b"Poseidon2|goldilocks|t=12|p=0xFFFFFFFF00000001")));
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 2: FIELD SAMPLING
// =============================================================================

/// Reduction vs rejection for a 64-bit prime and a 31-bit prime.
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Field-Sampling");
    group.throughput(Throughput::Elements(1));

    for literal in [GOLDILOCKS, "2013265921"] {
        let prime = Prime::parse(literal).unwrap();
        for mode in [SamplingMode::Reduction, SamplingMode::Rejection] {
            group.bench_with_input(
                BenchmarkId::new(mode.name(), literal),
                &prime,
                |b, prime| {
                    let mut lfsr = random_lfsr();
                    b.iter(|| black_box(mode.sample(&mut lfsr, prime)));
                },
            );
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: TABLES
// =============================================================================

/// Whole tables at common widths.
fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Tables");

    for t in [4usize, 8, 12, 16, 24] {
        let config =
            PermutationConfig::new("goldilocks", GOLDILOCKS, t, 8, 22, format!("t{t}")).unwrap();
        group.throughput(Throughput::Elements((config.total_rounds().unwrap() * t) as u64));

        group.bench_with_input(BenchmarkId::new("reduction", t), &config, |b, config| {
            b.iter(|| build_table(black_box(config)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("rejection", t), &config, |b, config| {
            b.iter(|| build_table_with(black_box(config), SamplingMode::Rejection).unwrap());
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCHES
// =============================================================================

/// Many independent configs: `build_tables` vs a sequential loop.
fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batches");

    let configs: Vec<PermutationConfig> = (1..=32)
        .map(|t| {
            PermutationConfig::new("goldilocks", GOLDILOCKS, t, 8, 22, format!("t{t}")).unwrap()
        })
        .collect();

    group.bench_function("build_tables", |b| {
        b.iter(|| build_tables(black_box(&configs)).unwrap());
    });
    group.bench_function("sequential", |b| {
        b.iter(|| {
            configs
                .iter()
                .map(|config| build_table(black_box(config)).unwrap())
                .collect::<Vec<_>>()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_bit_stream,
    bench_sampling,
    bench_tables,
    bench_batches
);
criterion_main!(benches);
