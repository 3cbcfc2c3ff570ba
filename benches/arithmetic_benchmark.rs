// ============================================================================
// Arithmetic Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Chains - the sum, subtraction and 16-step multiply workloads
// 2. Multiplier Comparison - schoolbook vs Karatsuba by operand size
// 3. Radix Codec - decimal parse and format of growing values
//
// Operands are the two 88-digit constants the chain workloads start from.
// ============================================================================

use bignum_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const SEED: &str =
    "9812029183092109833851794719827489214120981798579728720418092047123721837128371298739812";
const OPERAND: &str =
    "3230291580290704972938712983791287012085289572097481203112093812908390218093890218903120";

fn constants() -> (BigInt, BigInt) {
    (SEED.parse().unwrap(), OPERAND.parse().unwrap())
}

/// Deterministic operand of roughly `limbs` 64-bit limbs.
fn operand_of(limbs: usize) -> BigInt {
    let (_, operand) = constants();
    let mut value = operand.clone();
    while value.limb_len() < limbs {
        value = &value * &operand;
    }
    value
}

// ============================================================================
// Chain Benchmarks
// ============================================================================

fn benchmark_chains(c: &mut Criterion) {
    let (seed, operand) = constants();
    let engine = create_from_config(ArithmeticConfig::default()).unwrap();
    let mut group = c.benchmark_group("chains");

    let sum = Chain::new(Operation::Add, seed.clone(), operand.clone(), 1000);
    group.bench_function("sum_1000", |b| {
        b.iter(|| black_box(engine.run_chain(black_box(&sum))))
    });

    let sub = Chain::new(Operation::Sub, seed.clone(), operand.clone(), 1000);
    group.bench_function("sub_1000", |b| {
        b.iter(|| black_box(engine.run_chain(black_box(&sub))))
    });

    let mul = Chain::new(Operation::Mul, seed, operand, 16);
    group.bench_function("mul_16", |b| {
        b.iter(|| black_box(engine.run_chain(black_box(&mul))))
    });

    group.finish();
}

// ============================================================================
// Multiplier Comparison
// Same operands through both strategies
// ============================================================================

fn benchmark_multipliers(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplier");
    let schoolbook = SchoolbookMultiplier::new();
    let karatsuba = KaratsubaMultiplier::default();

    for limbs in [8usize, 32, 128, 512].iter() {
        let a = operand_of(*limbs);
        let b = -operand_of(*limbs + 3);

        group.bench_with_input(BenchmarkId::new("Schoolbook", limbs), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(schoolbook.multiply(a, b)))
        });

        group.bench_with_input(BenchmarkId::new("Karatsuba", limbs), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(karatsuba.multiply(a, b)))
        });
    }

    group.finish();
}

// ============================================================================
// Radix Codec Benchmarks
// ============================================================================

fn benchmark_radix_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("radix_codec");

    for limbs in [4usize, 64, 256].iter() {
        let value = operand_of(*limbs);
        let decimal = value.to_string();

        group.bench_with_input(BenchmarkId::new("parse", limbs), &decimal, |b, s| {
            b.iter(|| black_box(s.parse::<BigInt>().unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("format", limbs), &value, |b, v| {
            b.iter(|| black_box(v.to_string()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_chains,
    benchmark_multipliers,
    benchmark_radix_codec
);

criterion_main!(benches);
