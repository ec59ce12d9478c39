// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Kernels - Isolates the width-specialized power-of-10 kernels
// 2. Rescaling - shift dispatch through the value type
// 3. Operators - Binary operations with matched and mismatched scales
// 4. Formatting - Decimal string rendering
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_point::prelude::*;
use fixed_point::scaling::{Power10Width128, Power10Width32, Power10Width64};

// ============================================================================
// Raw Kernel Benchmarks
// Isolates just the divide/multiply switch per width
// ============================================================================

fn benchmark_divide_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide_power10");

    group.bench_function(BenchmarkId::new("32bit", "exp 0..=9"), |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for exp10 in 0..=9 {
                acc = acc.wrapping_add(black_box(1_987_654_321i32).divide_power10_32bit(exp10));
            }
            acc
        });
    });

    group.bench_function(BenchmarkId::new("64bit", "exp 0..=19"), |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for exp10 in 0..=19 {
                acc = acc.wrapping_add(
                    black_box(8_765_432_109_876_543_210i64).divide_power10_64bit(exp10),
                );
            }
            acc
        });
    });

    group.bench_function(BenchmarkId::new("128bit", "exp 0..=38"), |b| {
        let value = 87_654_321_098_765_432_109_876_543_210_987i128;
        b.iter(|| {
            let mut acc = 0i128;
            for exp10 in 0..=38 {
                acc = acc.wrapping_add(black_box(value).divide_power10_128bit(exp10));
            }
            acc
        });
    });

    group.finish();
}

fn benchmark_multiply_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_power10");

    group.bench_function(BenchmarkId::new("32bit", "exp 0..=9"), |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for exp10 in 0..=9 {
                acc = acc.wrapping_add(black_box(17i32).multiply_power10_32bit(exp10));
            }
            acc
        });
    });

    group.bench_function(BenchmarkId::new("64bit", "exp 0..=19"), |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for exp10 in 0..=19 {
                acc = acc.wrapping_add(black_box(17i64).multiply_power10_64bit(exp10));
            }
            acc
        });
    });

    group.bench_function(BenchmarkId::new("128bit", "exp 0..=38"), |b| {
        b.iter(|| {
            let mut acc = 0i128;
            for exp10 in 0..=38 {
                acc = acc.wrapping_add(black_box(17i128).multiply_power10_128bit(exp10));
            }
            acc
        });
    });

    group.finish();
}

// ============================================================================
// Rescaling Benchmarks
// ============================================================================

fn benchmark_rescaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescaled");

    let value = Decimal64::from_scaled(ScaledInteger::new(123_456_789_012, Scale(-6)));

    group.bench_function("finer", |b| {
        b.iter(|| black_box(value).rescaled(Scale(-9)));
    });
    group.bench_function("coarser", |b| {
        b.iter(|| black_box(value).rescaled(Scale(-2)));
    });
    group.bench_function("identity", |b| {
        b.iter(|| black_box(value).rescaled(Scale(-6)));
    });

    group.finish();
}

// ============================================================================
// Operator Benchmarks
// Mismatched scales pay an extra rescale on one operand
// ============================================================================

fn benchmark_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    let matched_lhs = Decimal64::from_scaled(ScaledInteger::new(150_000, Scale(-2)));
    let matched_rhs = Decimal64::from_scaled(ScaledInteger::new(250_000, Scale(-2)));
    let coarse_rhs = Decimal64::from_scaled(ScaledInteger::new(25_000, Scale(-1)));

    group.bench_function(BenchmarkId::new("add", "matched scales"), |b| {
        b.iter(|| black_box(matched_lhs) + black_box(matched_rhs));
    });
    group.bench_function(BenchmarkId::new("add", "mismatched scales"), |b| {
        b.iter(|| black_box(matched_lhs) + black_box(coarse_rhs));
    });
    group.bench_function(BenchmarkId::new("mul", "matched scales"), |b| {
        b.iter(|| black_box(matched_lhs) * black_box(matched_rhs));
    });
    group.bench_function(BenchmarkId::new("div", "matched scales"), |b| {
        b.iter(|| black_box(matched_lhs) / black_box(matched_rhs));
    });
    group.bench_function(BenchmarkId::new("cmp", "mismatched scales"), |b| {
        b.iter(|| black_box(matched_lhs) < black_box(coarse_rhs));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    let fractional = Decimal64::from_scaled(ScaledInteger::new(123_456_789, Scale(-4)));
    let wide = Decimal128::from_scaled(ScaledInteger::new(10i128.pow(36), Scale(-38)));

    group.bench_function("64bit fractional", |b| {
        b.iter(|| black_box(fractional).to_string());
    });
    group.bench_function("128bit full precision", |b| {
        b.iter(|| black_box(wide).to_string());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_divide_kernels,
    benchmark_multiply_kernels,
    benchmark_rescaled,
    benchmark_operators,
    benchmark_formatting
);
criterion_main!(benches);
