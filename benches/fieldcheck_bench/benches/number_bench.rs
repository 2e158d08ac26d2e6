//! Numeric check benchmarks
//!
//! Measures the passing and failing paths of the numeric checks. The failing path
//! includes building and rendering the error.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldcheck::{number_between, number_format, number_format_with, number_min, DecimalFormat};

/// Benchmark range checks across widths
fn bench_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_between");

    group.bench_function("u8_pass", |b| {
        b.iter(|| number_between("age", black_box(42u8), 18, 120))
    });

    group.bench_function("i64_pass", |b| {
        b.iter(|| number_between("offset", black_box(-7i64), -100, 100))
    });

    group.bench_function("f64_fail", |b| {
        b.iter(|| number_between("ratio", black_box(1.5f64), 0.0, 1.0))
    });

    group.finish();
}

/// Benchmark the single-bound check on pass and fail
fn bench_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_min");

    for value in [10u32, 30u32] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &value| {
            b.iter(|| number_min("count", black_box(value), 20))
        });
    }

    group.finish();
}

/// Benchmark decimal-place checks, with and without parsing the specification
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_format");

    group.bench_function("parse_each_call", |b| {
        b.iter(|| number_format("price", black_box(19.99f64), "0,2"))
    });

    let format = DecimalFormat::new(0, 2);
    group.bench_function("preparsed", |b| {
        b.iter(|| number_format_with("price", black_box(19.99f64), format))
    });

    group.bench_function("no_decimal_fail", |b| {
        b.iter(|| number_format_with("qty", black_box(2.5f64), DecimalFormat::integer()))
    });

    group.finish();
}

criterion_group!(benches, bench_between, bench_min, bench_format);
criterion_main!(benches);
