//! String check benchmarks
//!
//! Measures the character-class scans, membership and duplicate detection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldcheck::{
    string_in, string_in_ignore_case, string_len_between, string_no_duplicate,
    string_no_duplicate_ignore_case, string_only_alphanumeric, string_only_ascii,
};

/// Benchmark character counting and class scans
fn bench_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_scan");
    let ascii = "the_quick_brown_fox_jumps_over_the_lazy_dog".repeat(4);
    let unicode = "ÜnïcödéÜnïcödéÜnïcödé";

    group.bench_function("len_between_ascii", |b| {
        b.iter(|| string_len_between("bio", black_box(&ascii), 1, 256))
    });

    group.bench_function("len_between_unicode", |b| {
        b.iter(|| string_len_between("bio", black_box(unicode), 1, 256))
    });

    group.bench_function("only_ascii_pass", |b| {
        b.iter(|| string_only_ascii("slug", black_box(&ascii)))
    });

    group.bench_function("only_alphanumeric_fail", |b| {
        b.iter(|| string_only_alphanumeric("user", black_box(&ascii)))
    });

    group.finish();
}

/// Benchmark membership checks
fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_in");
    let values: Vec<String> = (0..32).map(|i| format!("option-{i}")).collect();

    group.bench_function("case_sensitive_hit", |b| {
        b.iter(|| string_in("choice", black_box("option-31"), &values))
    });

    group.bench_function("ignore_case_miss", |b| {
        b.iter(|| string_in_ignore_case("choice", black_box("OPTION-99"), &values))
    });

    group.finish();
}

/// Benchmark duplicate detection over growing inputs
fn bench_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_no_duplicate");

    for size in [8usize, 64, 512] {
        let tags: Vec<String> = (0..size).map(|i| format!("tag{i}")).collect();

        group.bench_with_input(BenchmarkId::new("distinct", size), &tags, |b, tags| {
            b.iter(|| string_no_duplicate("tags", black_box(tags)))
        });

        group.bench_with_input(BenchmarkId::new("ignore_case", size), &tags, |b, tags| {
            b.iter(|| string_no_duplicate_ignore_case("tags", black_box(tags)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scans, bench_membership, bench_duplicates);
criterion_main!(benches);
