//! Performance benchmarks for splitting and chunking
//!
//! Run with: cargo bench --bench split_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use splitkit_core::{chunk_by_powers_of_two, chunk_every, on, one_of, words_by};
use std::hint::black_box;

/// Generate comma separated text of specified size with occasional empty fields
fn generate_text(size: usize) -> Vec<char> {
    let base = "alpha,beta,,gamma delta,epsilon,,,zeta eta theta,";
    let repeat_count = size / base.len() + 1;

    base.repeat(repeat_count).chars().take(size).collect()
}

/// Benchmark delimiter kinds across input sizes
fn bench_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiters");

    let element = one_of(vec![',']);
    let sublist = on(vec![',', ',']);

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("one_of", size), &text, |b, text| {
            b.iter(|| element.split(black_box(text)).len());
        });
        group.bench_with_input(BenchmarkId::new("on", size), &text, |b, text| {
            b.iter(|| sublist.split(black_box(text)).len());
        });
        group.bench_with_input(BenchmarkId::new("words_by", size), &text, |b, text| {
            b.iter(|| words_by(|c| *c == ' ' || *c == ',', black_box(text)).len());
        });
    }

    group.finish();
}

/// Benchmark each pipeline configuration on the same input
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");
    let text = generate_text(102_400);
    let base = one_of(vec![',']);

    let configs = [
        ("drop", base.clone()),
        ("keep", base.clone().keep_delims()),
        ("keep_left", base.clone().keep_delims_left()),
        ("keep_right", base.clone().keep_delims_right()),
        ("condense", base.clone().condense()),
        ("drop_blanks", base.drop_blanks()),
    ];

    group.throughput(Throughput::Elements(text.len() as u64));
    for (name, splitter) in &configs {
        group.bench_with_input(BenchmarkId::new("split", name), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)).len());
        });
    }

    group.finish();
}

/// Benchmark size-based chunking
fn bench_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");
    let data: Vec<u32> = (0..1_000_000).collect();

    group.throughput(Throughput::Elements(data.len() as u64));
    group.bench_function("chunk_every_64", |b| {
        b.iter(|| chunk_every(64, black_box(&data)).len());
    });
    group.bench_function("powers_of_two", |b| {
        b.iter(|| chunk_by_powers_of_two(black_box(&data)).len());
    });

    group.finish();
}

/// Benchmark string splitting with offset tracking
fn bench_text(c: &mut Criterion) {
    let text: String = generate_text(102_400).into_iter().collect();
    let splitter = one_of(vec![',', ' ']).drop_blanks();

    c.bench_function("split_str", |b| {
        b.iter(|| splitter.split_str(black_box(&text)).len());
    });
}

criterion_group!(
    benches,
    bench_delimiters,
    bench_policies,
    bench_chunking,
    bench_text
);
criterion_main!(benches);
