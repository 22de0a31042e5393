//! Benchmarks for caesarcrypt operations.
//!
//! Measures normalization and cipher throughput, chi-square scoring of all
//! 26 offsets, and full recovery across growing ciphertext lengths.

use caesarcrypt::{cipher, normalize, score_all, CaesarCipher, Language, ENGLISH};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Sample text repeated to build longer inputs.
const BENCH_TEXT: &str = "It was the best of times, it was the worst of times, \
    it was the age of wisdom, it was the age of foolishness. ";

/// Offset used for every ciphered input.
const BENCH_OFFSET: i64 = 13;

fn sample(repeats: usize) -> String {
    BENCH_TEXT.repeat(repeats)
}

/// Benchmarks `normalize()` on raw mixed-case, punctuated text.
fn bench_normalize(c: &mut Criterion) {
    let raw = sample(64);
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("mixed_case", |b| {
        b.iter(|| normalize(black_box(&raw)));
    });
    group.finish();
}

/// Benchmarks `cipher()` on a normalized message.
fn bench_cipher(c: &mut Criterion) {
    let message = normalize(sample(64));
    let mut group = c.benchmark_group("cipher");
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("offset_13", |b| {
        b.iter(|| cipher(black_box(&message), black_box(BENCH_OFFSET)));
    });
    group.finish();
}

/// Benchmarks `score_all()` across ciphertext lengths.
///
/// Scoring is linear in the text length for the histogram and constant
/// for the 26x26 comparison, so the curve should flatten out per byte.
fn bench_score_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_all");
    for repeats in [1usize, 16, 256] {
        let ciphered = cipher(&normalize(sample(repeats)), BENCH_OFFSET);
        group.throughput(Throughput::Bytes(ciphered.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(ciphered.len()),
            &ciphered,
            |b, ciphered| {
                b.iter(|| score_all(black_box(ciphered), &ENGLISH));
            },
        );
    }
    group.finish();
}

/// Benchmarks end-to-end `recover()` per bundled language.
fn bench_recover(c: &mut Criterion) {
    let ciphered = cipher(&normalize(sample(16)), BENCH_OFFSET);
    let mut group = c.benchmark_group("recover");
    group.throughput(Throughput::Bytes(ciphered.len() as u64));
    for language in [Language::English, Language::German] {
        let caesar = CaesarCipher::for_language(language);
        group.bench_with_input(
            BenchmarkId::from_parameter(language),
            &ciphered,
            |b, ciphered| {
                b.iter(|| caesar.recover(black_box(ciphered.as_str())).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_cipher,
    bench_score_all,
    bench_recover,
);
criterion_main!(benches);
