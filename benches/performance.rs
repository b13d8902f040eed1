// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for SPLICE
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Decode throughput by track count
//! - Encode throughput by track count
//! - Pattern rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use splice::codec;
use splice::{Pattern, Steps, Track};

fn build_pattern(tracks: usize) -> Pattern {
    let mut pattern = Pattern::with_version("0.808-alpha", 120.0);
    for i in 0..tracks {
        let steps = Steps::from_indices(&[i % 16, (i + 4) % 16, (i + 8) % 16]);
        pattern.add_track(Track::new(i as i32, format!("track-{}", i)).with_steps(steps));
    }
    pattern
}

/// Benchmark decoding patterns of increasing size
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [1, 16, 256].iter() {
        let bytes = codec::encode_to_vec(&build_pattern(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("tracks", size), &bytes, |b, bytes| {
            b.iter(|| black_box(codec::decode(black_box(bytes.as_slice())).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark encoding patterns of increasing size
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [1, 16, 256].iter() {
        let pattern = build_pattern(*size);
        group.bench_with_input(BenchmarkId::new("tracks", size), &pattern, |b, pattern| {
            b.iter(|| black_box(codec::encode_to_vec(black_box(pattern)).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark text rendering
fn bench_render(c: &mut Criterion) {
    let steps = Steps::from_indices(&[0, 4, 8, 12]);
    c.bench_function("steps_render", |b| b.iter(|| black_box(black_box(&steps).render())));

    let pattern = build_pattern(16);
    c.bench_function("pattern_render", |b| b.iter(|| black_box(black_box(&pattern).render())));
}

criterion_group!(benches, bench_decode, bench_encode, bench_render);

criterion_main!(benches);
