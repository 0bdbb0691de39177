//! Benchmarks for sampling and building curves of various sizes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lifecurve::{Curve, registry};

/// A zig-zag curve over `[0, 1]` with `segments` cubic segments.
fn zigzag(segments: usize) -> Curve {
    let step = 1.0 / segments as f32;
    let mut at = Curve::builder().anchor_point((0.0, 0.0));
    for i in 1..=segments {
        let x = i as f32 * step;
        let y = (i % 2) as f32;
        at = at
            .control_point1((x - step * 0.66, 1.0 - y))
            .control_point2((x - step * 0.33, y))
            .anchor_point((x, y));
    }
    at.build()
}

/// Benchmark `value` at mid-life for every preset.
fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("preset_value");

    for entry in registry::REGISTRY {
        let curve = (entry.build)();
        group.bench_function(entry.key, |b| b.iter(|| curve.value(black_box(0.5))));
    }

    group.finish();
}

/// Benchmark how sampling scales with the number of segments.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for segments in [1, 4, 16, 64, 256] {
        let curve = zigzag(segments);
        group.bench_function(BenchmarkId::new("value", segments), |b| {
            b.iter(|| curve.value(black_box(0.73)))
        });
    }

    group.finish();
}

/// Benchmark a whole particle frame: one sample per particle.
fn bench_frame(c: &mut Criterion) {
    let curve = zigzag(8);
    let lives: Vec<f32> = (0..10_000).map(|i| i as f32 / 10_000.0).collect();

    c.bench_function("frame_10k_particles", |b| {
        b.iter(|| lives.iter().map(|&t| curve.value(black_box(t))).sum::<f32>())
    });
}

/// Benchmark building curves through the builder.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for segments in [4, 64] {
        group.bench_function(BenchmarkId::new("zigzag", segments), |b| {
            b.iter(|| zigzag(black_box(segments)))
        });
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_presets, bench_scaling, bench_frame, bench_build);
}

pub use bench_defs::benches;
criterion_main!(benches);
