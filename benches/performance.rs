// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for scales
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale derivation for a single root/mode
//! - Deriving every root/mode combination
//! - Reverse lookup with different worker counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scales::{circle_of_fifths, derive_scale, modes, NoteSet, Resolver};

/// Benchmark building a single scale
fn bench_derive_scale(c: &mut Criterion) {
    c.bench_function("derive_c_major", |b| {
        b.iter(|| derive_scale(black_box("C"), black_box("Major")))
    });

    c.bench_function("derive_harmonic_minor_double_sharp", |b| {
        b.iter(|| derive_scale(black_box("G#"), black_box("Harmonic Minor")))
    });
}

/// Benchmark building every supported scale
fn bench_derive_all(c: &mut Criterion) {
    c.bench_function("derive_all_scales", |b| {
        b.iter(|| {
            let mut count = 0;
            for &root in circle_of_fifths() {
                for mode in modes() {
                    if derive_scale(root, mode.name()).is_ok() {
                        count += 1;
                    }
                }
            }
            black_box(count)
        })
    });
}

/// Benchmark reverse lookup, sequential vs. pooled
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let notes = NoteSet::new(&["C", "D", "E", "F", "G", "A", "B"]).unwrap();

    for workers in [1, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::new("workers", workers), workers, |b, &workers| {
            let resolver = Resolver::new(workers);
            b.iter(|| black_box(resolver.resolve(&notes)))
        });
    }

    group.finish();
}

/// Benchmark note set validation
fn bench_note_set(c: &mut Criterion) {
    let notes = ["Bb", "C", "D", "Eb", "F", "G", "A", "Bb"];
    c.bench_function("note_set_new", |b| {
        b.iter(|| NoteSet::new(black_box(&notes)))
    });
}

criterion_group!(
    benches,
    bench_derive_scale,
    bench_derive_all,
    bench_resolve,
    bench_note_set,
);
criterion_main!(benches);
