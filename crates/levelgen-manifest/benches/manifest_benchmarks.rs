//! Manifest generation benchmarks.
//!
//! Measures the three stages of a generator run separately so regressions
//! can be traced to recognition, scanning, or serialization:
//!
//! - file name recognition over a mixed list of names,
//! - directory scan + sort at several directory sizes,
//! - compact vs. pretty serialization of a large manifest.
//!
//! Run with: `cargo bench --bench manifest_benchmarks`

use std::fs::File;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use levelgen_manifest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Names for `count` levels plus one stray file per ten levels and the palette.
fn mixed_names(count: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(count + count / 10 + 1);
    for i in 0..count {
        names.push(format!("{i}.png"));
        if i % 10 == 0 {
            names.push(format!("notes_{i}.txt"));
        }
    }
    names.push(PALETTE_FILE_NAME.to_owned());
    names
}

fn level_ids(count: usize) -> Vec<LevelId> {
    (0..count)
        .filter_map(|i| LevelId::from_file_name(&format!("{i}.png")))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_recognition(c: &mut Criterion) {
    let names = mixed_names(1000);

    c.bench_function("recognize_1k_names", |b| {
        b.iter(|| {
            let matched = names
                .iter()
                .filter_map(|n| LevelId::from_file_name(black_box(n)))
                .count();
            black_box(matched);
        });
    });
}

fn bench_scan_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_level_dir");

    for count in [100usize, 1_000, 10_000] {
        let dir = tempfile::tempdir().unwrap();
        for name in mixed_names(count) {
            File::create(dir.path().join(name)).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &_count| {
            b.iter(|| {
                let ids = scan_level_ids(dir.path(), EntryOrder::Numeric).unwrap();
                black_box(ids.len());
            });
        });
    }

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let manifest = Manifest::from_level_ids(&level_ids(10_000), "assets/levels", "src/levels");

    c.bench_function("serialize_10k_compact", |b| {
        b.iter(|| {
            let text = manifest.to_json_string(ManifestLayout::Compact).unwrap();
            black_box(text.len());
        });
    });

    c.bench_function("serialize_10k_pretty", |b| {
        b.iter(|| {
            let text = manifest.to_json_string(ManifestLayout::Pretty).unwrap();
            black_box(text.len());
        });
    });
}

// ---------------------------------------------------------------------------
// Criterion groups and main
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_recognition,
    bench_scan_scaling,
    bench_serialization,
);
criterion_main!(benches);
