// Copyright (c) 2025-2026 the dtedpack contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for dtedpack.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dtedpack::PackageConfig;
use dtedpack::packer::{build_package, parse_tile_name};
use dtedpack::utils::progress::ProgressManager;

/// Benchmark tile file name parsing.
fn bench_parse_tile_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_tile_name");

    for name in ["n47_e006_1arc_v3.dt2", "readme.dt2"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, name| {
            b.iter(|| std::hint::black_box(parse_tile_name(name)))
        });
    }

    group.finish();
}

/// Benchmark a full package build, with and without an archive.
fn bench_build_package(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_package");
    group.sample_size(10);

    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let source = temp_dir.path().join("tiles");
    std::fs::create_dir(&source).expect("Failed to create source directory");

    let tile = vec![0u8; 64 * 1024];
    for lat in 40..50 {
        for lon in 0..10 {
            let name = format!("n{lat}_e{lon:03}_1arc_v3.dt2");
            std::fs::write(source.join(name), &tile).expect("Failed to write tile");
        }
    }

    for (label, config) in [
        ("directory", PackageConfig::new(&source)),
        ("archive", PackageConfig::new(&source).with_archive(None)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| {
                build_package(&config, &mut ProgressManager::hidden())
                    .expect("Failed to build package")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_tile_name, bench_build_package);
criterion_main!(benches);
