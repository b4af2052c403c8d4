//! Performance measurement for end-to-end mosaic assembly

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use photomosaic::library::{LibraryIndex, TileStrategy};
use photomosaic::mosaic::assemble;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

/// Write a small library of uniform-color images for assembly runs
fn prepare_library(dir: &Path) -> bool {
    let colors = [
        Rgb([0, 0, 0]),
        Rgb([255, 255, 255]),
        Rgb([200, 40, 30]),
        Rgb([20, 190, 60]),
        Rgb([10, 50, 220]),
        Rgb([220, 210, 40]),
        Rgb([130, 60, 200]),
        Rgb([128, 128, 128]),
    ];

    colors.iter().enumerate().all(|(i, color)| {
        RgbImage::from_pixel(32, 32, *color)
            .save(dir.join(format!("tile_{i}.png")))
            .is_ok()
    })
}

/// Measures assembly of a 200x200 source under both tile strategies
fn bench_assemble(c: &mut Criterion) {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    if !prepare_library(temp_dir.path()) {
        return;
    }

    let source = RgbImage::from_fn(200, 200, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });

    let mut group = c.benchmark_group("assemble");

    for (name, strategy) in [
        ("load_on_demand", TileStrategy::LoadOnDemand),
        ("cache_thumbnails", TileStrategy::CacheThumbnails),
    ] {
        let Ok(library) = LibraryIndex::build(temp_dir.path(), strategy, 16, None) else {
            group.finish();
            return;
        };

        group.bench_function(name, |b| {
            b.iter(|| assemble(black_box(&source), &library, 10, None));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
