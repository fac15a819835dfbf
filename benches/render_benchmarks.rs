//! Render benchmarks for rechroma
//!
//! Run with: cargo bench --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use image::{Rgb, RgbImage};

use rechroma::{grid_layout, Figure};

fn test_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    })
}

/// Benchmark solo figure composition
fn bench_solo_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("solo_figure");
    let image = test_image(640, 480);

    group.throughput(Throughput::Elements(1));
    group.bench_function("640x480_into_1280x720", |b| {
        b.iter(|| Figure::solo(black_box(&image), (1280, 720), None).unwrap())
    });

    group.finish();
}

/// Benchmark comparison figure composition
fn bench_comparison_figure(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison_figure");
    let original = test_image(640, 480);
    let result = test_image(640, 480);

    group.throughput(Throughput::Elements(1));
    group.bench_function("two_640x480_into_1280x720", |b| {
        b.iter(|| {
            Figure::comparison(
                black_box(&original),
                black_box(&result),
                (1280, 720),
                Some("render factor: 35"),
            )
            .unwrap()
        })
    });

    group.finish();
}

/// Benchmark grid layout policy
fn bench_grid_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_layout");

    group.throughput(Throughput::Elements(1));
    group.bench_function("layout", |b| {
        b.iter(|| grid_layout(black_box(17), black_box(4)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_solo_figure,
    bench_comparison_figure,
    bench_grid_layout
);

criterion_main!(benches);
