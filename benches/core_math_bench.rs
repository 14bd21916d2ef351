use std::hint::black_box;
use std::num::NonZeroU32;

use criterion::{Criterion, criterion_group, criterion_main};
use sentiplot_rs::api::{RenderOptions, build_scatter_frame};
use sentiplot_rs::core::{AxisScale, ScatterPoint, bin_series};
use sentiplot_rs::render::SurfaceSpec;

fn bench_axis_scale_round_trip(c: &mut Criterion) {
    let scale = AxisScale::new(-1.05, 1.05, 60.0, 620.0).expect("valid scale");

    c.bench_function("axis_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(black_box(0.437)).expect("to pixel");
            let _ = scale.pixel_to_value(px).expect("from pixel");
        })
    });
}

fn bench_binning_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| f64::from(i % 200) / 100.0 - 1.0)
        .collect();
    let bins = NonZeroU32::new(24).expect("non-zero");

    c.bench_function("bin_series_10k", |b| {
        b.iter(|| {
            let _ = bin_series(black_box(&values), -1.0, 1.0, black_box(bins))
                .expect("binning should succeed");
        })
    });
}

fn bench_scatter_frame_10k(c: &mut Criterion) {
    let surface = SurfaceSpec::with_default_density(1920.0, 1080.0)
        .prepare()
        .expect("prepare");
    let points: Vec<ScatterPoint> = (0..10_000)
        .map(|i| {
            let x = f64::from(i % 210) / 100.0 - 1.05;
            let y = f64::from(i % 997);
            ScatterPoint::new(x, y)
        })
        .collect();
    let options = RenderOptions::default();

    c.bench_function("scatter_frame_10k", |b| {
        b.iter(|| {
            let _ = build_scatter_frame(black_box(surface), black_box(&points), &options)
                .expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_axis_scale_round_trip,
    bench_binning_10k,
    bench_scatter_frame_10k
);
criterion_main!(benches);
