use criterion::{Criterion, criterion_group, criterion_main};
use piechart_rs::core::angle::{TWELVE_O_CLOCK_OFFSET_DEG, angle_of, normalize_angle};
use piechart_rs::core::{Arc, ArcRegistry, ChartGeometry, Point, Viewport, WrapPolicy, hit_test};
use piechart_rs::render::{Color, NullRenderer};
use piechart_rs::{PieChartConfig, PieChartEngine};
use std::hint::black_box;

fn bench_normalize_angle(c: &mut Criterion) {
    c.bench_function("normalize_angle", |b| {
        b.iter(|| normalize_angle(black_box(-12_345.678)))
    });
}

fn bench_angle_of(c: &mut Criterion) {
    let center = Point::new(200.0, 200.0);
    let point = Point::new(243.7, 158.2);

    c.bench_function("angle_of", |b| {
        b.iter(|| {
            angle_of(
                black_box(center),
                black_box(point),
                black_box(TWELVE_O_CLOCK_OFFSET_DEG),
            )
        })
    });
}

fn bench_hit_test_scan_12_arcs(c: &mut Criterion) {
    let mut registry = ArcRegistry::new();
    for i in 0..12 {
        let arc = Arc::new(
            format!("arc-{i}"),
            f64::from(i) * 30.0,
            30.0,
            &[Color::rgb(0.2, 0.4, 0.6), Color::rgb(0.6, 0.4, 0.2)],
            32.0,
        )
        .expect("valid generated arc");
        registry.push(arc);
    }
    let geometry = ChartGeometry::new(Point::new(0.0, 0.0), 90.0, 32.0);
    // Lands in the last arc, so the scan walks the whole registry.
    let screen_rad = (355.0f64 + TWELVE_O_CLOCK_OFFSET_DEG).to_radians();
    let point = Point::new(90.0 * screen_rad.cos(), 90.0 * screen_rad.sin());

    c.bench_function("hit_test_scan_12_arcs", |b| {
        b.iter(|| {
            hit_test(
                black_box(&registry),
                black_box(geometry),
                black_box(point),
                black_box(TWELVE_O_CLOCK_OFFSET_DEG),
                black_box(WrapPolicy::FullRange),
            )
        })
    });
}

fn bench_render_frame_build_12_arcs(c: &mut Criterion) {
    let renderer = NullRenderer::default();
    let config = PieChartConfig::new(Viewport::new(1080, 1080));
    let mut engine = PieChartEngine::new(renderer, config).expect("engine init");
    for i in 0..12 {
        engine
            .add_arc(
                format!("arc-{i}"),
                f64::from(i) * 30.0,
                30.0,
                &[Color::rgb(0.2, 0.4, 0.6), Color::rgb(0.6, 0.4, 0.2)],
            )
            .expect("valid generated arc");
    }

    c.bench_function("render_frame_build_12_arcs", |b| {
        b.iter(|| engine.build_render_frame())
    });
}

criterion_group!(
    benches,
    bench_normalize_angle,
    bench_angle_of,
    bench_hit_test_scan_12_arcs,
    bench_render_frame_build_12_arcs
);
criterion_main!(benches);
