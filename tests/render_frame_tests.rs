use approx::assert_relative_eq;
use piechart_rs::core::{Rect, Viewport};
use piechart_rs::render::{ArcPrimitive, Color, NullRenderer, SweepGradientSpec};
use piechart_rs::{ChartError, PieChartConfig, PieChartEngine};

const STOPS: [Color; 2] = [Color::rgb(0.9, 0.2, 0.2), Color::rgb(0.2, 0.2, 0.9)];

fn build_engine() -> PieChartEngine<NullRenderer> {
    let renderer = NullRenderer::default();
    let config = PieChartConfig::new(Viewport::new(400, 400));
    PieChartEngine::new(renderer, config).expect("engine init")
}

#[test]
fn default_radius_is_derived_from_viewport_height() {
    let engine = build_engine();

    // 400 × 0.15 = 60, so the bounding square has side 120 centered on
    // (200, 200).
    let frame = engine.build_render_frame();
    let rect = frame.base_ring.rect;
    assert_relative_eq!(rect.left, 140.0, epsilon = 1e-9);
    assert_relative_eq!(rect.top, 140.0, epsilon = 1e-9);
    assert_relative_eq!(rect.right, 260.0, epsilon = 1e-9);
    assert_relative_eq!(rect.bottom, 260.0, epsilon = 1e-9);
}

#[test]
fn explicit_radius_overrides_height_derivation() {
    let renderer = NullRenderer::default();
    let config = PieChartConfig::new(Viewport::new(400, 400)).with_radius(100.0);
    let engine = PieChartEngine::new(renderer, config).expect("engine init");

    assert_relative_eq!(engine.geometry().radius, 100.0, epsilon = 1e-9);
    let frame = engine.build_render_frame();
    assert_relative_eq!(frame.base_ring.rect.width(), 200.0, epsilon = 1e-9);
}

#[test]
fn frame_carries_ring_and_arcs_with_angular_padding() {
    let mut engine = build_engine();
    engine.add_arc("a", 0.0, 90.0, &STOPS).expect("add arc");
    engine.add_arc("b", 90.0, 180.0, &STOPS).expect("add arc");

    let frame = engine.build_render_frame();
    assert_eq!(frame.arc_count(), 2);

    // The drawn sweep is shortened by the 1.5° padding gap; the stored
    // start angle is untouched.
    let first = &frame.arcs[0];
    assert_relative_eq!(first.start_angle, 0.0, epsilon = 1e-9);
    assert_relative_eq!(first.sweep_angle, 88.5, epsilon = 1e-9);
    let second = &frame.arcs[1];
    assert_relative_eq!(second.start_angle, 90.0, epsilon = 1e-9);
    assert_relative_eq!(second.sweep_angle, 178.5, epsilon = 1e-9);

    assert_relative_eq!(frame.base_ring.alpha, 50.0 / 255.0, epsilon = 1e-12);
}

#[test]
fn padding_never_inverts_a_short_arc() {
    let mut engine = build_engine();
    engine.add_arc("sliver", 10.0, 1.0, &STOPS).expect("add arc");

    let frame = engine.build_render_frame();
    assert_relative_eq!(frame.arcs[0].sweep_angle, 0.0, epsilon = 1e-12);
}

#[test]
fn gradient_rotation_matches_the_hit_test_offset() {
    let mut engine = build_engine();
    engine.add_arc("a", 0.0, 90.0, &STOPS).expect("add arc");

    let frame = engine.build_render_frame();
    assert_relative_eq!(
        frame.base_ring.gradient.rotation_deg,
        -90.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(frame.arcs[0].gradient.rotation_deg, -90.0, epsilon = 1e-12);
    assert_eq!(frame.arcs[0].gradient.stops.to_vec(), STOPS.to_vec());
}

#[test]
fn custom_offset_keeps_gradient_and_hit_testing_aligned() {
    let renderer = NullRenderer::default();
    let config = PieChartConfig::new(Viewport::new(400, 400)).with_angle_offset_deg(-45.0);
    let mut engine = PieChartEngine::new(renderer, config).expect("engine init");
    engine.add_arc("a", 0.0, 90.0, &STOPS).expect("add arc");

    let frame = engine.build_render_frame();
    assert_relative_eq!(frame.arcs[0].gradient.rotation_deg, -45.0, epsilon = 1e-12);

    // Chart angle 45° under a −45° offset sits at screen angle 0°, i.e.
    // directly right of the center on the ring.
    let selection = engine.tap_committed(260.0, 200.0).expect("tap matches");
    assert_eq!(selection.id, "a");
}

#[test]
fn stroke_width_reflects_the_latest_animation_tick() {
    let mut engine = build_engine();
    engine.add_arc("a", 0.0, 90.0, &STOPS).expect("add arc");

    // Chart angle 45° on the 400×400 ring.
    let screen_rad = (45.0f64 - 90.0).to_radians();
    let (x, y) = (
        200.0 + 60.0 * screen_rad.cos(),
        200.0 + 60.0 * screen_rad.sin(),
    );
    engine.tap_committed(x, y).expect("tap matches");
    for _ in 0..10 {
        engine.tick();
    }

    let rendered = engine
        .render_if_invalidated()
        .expect("render if invalidated");
    assert!(rendered);

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_arc_count, 1);
    assert_relative_eq!(renderer.last_stroke_widths[0], 38.0, epsilon = 1e-9);
}

#[test]
fn frame_validation_rejects_degenerate_primitives() {
    let engine = build_engine();
    let base = engine.build_render_frame();

    let bad_arc = ArcPrimitive {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        start_angle: f64::NAN,
        sweep_angle: 90.0,
        stroke_width: 32.0,
        gradient: SweepGradientSpec::new(-90.0, &STOPS),
    };
    let frame = base.clone().with_arc(bad_arc);
    let err = frame.validate().expect_err("nan angle must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let empty_gradient = ArcPrimitive {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        start_angle: 0.0,
        sweep_angle: 90.0,
        stroke_width: 32.0,
        gradient: SweepGradientSpec::new(-90.0, &[]),
    };
    let frame = base.with_arc(empty_gradient);
    let err = frame.validate().expect_err("empty gradient must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
