//! Layout adapter: turns the measured viewport into chart geometry and
//! per-arc drawable state.
//!
//! Only geometry and paint parameters are produced here; stroking pixels
//! is the host backend's job.

use crate::core::{ArcRegistry, ChartGeometry, Point, Rect, Viewport};
use crate::render::{ArcPrimitive, RenderFrame, RingPrimitive, SweepGradientSpec};

use super::PieChartConfig;

/// Center fraction of the viewport per axis.
const HALF_DIVIDER: f64 = 0.5;

/// Fraction of the viewport height used as the ring radius when no
/// explicit radius is configured.
const DEFAULT_SIZE_DIVIDER: f64 = 0.15;

/// Computes the shared chart geometry for the given viewport.
pub(crate) fn chart_geometry(viewport: Viewport, config: &PieChartConfig) -> ChartGeometry {
    let center = Point::new(
        f64::from(viewport.width) * HALF_DIVIDER,
        f64::from(viewport.height) * HALF_DIVIDER,
    );
    let radius = config
        .radius
        .unwrap_or_else(|| f64::from(viewport.height) * DEFAULT_SIZE_DIVIDER);
    ChartGeometry::new(center, radius, config.stroke_width)
}

/// Bounding square of the base circle and every arc: side `2 × radius`,
/// centered on the chart center.
pub(crate) fn bounding_rect(geometry: ChartGeometry) -> Rect {
    let diameter = 2.0 * geometry.radius;
    let left = geometry.center.x - diameter * HALF_DIVIDER;
    let top = geometry.center.y - diameter * HALF_DIVIDER;
    Rect::new(left, top, left + diameter, top + diameter)
}

/// Writes the current rect and radius into every registered arc.
///
/// Called once per size change; arcs added later are laid out at
/// insertion time.
pub(crate) fn layout_arcs(registry: &mut ArcRegistry, geometry: ChartGeometry) {
    let rect = bounding_rect(geometry);
    for arc in registry.iter_mut() {
        arc.set_layout(rect, geometry.radius);
    }
}

/// Materializes the scene for one draw pass.
///
/// Each arc's drawn sweep is shortened by the configured angular padding
/// (clamped so a short arc never inverts), and its stroke width is
/// whatever the highlight animator last wrote. The gradient rotation is
/// the same angle offset hit testing uses.
pub(crate) fn build_render_frame(
    config: &PieChartConfig,
    geometry: ChartGeometry,
    registry: &ArcRegistry,
) -> RenderFrame {
    let rect = bounding_rect(geometry);
    let base_ring = RingPrimitive {
        rect,
        stroke_width: config.stroke_width,
        gradient: SweepGradientSpec::new(config.angle_offset_deg, &config.ring_color_stops),
        alpha: config.ring_alpha,
    };

    let mut frame = RenderFrame::new(config.viewport, base_ring);
    for arc in registry.iter() {
        frame = frame.with_arc(ArcPrimitive {
            rect: arc.rect(),
            start_angle: arc.start_angle(),
            sweep_angle: (arc.sweep_angle() - config.arc_angle_padding_deg).max(0.0),
            stroke_width: arc.stroke_width(),
            gradient: SweepGradientSpec::new(config.angle_offset_deg, arc.color_stops()),
        });
    }
    frame
}
