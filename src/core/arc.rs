use smallvec::SmallVec;

use crate::core::angle::CIRCUMFERENCE_DEG;
use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordered sweep-gradient color stops for one arc.
pub type ColorStops = SmallVec<[Color; 4]>;

/// One angular segment of the chart.
///
/// Angles are caller-supplied degrees and deliberately unvalidated beyond
/// finiteness: out-of-range or overlapping arcs are legal, and overlap is
/// resolved by registry insertion order at hit-test time. `rect` and
/// `radius` are written by the layout adapter once per size change;
/// `stroke_width` is mutated only by the highlight animator.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    id: String,
    start_angle: f64,
    sweep_angle: f64,
    color_stops: ColorStops,
    radius: f64,
    rect: Rect,
    stroke_width: f64,
    highlighted: bool,
}

impl Arc {
    /// Creates an arc with the given baseline stroke width.
    ///
    /// Rejects an empty color list (the sweep gradient would be undefined)
    /// and non-finite angles. Uniqueness of `id` is not checked.
    pub fn new(
        id: impl Into<String>,
        start_angle: f64,
        sweep_angle: f64,
        color_stops: &[Color],
        baseline_stroke_width: f64,
    ) -> ChartResult<Self> {
        let id = id.into();
        if color_stops.is_empty() {
            return Err(ChartError::InvalidArc(format!(
                "arc `{id}` must have at least one color stop"
            )));
        }
        for color in color_stops {
            color.validate()?;
        }
        if !start_angle.is_finite() || !sweep_angle.is_finite() {
            return Err(ChartError::InvalidArc(format!(
                "arc `{id}` angles must be finite: start={start_angle}, sweep={sweep_angle}"
            )));
        }

        Ok(Self {
            id,
            start_angle,
            sweep_angle,
            color_stops: ColorStops::from_slice(color_stops),
            radius: 0.0,
            rect: Rect::zero(),
            stroke_width: baseline_stroke_width,
            highlighted: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// End angle as `start + sweep`; may exceed 360° for wrap-around arcs.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    /// Whether the arc crosses the 0°/360° seam.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.end_angle() > CIRCUMFERENCE_DEG
    }

    #[must_use]
    pub fn color_stops(&self) -> &[Color] {
        &self.color_stops
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Advisory highlight flag; see the highlight animator for its timing.
    #[must_use]
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub(crate) fn set_layout(&mut self, rect: Rect, radius: f64) {
        self.rect = rect;
        self.radius = radius;
    }

    pub(crate) fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke_width = stroke_width;
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
