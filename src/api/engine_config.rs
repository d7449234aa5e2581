use serde::{Deserialize, Serialize};

use crate::core::angle::TWELVE_O_CLOCK_OFFSET_DEG;
use crate::core::{Viewport, WrapPolicy};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HighlightTuning;
use crate::render::Color;

/// Public engine bootstrap configuration.
///
/// Every knob is a literal value, never derived. The type is serializable
/// so host applications can persist/load chart setup without inventing
/// their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub viewport: Viewport,
    /// Baseline stroke width for the base ring and every arc, and the
    /// radial hit-test band width.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Explicit ring radius; when `None` the radius is derived from the
    /// viewport height at layout time.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Multiplier over the baseline width for a highlighted arc.
    #[serde(default = "default_expansion_factor")]
    pub expansion_factor: f64,
    /// Stroke-width change per animation tick (growth and shrink).
    #[serde(default = "default_stroke_step")]
    pub stroke_step: f64,
    /// Animation tick period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Visual rotation of the whole chart; −90° starts arcs at 12 o'clock.
    /// Shared by hit testing and the gradient rotation.
    #[serde(default = "default_angle_offset_deg")]
    pub angle_offset_deg: f64,
    /// Gap subtracted from each arc's drawn sweep to separate neighbors.
    #[serde(default = "default_arc_angle_padding_deg")]
    pub arc_angle_padding_deg: f64,
    /// Sweep-gradient stops of the translucent base ring.
    #[serde(default = "default_ring_color_stops")]
    pub ring_color_stops: Vec<Color>,
    /// Base ring translucency in [0, 1].
    #[serde(default = "default_ring_alpha")]
    pub ring_alpha: f64,
    /// Hit-test semantics for arcs crossing the 0°/360° seam.
    #[serde(default)]
    pub wrap_policy: WrapPolicy,
}

impl PieChartConfig {
    /// Creates a config with the stock defaults for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            stroke_width: default_stroke_width(),
            radius: None,
            expansion_factor: default_expansion_factor(),
            stroke_step: default_stroke_step(),
            tick_interval_ms: default_tick_interval_ms(),
            angle_offset_deg: default_angle_offset_deg(),
            arc_angle_padding_deg: default_arc_angle_padding_deg(),
            ring_color_stops: default_ring_color_stops(),
            ring_alpha: default_ring_alpha(),
            wrap_policy: WrapPolicy::default(),
        }
    }

    /// Sets the baseline stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets an explicit ring radius instead of deriving it from the height.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the highlight expansion factor.
    #[must_use]
    pub fn with_expansion_factor(mut self, expansion_factor: f64) -> Self {
        self.expansion_factor = expansion_factor;
        self
    }

    /// Sets the per-tick stroke-width step.
    #[must_use]
    pub fn with_stroke_step(mut self, stroke_step: f64) -> Self {
        self.stroke_step = stroke_step;
        self
    }

    /// Sets the animation tick period in milliseconds.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Sets the shared visual angle offset.
    #[must_use]
    pub fn with_angle_offset_deg(mut self, angle_offset_deg: f64) -> Self {
        self.angle_offset_deg = angle_offset_deg;
        self
    }

    /// Sets the angular padding gap between adjacent arcs.
    #[must_use]
    pub fn with_arc_angle_padding_deg(mut self, arc_angle_padding_deg: f64) -> Self {
        self.arc_angle_padding_deg = arc_angle_padding_deg;
        self
    }

    /// Sets the base ring gradient stops.
    #[must_use]
    pub fn with_ring_color_stops(mut self, ring_color_stops: Vec<Color>) -> Self {
        self.ring_color_stops = ring_color_stops;
        self
    }

    /// Sets the base ring translucency.
    #[must_use]
    pub fn with_ring_alpha(mut self, ring_alpha: f64) -> Self {
        self.ring_alpha = ring_alpha;
        self
    }

    /// Sets the wrap-around hit-test policy.
    #[must_use]
    pub fn with_wrap_policy(mut self, wrap_policy: WrapPolicy) -> Self {
        self.wrap_policy = wrap_policy;
        self
    }

    /// Animation parameters derived from this config.
    #[must_use]
    pub fn highlight_tuning(&self) -> HighlightTuning {
        HighlightTuning {
            baseline_stroke_width: self.stroke_width,
            expansion_factor: self.expansion_factor,
            stroke_step: self.stroke_step,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "explicit radius must be finite and > 0".to_owned(),
                ));
            }
        }
        if !self.expansion_factor.is_finite() || self.expansion_factor <= 1.0 {
            return Err(ChartError::InvalidConfig(
                "expansion factor must be finite and > 1".to_owned(),
            ));
        }
        if !self.stroke_step.is_finite() || self.stroke_step <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "stroke step must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "tick interval must be > 0".to_owned(),
            ));
        }
        if !self.angle_offset_deg.is_finite() {
            return Err(ChartError::InvalidConfig(
                "angle offset must be finite".to_owned(),
            ));
        }
        if !self.arc_angle_padding_deg.is_finite() || self.arc_angle_padding_deg < 0.0 {
            return Err(ChartError::InvalidConfig(
                "arc angle padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.ring_color_stops.is_empty() {
            return Err(ChartError::InvalidConfig(
                "ring must have at least one color stop".to_owned(),
            ));
        }
        for stop in &self.ring_color_stops {
            stop.validate()?;
        }
        if !self.ring_alpha.is_finite() || !(0.0..=1.0).contains(&self.ring_alpha) {
            return Err(ChartError::InvalidConfig(
                "ring alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_stroke_width() -> f64 {
    32.0
}

fn default_expansion_factor() -> f64 {
    1.5
}

fn default_stroke_step() -> f64 {
    0.6
}

fn default_tick_interval_ms() -> u64 {
    5
}

fn default_angle_offset_deg() -> f64 {
    TWELVE_O_CLOCK_OFFSET_DEG
}

fn default_arc_angle_padding_deg() -> f64 {
    1.5
}

fn default_ring_color_stops() -> Vec<Color> {
    vec![Color::rgb(0.25, 0.25, 0.25), Color::rgb(0.75, 0.75, 0.75)]
}

fn default_ring_alpha() -> f64 {
    50.0 / 255.0
}
