use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Sweep-gradient definition handed to the backend: ordered stops swept
/// around the rect center, pre-rotated by `rotation_deg`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradientSpec {
    pub rotation_deg: f64,
    pub stops: SmallVec<[Color; 4]>,
}

impl SweepGradientSpec {
    #[must_use]
    pub fn new(rotation_deg: f64, stops: &[Color]) -> Self {
        Self {
            rotation_deg,
            stops: SmallVec::from_slice(stops),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidConfig(
                "gradient rotation must be finite".to_owned(),
            ));
        }
        if self.stops.is_empty() {
            return Err(ChartError::InvalidConfig(
                "gradient must have at least one color stop".to_owned(),
            ));
        }
        for stop in &self.stops {
            stop.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one arc stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub rect: Rect,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub stroke_width: f64,
    pub gradient: SweepGradientSpec,
}

impl ArcPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.rect.is_finite() {
            return Err(ChartError::InvalidConfig(
                "arc rect must be finite".to_owned(),
            ));
        }
        if !self.start_angle.is_finite() || !self.sweep_angle.is_finite() {
            return Err(ChartError::InvalidConfig(
                "arc angles must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "arc stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.gradient.validate()
    }
}

/// Draw command for the translucent base ring under the arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct RingPrimitive {
    pub rect: Rect,
    pub stroke_width: f64,
    pub gradient: SweepGradientSpec,
    /// Extra translucency multiplied over the gradient stops, in [0, 1].
    pub alpha: f64,
}

impl RingPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.rect.is_finite() {
            return Err(ChartError::InvalidConfig(
                "ring rect must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "ring stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidConfig(
                "ring alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.gradient.validate()
    }
}
