mod highlight;

pub use highlight::{HighlightAnimator, HighlightPhase, HighlightTuning};

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::render::Color;

/// Tap recognition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TapPhase {
    #[default]
    Idle,
    Pressed,
}

/// Reduces a pointer down/move/up sequence to one committed tap.
///
/// Presses and drag movements are absorbed; only the release position
/// matters. There is no drag threshold: a press that wanders and releases
/// still commits at wherever it let go.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TapTracker {
    phase: TapPhase,
}

impl TapTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(self) -> TapPhase {
        self.phase
    }

    pub fn on_pointer_down(&mut self) {
        self.phase = TapPhase::Pressed;
    }

    pub fn on_pointer_move(&mut self) {
        // Absorbed; movement never cancels or commits a tap.
    }

    /// Returns the committed tap position, if a press was in progress.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) -> Option<Point> {
        match self.phase {
            TapPhase::Pressed => {
                self.phase = TapPhase::Idle;
                Some(Point::new(x, y))
            }
            TapPhase::Idle => None,
        }
    }
}

/// Snapshot of the matched arc handed to the selection callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcSelection {
    /// Registry index of the selected arc.
    pub index: usize,
    /// Stored arc id; duplicates across arcs are legal and reported as-is.
    pub id: String,
    pub start_angle: f64,
    pub sweep_angle: f64,
    pub color_stops: Vec<Color>,
}
