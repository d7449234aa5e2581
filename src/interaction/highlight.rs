//! Per-arc highlight/unhighlight animation.
//!
//! Each arc is in one of four phases: `Baseline`, `Growing`, `Expanded`,
//! `Shrinking`. Selecting an arc grows its stroke width to
//! `baseline × expansion_factor`; deselecting shrinks it back. All width
//! mutation flows through [`HighlightAnimator::tick`], which the host pumps
//! at the configured interval, so there is exactly one writer and a draw
//! pass can never observe a half-written width.
//!
//! At most one transition record exists per arc. Starting an opposite
//! transition replaces the record in place; the superseded transition
//! simply never ticks again. Generations number the records so tests and
//! logs can tell a superseding transition from a continuation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ArcRegistry;

/// Literal animation parameters, resolved from the chart config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightTuning {
    /// Resting stroke width, shared with the chart's configured arc width.
    pub baseline_stroke_width: f64,
    /// Multiplier over the baseline for the fully expanded width.
    pub expansion_factor: f64,
    /// Width change per tick, used for both growth and shrink.
    pub stroke_step: f64,
}

impl HighlightTuning {
    /// Fully expanded stroke width.
    #[must_use]
    pub fn target_stroke_width(self) -> f64 {
        self.baseline_stroke_width * self.expansion_factor
    }
}

/// Observable animation phase of one arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightPhase {
    Baseline,
    Growing,
    Expanded,
    Shrinking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Grow,
    Shrink,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    direction: Direction,
    generation: u64,
}

/// Single-writer animation scheduler for all arcs of one chart.
#[derive(Debug)]
pub struct HighlightAnimator {
    tuning: HighlightTuning,
    // Index-aligned with the registry; `Some` is the one live transition
    // for that arc.
    transitions: Vec<Option<Transition>>,
    next_generation: u64,
}

impl HighlightAnimator {
    #[must_use]
    pub fn new(tuning: HighlightTuning) -> Self {
        Self {
            tuning,
            transitions: Vec::new(),
            next_generation: 0,
        }
    }

    #[must_use]
    pub fn tuning(&self) -> HighlightTuning {
        self.tuning
    }

    /// Starts growing the arc at `index` unless it is already highlighted.
    ///
    /// An in-flight shrink for the same arc is superseded atomically: its
    /// record is replaced before the growth takes effect, so no two
    /// transitions ever act on one arc. Returns whether a growth started.
    pub fn select(&mut self, index: usize, arcs: &mut ArcRegistry) -> bool {
        self.align_with(arcs.len());
        let Some(arc) = arcs.get_mut(index) else {
            return false;
        };
        if arc.highlighted() {
            return false;
        }

        arc.set_highlighted(true);
        let generation = self.begin(index, Direction::Grow);
        debug!(index, generation, id = arc.id(), "highlight growth started");
        true
    }

    /// Forces every highlighted arc into the shrinking phase.
    ///
    /// In-flight growths are superseded the same way `select` supersedes
    /// shrinks. Returns whether any shrink started.
    pub fn deselect_all(&mut self, arcs: &mut ArcRegistry) -> bool {
        self.align_with(arcs.len());
        let mut any = false;
        for index in 0..arcs.len() {
            let Some(arc) = arcs.get_mut(index) else {
                continue;
            };
            if !arc.highlighted() {
                continue;
            }
            arc.set_highlighted(false);
            let generation = self.begin(index, Direction::Shrink);
            debug!(index, generation, id = arc.id(), "highlight shrink started");
            any = true;
        }
        any
    }

    /// Advances every live transition by one tick.
    ///
    /// Returns whether any stroke width changed; the caller requests a
    /// redraw when it did. Transitions retire on reaching their bound.
    pub fn tick(&mut self, arcs: &mut ArcRegistry) -> bool {
        self.align_with(arcs.len());
        let mut changed = false;
        for index in 0..self.transitions.len() {
            let Some(transition) = self.transitions[index] else {
                continue;
            };
            let Some(arc) = arcs.get_mut(index) else {
                continue;
            };

            let (next, done) = match transition.direction {
                Direction::Grow => {
                    let target = self.tuning.target_stroke_width();
                    let next = (arc.stroke_width() + self.tuning.stroke_step).min(target);
                    (next, next >= target)
                }
                Direction::Shrink => {
                    let baseline = self.tuning.baseline_stroke_width;
                    let next = (arc.stroke_width() - self.tuning.stroke_step).max(baseline);
                    (next, next <= baseline)
                }
            };

            if next != arc.stroke_width() {
                arc.set_stroke_width(next);
                changed = true;
            }
            if done {
                self.transitions[index] = None;
            }
        }
        changed
    }

    /// Observable phase of the arc at `index`.
    #[must_use]
    pub fn phase(&self, index: usize, arcs: &ArcRegistry) -> Option<HighlightPhase> {
        let arc = arcs.get(index)?;
        let phase = match self.transitions.get(index).copied().flatten() {
            Some(transition) => match transition.direction {
                Direction::Grow => HighlightPhase::Growing,
                Direction::Shrink => HighlightPhase::Shrinking,
            },
            None if arc.highlighted() => HighlightPhase::Expanded,
            None => HighlightPhase::Baseline,
        };
        Some(phase)
    }

    #[must_use]
    pub fn has_active_transitions(&self) -> bool {
        self.transitions.iter().any(Option::is_some)
    }

    /// Generation of the arc's live transition, if one exists.
    ///
    /// A changed generation after a repeated select/deselect proves the
    /// earlier transition was superseded rather than left running.
    #[must_use]
    pub fn active_generation(&self, index: usize) -> Option<u64> {
        self.transitions
            .get(index)
            .copied()
            .flatten()
            .map(|transition| transition.generation)
    }

    fn begin(&mut self, index: usize, direction: Direction) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.transitions[index] = Some(Transition {
            direction,
            generation,
        });
        generation
    }

    fn align_with(&mut self, arc_count: usize) {
        if self.transitions.len() < arc_count {
            self.transitions.resize(arc_count, None);
        }
    }
}
