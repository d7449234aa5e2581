use crate::core::{Arc, ChartGeometry, Viewport};
use crate::interaction::{HighlightPhase, TapPhase};
use crate::render::Renderer;

use super::{PieChartConfig, PieChartEngine};

impl<R: Renderer> PieChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &PieChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn arc(&self, index: usize) -> Option<&Arc> {
        self.registry.get(index)
    }

    #[must_use]
    pub fn arcs(&self) -> &[Arc] {
        self.registry.as_slice()
    }

    /// Observable highlight phase of the arc at `index`.
    #[must_use]
    pub fn highlight_phase(&self, index: usize) -> Option<HighlightPhase> {
        self.animator.phase(index, &self.registry)
    }

    #[must_use]
    pub fn has_active_animations(&self) -> bool {
        self.animator.has_active_transitions()
    }

    /// Generation of the arc's live transition, if one exists.
    ///
    /// Exposed so hosts and tests can observe supersession: a repeated
    /// select/deselect replaces the transition and changes the generation.
    #[must_use]
    pub fn active_transition_generation(&self, index: usize) -> Option<u64> {
        self.animator.active_generation(index)
    }

    #[must_use]
    pub fn tap_phase(&self) -> TapPhase {
        self.tap.phase()
    }
}
