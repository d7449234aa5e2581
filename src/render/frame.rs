use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, RingPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Carries the base ring plus one primitive per registered arc, in
/// registry order, with each arc's stroke width reflecting the highlight
/// animator's latest tick.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub base_ring: RingPrimitive,
    pub arcs: Vec<ArcPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, base_ring: RingPrimitive) -> Self {
        Self {
            viewport,
            base_ring,
            arcs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.base_ring.validate()?;
        for arc in &self.arcs {
            arc.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }
}
