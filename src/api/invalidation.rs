use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Renderer;

use super::PieChartEngine;

/// Ordered repaint classes; pending requests coalesce to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Stroke widths changed (animation tick or selection).
    Highlight,
    /// Geometry or arc set changed; everything is rebuilt.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 { self } else { other }
    }
}

impl<R: Renderer> PieChartEngine<R> {
    /// Highest repaint class requested since the last render.
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.pending_invalidation
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        self.pending_invalidation != InvalidationLevel::None
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.pending_invalidation = InvalidationLevel::None;
    }

    /// Returns and clears the pending repaint class.
    #[must_use]
    pub fn take_pending_invalidation(&mut self) -> InvalidationLevel {
        let pending = self.pending_invalidation;
        self.pending_invalidation = InvalidationLevel::None;
        pending
    }

    /// Renders when a repaint is pending; returns whether it rendered.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        self.clear_pending_invalidation();
        Ok(true)
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        self.pending_invalidation = self.pending_invalidation.max(level);
    }
}
