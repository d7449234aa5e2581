use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced, and it records the stroke widths
/// it last observed so animation tests can assert what a draw pass sees.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_arc_count: usize,
    pub last_stroke_widths: Vec<f64>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_arc_count = frame.arcs.len();
        self.last_stroke_widths = frame.arcs.iter().map(|arc| arc.stroke_width).collect();
        Ok(())
    }
}
