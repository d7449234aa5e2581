use std::time::Duration;

use tracing::debug;

use crate::core::{Arc, ArcRegistry, ChartGeometry, Point, Viewport, hit_test};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ArcSelection, HighlightAnimator, TapTracker};
use crate::render::{Color, RenderFrame, Renderer};

use super::{InvalidationLevel, PieChartConfig, layout};

/// Main orchestration facade consumed by host applications.
///
/// `PieChartEngine` coordinates chart geometry, the arc registry, tap
/// recognition, the highlight animator, and renderer calls. All state
/// lives behind `&mut self`, so animation ticks and draw passes are
/// serialized by construction; the host pumps [`tick`](Self::tick) or
/// [`advance`](Self::advance) from its timer.
pub struct PieChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PieChartConfig,
    pub(super) geometry: ChartGeometry,
    pub(super) registry: ArcRegistry,
    pub(super) tap: TapTracker,
    pub(super) animator: HighlightAnimator,
    pub(super) pending_invalidation: InvalidationLevel,
    pub(super) pending_tick_time: Duration,
    pub(super) on_arc_selected: Option<Box<dyn FnMut(&ArcSelection)>>,
}

impl<R: Renderer + std::fmt::Debug> std::fmt::Debug for PieChartEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PieChartEngine")
            .field("renderer", &self.renderer)
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("registry", &self.registry)
            .field("tap", &self.tap)
            .field("animator", &self.animator)
            .field("pending_invalidation", &self.pending_invalidation)
            .field("pending_tick_time", &self.pending_tick_time)
            .field(
                "on_arc_selected",
                &self.on_arc_selected.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl<R: Renderer> PieChartEngine<R> {
    pub fn new(renderer: R, config: PieChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let geometry = layout::chart_geometry(config.viewport, &config);
        let animator = HighlightAnimator::new(config.highlight_tuning());

        Ok(Self {
            renderer,
            config,
            geometry,
            registry: ArcRegistry::new(),
            tap: TapTracker::new(),
            animator,
            pending_invalidation: InvalidationLevel::Full,
            pending_tick_time: Duration::ZERO,
            on_arc_selected: None,
        })
    }

    /// Appends an arc and requests a redraw.
    ///
    /// Angles are accepted as-is: overlapping or out-of-range ranges are
    /// legal and resolve by insertion order at hit-test time. An empty
    /// color list is rejected.
    pub fn add_arc(
        &mut self,
        id: impl Into<String>,
        start_angle: f64,
        sweep_angle: f64,
        color_stops: &[Color],
    ) -> ChartResult<()> {
        let mut arc = Arc::new(
            id,
            start_angle,
            sweep_angle,
            color_stops,
            self.config.stroke_width,
        )?;
        arc.set_layout(layout::bounding_rect(self.geometry), self.geometry.radius);

        let index = self.registry.push(arc);
        debug!(index, start_angle, sweep_angle, "arc added");
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    /// Applies a new display size, recomputing geometry and arc layout.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        self.config.viewport = viewport;
        self.geometry = layout::chart_geometry(viewport, &self.config);
        layout::layout_arcs(&mut self.registry, self.geometry);
        self.invalidate(InvalidationLevel::Full);
        Ok(())
    }

    /// Registers the callback invoked synchronously once per matched tap.
    pub fn set_on_arc_selected(&mut self, handler: impl FnMut(&ArcSelection) + 'static) {
        self.on_arc_selected = Some(Box::new(handler));
    }

    pub fn clear_on_arc_selected(&mut self) {
        self.on_arc_selected = None;
    }

    pub fn pointer_down(&mut self, _x: f64, _y: f64) {
        self.tap.on_pointer_down();
    }

    pub fn pointer_move(&mut self, _x: f64, _y: f64) {
        self.tap.on_pointer_move();
    }

    /// Commits the tap at the release position, if a press was in flight.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Option<ArcSelection> {
        let committed = self.tap.on_pointer_up(x, y)?;
        self.tap_committed(committed.x, committed.y)
    }

    /// Handles a committed tap: any highlighted arc starts shrinking, and
    /// the hit arc (if any) starts growing.
    ///
    /// A miss outside every arc or outside the radial band is a normal
    /// no-op. On a match the selection callback fires synchronously once.
    pub fn tap_committed(&mut self, x: f64, y: f64) -> Option<ArcSelection> {
        let deselected = self.animator.deselect_all(&mut self.registry);

        let hit = hit_test(
            &self.registry,
            self.geometry,
            Point::new(x, y),
            self.config.angle_offset_deg,
            self.config.wrap_policy,
        );
        let selection = hit.and_then(|hit| self.selection_snapshot(hit.index));
        let selected = hit.is_some_and(|hit| self.animator.select(hit.index, &mut self.registry));

        if deselected || selected {
            self.invalidate(InvalidationLevel::Highlight);
        }

        if let Some(selection) = &selection {
            debug!(index = selection.index, id = %selection.id, "arc selected");
            if let Some(handler) = self.on_arc_selected.as_mut() {
                handler(selection);
            }
        }
        selection
    }

    /// Advances every live highlight transition by one tick.
    ///
    /// Returns whether any stroke width changed; a change requests a
    /// redraw.
    pub fn tick(&mut self) -> bool {
        let changed = self.animator.tick(&mut self.registry);
        if changed {
            self.invalidate(InvalidationLevel::Highlight);
        }
        changed
    }

    /// Converts elapsed wall time into whole animation ticks and runs
    /// them, banking the sub-tick remainder.
    ///
    /// Idle time is not banked, so a burst of ticks can never pile up
    /// while nothing animates. Returns the number of ticks executed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.animator.has_active_transitions() {
            self.pending_tick_time = Duration::ZERO;
            return 0;
        }

        self.pending_tick_time += elapsed;
        let interval = Duration::from_millis(self.config.tick_interval_ms);
        let mut ticks = 0;
        while self.pending_tick_time >= interval && self.animator.has_active_transitions() {
            self.pending_tick_time -= interval;
            self.tick();
            ticks += 1;
        }
        ticks
    }

    /// Current per-arc drawable state for the host's draw step.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        layout::build_render_frame(&self.config, self.geometry, &self.registry)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = layout::build_render_frame(&self.config, self.geometry, &self.registry);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn selection_snapshot(&self, index: usize) -> Option<ArcSelection> {
        let arc = self.registry.get(index)?;
        Some(ArcSelection {
            index,
            id: arc.id().to_owned(),
            start_angle: arc.start_angle(),
            sweep_angle: arc.sweep_angle(),
            color_stops: arc.color_stops().to_vec(),
        })
    }
}
