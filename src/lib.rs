//! piechart-rs: interactive pie-ring chart core.
//!
//! This crate provides the chart-side half of a tappable pie chart: arc
//! geometry and registration, touch-point hit testing, and the per-arc
//! highlight animation, behind a strict split between chart logic and the
//! host's drawing backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PieChartConfig, PieChartEngine};
pub use error::{ChartError, ChartResult};
