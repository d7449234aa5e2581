pub mod angle;
pub mod arc;
pub mod registry;
pub mod types;

pub use arc::{Arc, ColorStops};
pub use hit_test::{ArcHit, WrapPolicy, hit_test};
pub use registry::ArcRegistry;
pub use types::{ChartGeometry, Point, Rect, Viewport};
