//! Pure angle math shared by hit testing and layout.
//!
//! Angles are degrees. The canonical range is `[0, 360)`, with 0° at the
//! twelve-o'clock position once the visual offset is applied.

use crate::core::types::Point;

pub const CIRCUMFERENCE_DEG: f64 = 360.0;

/// Visual rotation applied to the whole chart so arcs start at 12 o'clock.
///
/// Hit testing and the sweep-gradient rotation must use the same value or
/// touch angles drift from what is drawn.
pub const TWELVE_O_CLOCK_OFFSET_DEG: f64 = -90.0;

/// Normalizes a signed angle in degrees to `[0, 360)`.
///
/// Finite inputs only; NaN propagates.
#[must_use]
pub fn normalize_angle(raw_deg: f64) -> f64 {
    let normalized = raw_deg.rem_euclid(CIRCUMFERENCE_DEG);
    // rem_euclid of a tiny negative can round up to exactly 360.0.
    if normalized >= CIRCUMFERENCE_DEG {
        0.0
    } else {
        normalized
    }
}

/// Angle of `point` around `center` in `[0, 360)`, with `offset_deg` applied.
///
/// With the default offset of −90°, a point straight above the center maps
/// to 0° and angles grow clockwise (screen coordinates, y-down).
#[must_use]
pub fn angle_of(center: Point, point: Point, offset_deg: f64) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    normalize_angle(dy.atan2(dx).to_degrees() - offset_deg)
}

/// Whether `point` lies on the ring of the given `radius`, within
/// `band_width` on either side (inclusive).
#[must_use]
pub fn is_within_radial_band(center: Point, point: Point, band_width: f64, radius: f64) -> bool {
    let distance = center.distance_to(point);
    distance >= radius - band_width && distance <= radius + band_width
}
