use piechart_rs::core::Point;
use piechart_rs::core::angle::{TWELVE_O_CLOCK_OFFSET_DEG, angle_of, normalize_angle};
use proptest::prelude::*;

/// Unsigned angular distance accounting for the 0°/360° seam.
fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

proptest! {
    #[test]
    fn normalize_angle_stays_in_canonical_range(raw in -1.0e6f64..1.0e6) {
        let normalized = normalize_angle(raw);
        prop_assert!((0.0..360.0).contains(&normalized));
    }

    #[test]
    fn normalize_angle_is_periodic_in_full_turns(
        raw in -1000.0f64..1000.0,
        turns in -100i32..100
    ) {
        let shifted = raw + 360.0 * f64::from(turns);
        let distance = angular_distance(normalize_angle(raw), normalize_angle(shifted));
        prop_assert!(distance <= 1e-6);
    }

    #[test]
    fn angle_of_round_trips_constructed_points(
        angle in 0.0f64..360.0,
        radius in 10.0f64..500.0
    ) {
        let center = Point::new(250.0, 250.0);
        let screen_rad = (angle + TWELVE_O_CLOCK_OFFSET_DEG).to_radians();
        let point = Point::new(
            center.x + radius * screen_rad.cos(),
            center.y + radius * screen_rad.sin(),
        );

        let recovered = angle_of(center, point, TWELVE_O_CLOCK_OFFSET_DEG);
        prop_assert!(angular_distance(recovered, angle) <= 1e-6);
    }
}
