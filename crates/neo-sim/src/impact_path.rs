//! Curved descent path from a body's position to the target center.

use neo_core::constants::{IMPACT_CURVE_STRENGTH, MIN_SURFACE_DISTANCE};
use neo_core::types::Point3;

/// Build a descent path of `point_count + 1` points from `start` to the origin.
///
/// The straight-line component is smoothstep-eased toward the origin. A
/// lateral bulge of `sin(t*PI) * 0.3|start| * (1 - t)` is added along the
/// start direction turned 90 degrees in the horizontal plane, so the path
/// curves off a straight dive and returns to zero offset at both ends.
/// Interior points that dip under the surface are pushed back out to
/// `MIN_SURFACE_DISTANCE`; the final point is exactly the origin.
pub fn generate(start: Point3, point_count: usize) -> Vec<Point3> {
    if point_count == 0 {
        return vec![Point3::ZERO];
    }

    let curve_strength = start.length() * IMPACT_CURVE_STRENGTH;
    let perpendicular = Point3::new(-start.z, 0.0, start.x).normalize_or_zero();

    let mut points: Vec<Point3> = (0..=point_count)
        .map(|i| {
            let t = i as f64 / point_count as f64;
            let ease_t = t * t * (3.0 - 2.0 * t);

            let straight = start.lerp(Point3::ZERO, ease_t);
            let offset = (t * std::f64::consts::PI).sin() * curve_strength * (1.0 - t);
            let curved = straight + perpendicular * offset;

            if i < point_count && curved.length() < MIN_SURFACE_DISTANCE {
                // A point exactly at the origin has no direction to push along.
                let direction = curved.try_normalize().unwrap_or(perpendicular);
                direction * MIN_SURFACE_DISTANCE
            } else {
                curved
            }
        })
        .collect();

    if let Some(last) = points.last_mut() {
        *last = Point3::ZERO;
    }
    points
}
