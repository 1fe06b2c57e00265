//! Stylized hyperbolic flyby model.
//!
//! Positions come from the polar equation of a hyperbola with the focus at
//! the origin. This is a visual model, not an orbit propagator: there is no
//! gravity and no time-of-flight relation, just a phase angle swept by the
//! clock.

use neo_core::components::OrbitElements;
use neo_core::constants::{ASYMPTOTE_MARGIN, VISIBILITY_BOUND};
use neo_core::types::Point3;

/// Largest |true anomaly| used for sampling and traversal.
///
/// The asymptote sits at acos(-1/e); the margin keeps the arc short of it.
pub fn max_angle(eccentricity: f64) -> f64 {
    (-1.0 / eccentricity).acos() * ASYMPTOTE_MARGIN
}

/// Radial distance r = p(1+e) / (1 + e cos(theta)).
pub fn radial_distance(true_anomaly: f64, periapsis: f64, eccentricity: f64) -> f64 {
    periapsis * (1.0 + eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

/// Scene position for a phase angle, or `None` once the angle has left the
/// physical branch of the hyperbola (negative or non-finite radius).
///
/// The in-plane point is tilted by inclination about the x axis first,
/// then turned by the orbit rotation about the polar (y) axis. The two
/// rotations do not commute.
pub fn hyperbolic_position(
    true_anomaly: f64,
    periapsis: f64,
    eccentricity: f64,
    rotation: f64,
    inclination: f64,
) -> Option<Point3> {
    let r = radial_distance(true_anomaly, periapsis, eccentricity);
    if r < 0.0 || !r.is_finite() {
        return None;
    }

    let x = r * true_anomaly.cos();
    let z = r * true_anomaly.sin();

    // Inclination about the line of nodes (x axis); in-plane y is zero.
    let (sin_inc, cos_inc) = inclination.sin_cos();
    let y = -z * sin_inc;
    let z = z * cos_inc;

    // Orbit-plane rotation about the polar axis.
    let (sin_rot, cos_rot) = rotation.sin_cos();
    let final_x = x * cos_rot - z * sin_rot;
    let final_z = x * sin_rot + z * cos_rot;

    Some(Point3::new(final_x, y, final_z))
}

/// `hyperbolic_position` for a body's elements.
pub fn position(true_anomaly: f64, elements: &OrbitElements) -> Option<Point3> {
    hyperbolic_position(
        true_anomaly,
        elements.periapsis,
        elements.eccentricity,
        elements.rotation,
        elements.inclination,
    )
}

/// Sample the visible arc for drawing.
///
/// Samples `segments + 1` angles evenly over [-maxAngle, +maxAngle], keeping
/// only defined points inside the visibility bound, in order. A result with
/// fewer than two points means there is no curve to draw; that is a normal
/// outcome for near-degenerate parameter draws.
pub fn trajectory_curve(elements: &OrbitElements, segments: usize) -> Vec<Point3> {
    if segments == 0 {
        return Vec::new();
    }
    let limit = max_angle(elements.eccentricity);

    (0..=segments)
        .filter_map(|i| {
            let t = i as f64 / segments as f64;
            let angle = -limit + t * 2.0 * limit;
            position(angle, elements)
        })
        .filter(|p| p.is_finite() && p.length() < VISIBILITY_BOUND)
        .collect()
}
