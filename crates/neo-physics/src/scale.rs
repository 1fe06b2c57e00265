//! Log scaling from real distances to scene units.

use neo_core::constants::*;

/// Map a real distance (km) to scene units: log10 of the clamped distance.
pub fn scale_distance(real_distance_km: f64) -> f64 {
    real_distance_km.max(MIN_SCALED_DISTANCE_KM).log10()
}

/// Log-scaled Earth radius before the visual shrink factor.
pub fn scaled_earth_radius() -> f64 {
    scale_distance(EARTH_RADIUS_KM)
}

/// Periapsis in scene units for a given close-approach miss distance.
/// Always clears the rendered globe.
pub fn periapsis_for_miss_distance(miss_distance_km: f64) -> f64 {
    scale_distance(miss_distance_km) + EARTH_VISUAL_RADIUS + PERIAPSIS_CLEARANCE
}

/// Marker radius for a body of the given diameter.
pub fn visual_radius(diameter_m: f64) -> f64 {
    (diameter_m / VISUAL_RADIUS_DIVISOR).clamp(VISUAL_RADIUS_MIN, VISUAL_RADIUS_MAX)
}
