//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D point in scene space (scaled units, Earth at the origin).
/// y = polar axis, x/z = horizontal plane.
pub type Point3 = glam::DVec3;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of engine frames processed (increments even while paused).
    pub frame: u64,
    /// Accumulated simulated time in seconds (scaled, excludes paused frames).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance the frame counter by one.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Add scaled simulated seconds to the accumulator.
    pub fn accumulate(&mut self, scaled_delta: f64) {
        self.elapsed_secs += scaled_delta;
    }
}

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One near-Earth object as delivered by the feed collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub diameter_min_meters: f64,
    pub diameter_max_meters: f64,
    pub velocity_km_per_sec: f64,
    pub miss_distance_km: f64,
    #[serde(alias = "isPotentiallyHazardous")]
    pub potentially_hazardous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_approach_date: Option<String>,
}

impl NeoRecord {
    /// Mean of the min/max diameter estimates (meters).
    pub fn average_diameter_m(&self) -> f64 {
        (self.diameter_min_meters + self.diameter_max_meters) / 2.0
    }

    /// Whether the physical inputs are usable by the consequence model
    /// (finite, strictly positive diameter and velocity, finite miss distance).
    pub fn is_physical(&self) -> bool {
        let diameter = self.average_diameter_m();
        diameter.is_finite()
            && diameter > 0.0
            && self.velocity_km_per_sec.is_finite()
            && self.velocity_km_per_sec > 0.0
            && self.miss_distance_km.is_finite()
    }
}
