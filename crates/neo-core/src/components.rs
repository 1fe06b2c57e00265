//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Point3;

/// Identity and physical attributes of a near-Earth object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeoInfo {
    pub id: String,
    pub name: String,
    /// Mean of the feed's min/max diameter estimate (meters).
    pub diameter_m: f64,
    /// Relative velocity at close approach (km/s).
    pub velocity_km_s: f64,
    /// Close-approach miss distance (km).
    pub miss_distance_km: f64,
    pub hazardous: bool,
    /// Marker radius for the renderer (scene units).
    pub visual_radius: f64,
    /// Whether this body is currently selected in the dashboard.
    pub selected: bool,
}

/// Shape and orientation of a stylized hyperbolic flyby.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitElements {
    /// Closest-approach distance (scene units).
    pub periapsis: f64,
    /// Always > 1.
    pub eccentricity: f64,
    /// Rotation of the orbit plane about the polar axis (radians).
    pub rotation: f64,
    /// Tilt about the line of nodes (radians).
    pub inclination: f64,
}

/// Where along its arc a body currently is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbitPhase {
    /// Current true anomaly (radians).
    pub true_anomaly: f64,
    /// True anomaly restored on reset.
    pub initial_true_anomaly: f64,
    /// Angular speed before the periapsis boost (rad per simulated second).
    pub base_angular_speed: f64,
}

/// Current scene position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Point3);

/// Precomputed flyby curve for rendering. Only present when at least
/// two valid samples exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<Point3>,
}

/// Marks a body as advanced by the orbital clock (the managed set).
/// Removed when the body is handed to the impact animator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Orbiting;
