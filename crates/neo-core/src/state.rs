//! Simulation snapshot: the complete visible state sent to the frontend each frame.

use serde::{Deserialize, Serialize};

use crate::enums::ImpactPhase;
use crate::events::{Alert, SimEvent};
use crate::types::{Point3, SimTime};

/// Complete simulation state broadcast to the frontend after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub time_scale: f64,
    pub bodies: Vec<BodyView>,
    pub impact: ImpactView,
    pub events: Vec<SimEvent>,
    pub alerts: Vec<Alert>,
}

/// A live body in the scene.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyView {
    pub id: String,
    pub name: String,
    pub position: Point3,
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub miss_distance_km: f64,
    pub hazardous: bool,
    pub visual_radius: f64,
    pub selected: bool,
    /// False for the body currently descending.
    pub orbiting: bool,
    /// Flyby curve; empty when the body has none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trajectory: Vec<Point3>,
}

/// Impact animator status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImpactView {
    pub phase: ImpactPhase,
    pub body_id: Option<String>,
    /// Fraction of the descent path covered (0.0 - 1.0).
    pub progress: f64,
    /// Descent path for the red dashed line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Point3>,
}
