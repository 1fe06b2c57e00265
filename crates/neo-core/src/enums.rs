//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Impact animator lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactPhase {
    /// No descent in progress; triggers are accepted.
    #[default]
    Idle,
    /// A body is following its descent path.
    Running,
    /// The body reached the target this frame. Only the arrival frame's
    /// snapshot carries it; the next one is `Idle`.
    Arrived,
}

/// Alert severity for the UI alert queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

/// Ground damage zone around an impact point, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageZone {
    Thermal,
    Pressure,
    Shrapnel,
}

/// Infrastructure category used for affected-site tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfrastructureKind {
    Medical,
    Education,
    Industrial,
    Agricultural,
    Other,
}

impl InfrastructureKind {
    /// Map a raw map tag value (amenity / landuse / building) to a category.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "hospital" | "clinic" | "doctors" => Self::Medical,
            "school" | "university" | "kindergarten" => Self::Education,
            "industrial" | "factory" | "warehouse" => Self::Industrial,
            "farm" | "farmland" | "farmyard" => Self::Agricultural,
            _ => Self::Other,
        }
    }
}
