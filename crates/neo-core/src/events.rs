//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;
use crate::reports::ConsequenceReport;

/// Discrete things that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A feed was loaded into the world.
    BodiesLoaded { count: usize, skipped: usize },
    /// A body became the dashboard selection.
    BodySelected { body_id: String },
    /// A descent started.
    ImpactStarted {
        body_id: String,
        velocity_km_s: f64,
        path_points: usize,
    },
    /// The descending body reached the target; report for the UI.
    ImpactArrived {
        body_id: String,
        report: ConsequenceReport,
    },
    /// A descent was cancelled and the body returned to orbit.
    ImpactAborted { body_id: String },
    /// Clock and phase angles were reset.
    SimulationReset,
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub frame: u64,
}
