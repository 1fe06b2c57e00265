//! User commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::types::NeoRecord;

/// All possible user actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Feed ---
    /// Replace the live body set with bodies built from feed records.
    LoadFeed { records: Vec<NeoRecord> },

    // --- Selection ---
    /// Select a body for the dashboard.
    SelectBody { body_id: String },
    /// Clear the current selection.
    Deselect,

    // --- Impact ---
    /// Send a body on a descent toward the target at the given velocity.
    TriggerImpact { body_id: String, velocity_km_s: f64 },

    // --- Time control ---
    /// Set time scale (1.0 = normal). Must be finite and positive.
    SetTimeScale { scale: f64 },
    /// Pause or resume the orbital clock.
    SetPaused { paused: bool },
    /// Zero the clock and return every body to its initial phase angle.
    Reset,
}
