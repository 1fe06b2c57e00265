//! Simulation clock: time accumulator, time scale, and pause flag.
//!
//! The clock only turns real elapsed time into scaled simulated time.
//! Moving the bodies with that time is the orbit motion system's job.

use serde::{Deserialize, Serialize};

use neo_core::constants::MAX_FRAME_DELTA;
use neo_core::types::SimTime;

/// Global simulated time state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    pub time: SimTime,
    time_scale: f64,
    paused: bool,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl SimClock {
    /// Create a running clock. A non-positive scale falls back to 1.0.
    pub fn new(time_scale: f64) -> Self {
        Self {
            time: SimTime::default(),
            time_scale: if is_valid_scale(time_scale) {
                time_scale
            } else {
                1.0
            },
            paused: false,
        }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the time scale. Any finite positive value is accepted; anything
    /// else is rejected and leaves the scale unchanged.
    pub fn set_time_scale(&mut self, scale: f64) -> bool {
        if !is_valid_scale(scale) {
            return false;
        }
        self.time_scale = scale;
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance by one frame of `elapsed_real_secs` real time.
    ///
    /// Returns the scaled simulated delta, or `None` while paused (the
    /// accumulator does not move). The frame counter always advances.
    pub fn advance(&mut self, elapsed_real_secs: f64) -> Option<f64> {
        self.time.advance_frame();
        if self.paused {
            return None;
        }
        let scaled_delta = elapsed_real_secs * self.time_scale;
        self.time.accumulate(scaled_delta);
        Some(scaled_delta)
    }

    /// Zero the simulated time accumulator. Scale, pause, and the frame
    /// counter are untouched.
    pub fn reset(&mut self) {
        self.time.elapsed_secs = 0.0;
    }
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

/// Clamp a raw frame delta into [0, MAX_FRAME_DELTA]. Non-finite input
/// counts as zero.
pub fn clamp_frame_delta(elapsed_real_secs: f64) -> f64 {
    if elapsed_real_secs.is_finite() {
        elapsed_real_secs.clamp(0.0, MAX_FRAME_DELTA)
    } else {
        0.0
    }
}
