//! Run configuration for the headless runner.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use neo_sim::SimConfig;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid frame rate: {0} (must be positive)")]
    InvalidFrameRate(u32),

    #[error("invalid auto-trigger velocity: {0} km/s (must be positive and finite)")]
    InvalidVelocity(f64),
}

/// Send one body on a descent at a given frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoTrigger {
    pub body_id: String,
    pub velocity_km_s: f64,
    /// Frame at which the trigger is queued (0 = first frame).
    #[serde(default)]
    pub at_frame: u64,
}

/// Everything the runner needs besides the feed itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub sim: SimConfig,
    /// Frames per second of the loop.
    pub frame_rate: u32,
    /// Frames to run before stopping; 0 runs until shut down.
    pub frames: u64,
    /// Pace frames against the wall clock and feed the engine measured
    /// deltas. Otherwise every frame gets exactly `1 / frame_rate`.
    pub realtime: bool,
    pub auto_trigger: Option<AutoTrigger>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            frame_rate: 60,
            frames: 600,
            realtime: false,
            auto_trigger: None,
        }
    }
}

impl RunConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if let Some(trigger) = &self.auto_trigger {
            if !trigger.velocity_km_s.is_finite() || trigger.velocity_km_s <= 0.0 {
                return Err(ConfigError::InvalidVelocity(trigger.velocity_km_s));
            }
        }
        Ok(())
    }

    /// Nominal seconds per frame.
    pub fn frame_delta(&self) -> f64 {
        1.0 / f64::from(self.frame_rate.max(1))
    }
}
