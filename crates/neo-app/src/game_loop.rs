//! Frame loop thread: runs the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via an `mpsc` channel. The latest snapshot is stored in shared
//! state for polling from other threads.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use neo_core::commands::SimCommand;
use neo_core::events::{Alert, SimEvent};
use neo_core::state::SimSnapshot;
use neo_sim::SimulationEngine;

use crate::config::RunConfig;
use crate::state::LoopCommand;

#[derive(thiserror::Error, Debug)]
pub enum LoopError {
    #[error("failed to spawn simulation thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("simulation loop is already running")]
    AlreadyRunning,

    #[error("simulation loop is not running")]
    NotRunning,

    #[error("simulation loop has stopped accepting commands")]
    Disconnected,

    #[error("simulation thread panicked")]
    Panicked,

    #[error("shared state lock poisoned")]
    Poisoned,
}

/// What happened over a whole run, collected frame by frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames_run: u64,
    pub events: Vec<SimEvent>,
    pub alerts: Vec<Alert>,
}

impl RunSummary {
    fn record(&mut self, snapshot: &SimSnapshot) {
        self.frames_run += 1;
        self.events.extend(snapshot.events.iter().cloned());
        self.alerts.extend(snapshot.alerts.iter().cloned());
    }
}

/// Spawns the frame loop in a new thread.
///
/// `initial` commands are applied on the first frame, ahead of anything
/// sent over the channel. Returns the command sender and the handle
/// yielding the run summary.
pub fn spawn_sim_loop(
    config: RunConfig,
    initial: Vec<SimCommand>,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<RunSummary>), LoopError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("neo-sim-loop".into())
        .spawn(move || run_sim_loop(&config, initial, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until the frame budget is spent, a Shutdown
/// command arrives, or the channel disconnects.
pub fn run_sim_loop(
    config: &RunConfig,
    initial: Vec<SimCommand>,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(config.sim.clone());
    engine.queue_commands(initial);
    let mut summary = RunSummary::default();

    let frame_duration = Duration::from_secs_f64(config.frame_delta());
    let mut next_frame_time = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Sim(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return summary,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summary,
            }
        }

        // 2. Scheduled trigger
        if let Some(trigger) = &config.auto_trigger {
            if trigger.at_frame == summary.frames_run {
                engine.queue_command(SimCommand::TriggerImpact {
                    body_id: trigger.body_id.clone(),
                    velocity_km_s: trigger.velocity_km_s,
                });
            }
        }

        // 3. Advance one frame
        let delta = if config.realtime {
            let now = Instant::now();
            let elapsed = now - last_frame;
            last_frame = now;
            elapsed.as_secs_f64()
        } else {
            config.frame_delta()
        };
        let snapshot = engine.tick(delta);
        summary.record(&snapshot);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if config.frames > 0 && summary.frames_run >= config.frames {
            return summary;
        }

        // 5. Sleep until next frame
        if config.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind; skip ahead instead of catching up.
                next_frame_time = now;
            }
        }
    }
}
