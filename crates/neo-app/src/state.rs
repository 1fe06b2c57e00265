//! Application state shared between the caller and the frame loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use neo_core::commands::SimCommand;
use neo_core::state::SimSnapshot;

use crate::config::RunConfig;
use crate::game_loop::{self, LoopError, RunSummary};

/// Commands sent to the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A command to forward to the simulation engine.
    Sim(SimCommand),
    /// Shut down the frame loop thread gracefully.
    Shutdown,
}

/// Handle to a (possibly running) frame loop.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state can be shared
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the loop thread
pub struct AppState {
    /// Channel sender to the loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot, updated by the loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
    handle: Mutex<Option<JoinHandle<RunSummary>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the frame loop with `initial` commands applied on its first
    /// frame. Only one loop may run per state.
    pub fn start(&self, config: RunConfig, initial: Vec<SimCommand>) -> Result<(), LoopError> {
        let mut handle = self.handle.lock().map_err(|_| LoopError::Poisoned)?;
        if handle.is_some() {
            return Err(LoopError::AlreadyRunning);
        }

        let (tx, join) = game_loop::spawn_sim_loop(config, initial, Arc::clone(&self.latest_snapshot))?;
        *self.command_tx.lock().map_err(|_| LoopError::Poisoned)? = Some(tx);
        *handle = Some(join);
        Ok(())
    }

    /// Forward a command to the engine for the next frame.
    pub fn send_command(&self, command: SimCommand) -> Result<(), LoopError> {
        self.send(LoopCommand::Sim(command))
    }

    /// Latest published snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<SimSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Wait for the loop to finish on its own and return its summary.
    pub fn wait(&self) -> Result<RunSummary, LoopError> {
        let join = self
            .handle
            .lock()
            .map_err(|_| LoopError::Poisoned)?
            .take()
            .ok_or(LoopError::NotRunning)?;
        let summary = join.join().map_err(|_| LoopError::Panicked)?;

        if let Ok(mut tx) = self.command_tx.lock() {
            *tx = None;
        }
        Ok(summary)
    }

    /// Ask the loop to stop, then wait for it.
    pub fn shutdown(&self) -> Result<RunSummary, LoopError> {
        // A loop that already finished has dropped its receiver.
        match self.send(LoopCommand::Shutdown) {
            Ok(()) | Err(LoopError::Disconnected) => {}
            Err(err) => return Err(err),
        }
        self.wait()
    }

    fn send(&self, command: LoopCommand) -> Result<(), LoopError> {
        let tx = self.command_tx.lock().map_err(|_| LoopError::Poisoned)?;
        tx.as_ref()
            .ok_or(LoopError::NotRunning)?
            .send(command)
            .map_err(|_| LoopError::Disconnected)
    }
}
