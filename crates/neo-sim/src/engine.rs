//! Simulation engine: the single controller for the NEO scene.
//!
//! `SimulationEngine` owns the hecs ECS world, processes queued commands,
//! runs the clock and the impact animator, and produces `SimSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use neo_core::commands::SimCommand;
use neo_core::components::{NeoInfo, OrbitElements, Orbiting, Position, Trajectory};
use neo_core::constants::*;
use neo_core::enums::{AlertLevel, ImpactPhase};
use neo_core::events::{Alert, SimEvent};
use neo_core::reports::{ConsequenceReport, EnergyPreview};
use neo_core::state::{ImpactView, SimSnapshot};
use neo_core::types::{NeoRecord, Point3};

use crate::animator::{ImpactAnimator, ImpactRun, ImpactStep, TriggerRejection};
use crate::clock::{self, SimClock};
use crate::orbit;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Segments sampled per flyby curve.
    pub trajectory_samples: usize,
    /// Segments per impact descent path.
    pub impact_path_points: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            trajectory_samples: TRAJECTORY_SAMPLES,
            impact_path_points: IMPACT_PATH_POINTS,
        }
    }
}

/// Body lookup result copied out of the world.
struct BodyHandle {
    entity: Entity,
    diameter_m: f64,
    position: Point3,
    orbiting: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    clock: SimClock,
    animator: ImpactAnimator,
    /// Consequence reports of arrived bodies, keyed by body id.
    reports: HashMap<String, ConsequenceReport>,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
    alerts: VecDeque<Alert>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            clock: SimClock::new(config.time_scale),
            animator: ImpactAnimator::new(EARTH_VISUAL_RADIUS, config.impact_path_points),
            reports: HashMap::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            alerts: VecDeque::new(),
            config,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `elapsed_real_secs` and return
    /// the resulting snapshot.
    ///
    /// Order: queued commands, clock + orbit motion (scaled, skipped while
    /// paused), then the impact animator on the clamped real delta.
    /// The snapshot of the arrival frame reports `ImpactPhase::Arrived`.
    pub fn tick(&mut self, elapsed_real_secs: f64) -> SimSnapshot {
        self.process_commands();

        let delta = clock::clamp_frame_delta(elapsed_real_secs);
        if let Some(scaled_delta) = self.clock.advance(delta) {
            systems::orbit_motion::run(&mut self.world, scaled_delta);
        }
        let arrived = self.advance_impact(delta);

        let events = std::mem::take(&mut self.events);
        let alerts = self.alerts.drain(..).collect();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            &self.animator,
            arrived,
            events,
            alerts,
        )
    }

    /// Replace every body with one spawned from each usable record.
    /// Any running descent is dropped along with its body.
    pub fn load_feed(&mut self, records: &[NeoRecord]) {
        self.animator.cancel();
        self.world.clear();
        self.reports.clear();

        let summary = world_setup::spawn_bodies(
            &mut self.world,
            &mut self.rng,
            records,
            self.config.trajectory_samples,
        );
        if summary.skipped > 0 {
            self.alert(
                AlertLevel::Warning,
                format!(
                    "Skipped {} feed record(s) with non-physical values or duplicate ids",
                    summary.skipped
                ),
            );
        }
        self.events.push(SimEvent::BodiesLoaded {
            count: summary.spawned,
            skipped: summary.skipped,
        });
    }

    /// Make `body_id` the single selected body. Unknown ids leave the
    /// current selection in place.
    pub fn select_body(&mut self, body_id: &str) -> bool {
        if self.find_body(body_id).is_none() {
            self.alert(AlertLevel::Warning, format!("Unknown body {body_id}"));
            return false;
        }
        for (_entity, info) in self.world.query_mut::<&mut NeoInfo>() {
            info.selected = info.id == body_id;
        }
        self.events.push(SimEvent::BodySelected {
            body_id: body_id.to_string(),
        });
        true
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        for (_entity, info) in self.world.query_mut::<&mut NeoInfo>() {
            info.selected = false;
        }
    }

    /// Start a descent for `body_id` at `velocity_km_s`.
    ///
    /// An unknown id, a body that is already descending, an active run, or
    /// an unusable velocity is a no-op apart from a warning alert.
    pub fn trigger_impact(&mut self, body_id: &str, velocity_km_s: f64) -> bool {
        let Some(body) = self.find_body(body_id) else {
            self.alert(
                AlertLevel::Warning,
                format!("Cannot trigger impact: unknown body {body_id}"),
            );
            return false;
        };
        if !body.orbiting {
            self.alert(
                AlertLevel::Warning,
                format!("Cannot trigger impact: {body_id} is already descending"),
            );
            return false;
        }

        let triggered = self.animator.trigger(
            body.entity,
            body_id,
            body.diameter_m,
            body.position,
            velocity_km_s,
        );
        if let Err(rejection) = triggered {
            let reason = match rejection {
                TriggerRejection::AlreadyRunning => "another impact is in progress",
                TriggerRejection::InvalidVelocity => "velocity must be positive and finite",
            };
            self.alert(
                AlertLevel::Warning,
                format!("Cannot trigger impact for {body_id}: {reason}"),
            );
            return false;
        }

        // Hand the body from the clock to the animator.
        let _ = self.world.remove_one::<Orbiting>(body.entity);
        let _ = self.world.remove_one::<Trajectory>(body.entity);
        self.deselect();

        let path_points = self.animator.run().map_or(0, |run| run.path.len());
        self.events.push(SimEvent::ImpactStarted {
            body_id: body_id.to_string(),
            velocity_km_s,
            path_points,
        });
        true
    }

    /// Set the clock's time scale. Non-positive or non-finite values are
    /// rejected with a warning alert.
    pub fn set_time_scale(&mut self, scale: f64) -> bool {
        if self.clock.set_time_scale(scale) {
            return true;
        }
        self.alert(
            AlertLevel::Warning,
            format!("Rejected time scale {scale}: must be positive and finite"),
        );
        false
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.clock.set_paused(paused);
    }

    /// Zero the clock and return every body to its initial phase.
    ///
    /// A running descent is aborted first and its body rejoins the orbiting
    /// set. Calling this twice leaves the same state as calling it once.
    pub fn reset(&mut self) {
        if let Some(run) = self.animator.cancel() {
            self.restore_to_orbit(&run);
            self.alert(
                AlertLevel::Info,
                format!("Impact of {} aborted by reset", run.body_id),
            );
            self.events.push(SimEvent::ImpactAborted {
                body_id: run.body_id,
            });
        }
        self.clock.reset();
        systems::orbit_motion::reset_phases(&mut self.world);
        self.events.push(SimEvent::SimulationReset);
    }

    /// Energy the body would deliver at `velocity_km_s`, for the trigger
    /// dialog. `None` for unknown ids.
    pub fn energy_preview(&self, body_id: &str, velocity_km_s: f64) -> Option<EnergyPreview> {
        self.find_body(body_id)
            .map(|body| neo_physics::energy_preview(body.diameter_m, velocity_km_s))
    }

    /// Cached consequence report of an arrived body.
    pub fn report(&self, body_id: &str) -> Option<&ConsequenceReport> {
        self.reports.get(body_id)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn animator(&self) -> &ImpactAnimator {
        &self.animator
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::LoadFeed { records } => self.load_feed(&records),
            SimCommand::SelectBody { body_id } => {
                self.select_body(&body_id);
            }
            SimCommand::Deselect => self.deselect(),
            SimCommand::TriggerImpact {
                body_id,
                velocity_km_s,
            } => {
                self.trigger_impact(&body_id, velocity_km_s);
            }
            SimCommand::SetTimeScale { scale } => {
                self.set_time_scale(scale);
            }
            SimCommand::SetPaused { paused } => self.set_paused(paused),
            SimCommand::Reset => self.reset(),
        }
    }

    /// Step the animator and apply its outcome to the world. Returns the
    /// arrival view on the frame the body reaches the target.
    fn advance_impact(&mut self, delta: f64) -> Option<ImpactView> {
        match self.animator.tick(delta) {
            ImpactStep::Idle => None,
            ImpactStep::Moved(position) => {
                if let Some(run) = self.animator.run() {
                    if let Ok(pos) = self.world.query_one_mut::<&mut Position>(run.target) {
                        pos.0 = position;
                    }
                }
                None
            }
            ImpactStep::Arrived(run) => Some(self.complete_impact(run)),
        }
    }

    /// Arrival: cache the report, announce it, and remove the body.
    fn complete_impact(&mut self, run: ImpactRun) -> ImpactView {
        let view = ImpactView {
            phase: ImpactPhase::Arrived,
            body_id: Some(run.body_id.clone()),
            progress: 1.0,
            path: run.path,
        };
        let report = neo_physics::consequence_report(run.diameter_m, run.velocity_km_s);
        self.reports.insert(run.body_id.clone(), report.clone());

        self.alert(
            AlertLevel::Critical,
            format!(
                "{} impacted: {:.0} Hiroshima equivalents",
                run.body_id, report.hiroshima_equivalents
            ),
        );
        self.events.push(SimEvent::ImpactArrived {
            body_id: run.body_id,
            report,
        });

        let _ = self.world.despawn(run.target);
        view
    }

    /// Return an aborted body to the orbiting set with a fresh curve.
    fn restore_to_orbit(&mut self, run: &ImpactRun) {
        let Ok(elements) = self.world.get::<&OrbitElements>(run.target).map(|e| *e) else {
            return;
        };
        let _ = self.world.insert_one(run.target, Orbiting);

        let points = orbit::trajectory_curve(&elements, self.config.trajectory_samples);
        if points.len() >= 2 {
            let _ = self.world.insert_one(run.target, Trajectory { points });
        }
    }

    fn find_body(&self, body_id: &str) -> Option<BodyHandle> {
        self.world
            .query::<(&NeoInfo, &Position, Option<&Orbiting>)>()
            .iter()
            .find(|(_, (info, _, _))| info.id == body_id)
            .map(|(entity, (info, pos, orbiting))| BodyHandle {
                entity,
                diameter_m: info.diameter_m,
                position: pos.0,
                orbiting: orbiting.is_some(),
            })
    }

    /// Append an alert, dropping the oldest once the queue is full.
    fn alert(&mut self, level: AlertLevel, message: String) {
        if self.alerts.len() >= MAX_PENDING_ALERTS {
            self.alerts.pop_front();
        }
        self.alerts.push_back(Alert {
            level,
            message,
            frame: self.clock.time.frame,
        });
    }
}
