//! Impact animator: drives one body along its descent path.
//!
//! State machine: `Idle -> Running -> Arrived -> Idle`. `Arrived` is not
//! stored; `tick` hands the finished run back to the caller, which reports
//! it in that frame's snapshot, and the animator is `Idle` again before it
//! returns. At most one run exists.
//! Stored as a named slot in `SimulationEngine`, NOT as an ECS component.

use hecs::Entity;

use neo_core::constants::*;
use neo_core::enums::ImpactPhase;
use neo_core::types::Point3;

use crate::impact_path;

/// A descent in progress.
#[derive(Debug, Clone)]
pub struct ImpactRun {
    /// The hecs entity of the descending body.
    pub target: Entity,
    pub body_id: String,
    /// Body diameter, carried for the consequence report.
    pub diameter_m: f64,
    /// Impact velocity chosen at trigger time (km/s).
    pub velocity_km_s: f64,
    /// Precomputed descent path; last point is the origin.
    pub path: Vec<Point3>,
    /// Fraction of the path covered, in [0, 1].
    pub progress: f64,
    /// Progress per second before the proximity boost.
    pub base_speed: f64,
    /// Current position along the path.
    pub position: Point3,
}

/// Why a trigger was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerRejection {
    /// Another body is already descending.
    AlreadyRunning,
    /// Velocity was zero, negative, or not finite.
    InvalidVelocity,
}

/// Outcome of one animator tick.
#[derive(Debug, Clone)]
pub enum ImpactStep {
    /// Nothing is running.
    Idle,
    /// The body moved to a new position and is still descending.
    Moved(Point3),
    /// The body reached the target. The animator is `Idle` again.
    Arrived(ImpactRun),
}

#[derive(Debug, Clone, Default)]
enum AnimatorState {
    #[default]
    Idle,
    Running(ImpactRun),
}

/// Single-slot impact driver.
#[derive(Debug, Clone)]
pub struct ImpactAnimator {
    state: AnimatorState,
    /// Physical radius of the target; crossing it counts as arrival.
    target_radius: f64,
    /// Segments per generated descent path.
    path_points: usize,
}

impl Default for ImpactAnimator {
    fn default() -> Self {
        Self::new(EARTH_VISUAL_RADIUS, IMPACT_PATH_POINTS)
    }
}

impl ImpactAnimator {
    pub fn new(target_radius: f64, path_points: usize) -> Self {
        Self {
            state: AnimatorState::Idle,
            target_radius,
            path_points,
        }
    }

    pub fn phase(&self) -> ImpactPhase {
        match self.state {
            AnimatorState::Idle => ImpactPhase::Idle,
            AnimatorState::Running(_) => ImpactPhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running(_))
    }

    /// The active run, if any.
    pub fn run(&self) -> Option<&ImpactRun> {
        match &self.state {
            AnimatorState::Idle => None,
            AnimatorState::Running(run) => Some(run),
        }
    }

    /// `Idle -> Running`. Builds the descent path from `start`.
    ///
    /// Rejected (state unchanged) while another run is active or when the
    /// velocity is unusable. Requests are never queued.
    pub fn trigger(
        &mut self,
        target: Entity,
        body_id: &str,
        diameter_m: f64,
        start: Point3,
        velocity_km_s: f64,
    ) -> Result<(), TriggerRejection> {
        if self.is_running() {
            return Err(TriggerRejection::AlreadyRunning);
        }
        if !velocity_km_s.is_finite() || velocity_km_s <= 0.0 {
            return Err(TriggerRejection::InvalidVelocity);
        }

        self.state = AnimatorState::Running(ImpactRun {
            target,
            body_id: body_id.to_string(),
            diameter_m,
            velocity_km_s,
            path: impact_path::generate(start, self.path_points),
            progress: 0.0,
            base_speed: velocity_km_s * IMPACT_SPEED_PER_KM_S,
            position: start,
        });
        Ok(())
    }

    /// Advance the run by `delta` seconds.
    ///
    /// The body speeds up as it nears the target:
    /// `multiplier = 1 + 2 / max(distance, 0.5)`, using the distance before
    /// this tick's move. Arrival fires when progress reaches 1 or the body
    /// dips inside the target radius, whichever comes first.
    pub fn tick(&mut self, delta: f64) -> ImpactStep {
        let AnimatorState::Running(run) = &mut self.state else {
            return ImpactStep::Idle;
        };

        let distance = run.position.length();
        let speed_multiplier =
            1.0 + IMPACT_ACCELERATION_GAIN / distance.max(IMPACT_DISTANCE_FLOOR);

        run.progress = (run.progress + run.base_speed * speed_multiplier * delta).min(1.0);
        run.position = point_along(&run.path, run.progress);

        if run.progress >= 1.0 || run.position.length() < self.target_radius {
            match std::mem::take(&mut self.state) {
                AnimatorState::Running(run) => ImpactStep::Arrived(run),
                AnimatorState::Idle => ImpactStep::Idle,
            }
        } else {
            ImpactStep::Moved(run.position)
        }
    }

    /// Abort the active run, if any, and return it. The animator is `Idle`
    /// afterwards.
    pub fn cancel(&mut self) -> Option<ImpactRun> {
        match std::mem::take(&mut self.state) {
            AnimatorState::Running(run) => Some(run),
            AnimatorState::Idle => None,
        }
    }
}

/// Linear interpolation between the two path points bracketing
/// `progress * (len - 1)`.
pub fn point_along(path: &[Point3], progress: f64) -> Point3 {
    let Some(last) = path.last() else {
        return Point3::ZERO;
    };
    let scaled = progress.clamp(0.0, 1.0) * (path.len() - 1) as f64;
    let index = scaled.floor() as usize;

    if index + 1 < path.len() {
        let fraction = scaled - index as f64;
        path[index].lerp(path[index + 1], fraction)
    } else {
        *last
    }
}
