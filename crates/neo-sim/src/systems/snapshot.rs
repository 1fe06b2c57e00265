//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use neo_core::components::*;
use neo_core::events::{Alert, SimEvent};
use neo_core::state::*;

use crate::animator::ImpactAnimator;
use crate::clock::SimClock;

/// Build a complete SimSnapshot from the current world state.
///
/// `arrived` is the view of a run that finished this frame; it takes the
/// place of the (already idle) animator slot.
pub fn build_snapshot(
    world: &World,
    clock: &SimClock,
    animator: &ImpactAnimator,
    arrived: Option<ImpactView>,
    events: Vec<SimEvent>,
    alerts: Vec<Alert>,
) -> SimSnapshot {
    SimSnapshot {
        time: clock.time,
        paused: clock.is_paused(),
        time_scale: clock.time_scale(),
        bodies: build_bodies(world),
        impact: arrived.unwrap_or_else(|| build_impact(animator)),
        events,
        alerts,
    }
}

/// Build BodyView list from every live body, orbiting or descending.
fn build_bodies(world: &World) -> Vec<BodyView> {
    let mut bodies: Vec<BodyView> = world
        .query::<(&NeoInfo, &Position, Option<&Trajectory>, Option<&Orbiting>)>()
        .iter()
        .map(|(_, (info, pos, trajectory, orbiting))| BodyView {
            id: info.id.clone(),
            name: info.name.clone(),
            position: pos.0,
            diameter_m: info.diameter_m,
            velocity_km_s: info.velocity_km_s,
            miss_distance_km: info.miss_distance_km,
            hazardous: info.hazardous,
            visual_radius: info.visual_radius,
            selected: info.selected,
            orbiting: orbiting.is_some(),
            trajectory: trajectory.map(|t| t.points.clone()).unwrap_or_default(),
        })
        .collect();

    bodies.sort_by(|a, b| a.id.cmp(&b.id));
    bodies
}

/// Build ImpactView from the animator slot.
fn build_impact(animator: &ImpactAnimator) -> ImpactView {
    match animator.run() {
        Some(run) => ImpactView {
            phase: animator.phase(),
            body_id: Some(run.body_id.clone()),
            progress: run.progress,
            path: run.path.clone(),
        },
        None => ImpactView {
            phase: animator.phase(),
            ..ImpactView::default()
        },
    }
}
