//! Entity spawn factories for populating the simulation world from feed data.
//!
//! Each feed record becomes one body entity with a randomly drawn flyby
//! (eccentricity, plane rotation, inclination, starting phase, speed).

use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use neo_core::components::*;
use neo_core::constants::*;
use neo_core::types::NeoRecord;
use neo_physics::scale::{periapsis_for_miss_distance, visual_radius};

use crate::orbit;

/// Result of loading a feed into the world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnSummary {
    pub spawned: usize,
    /// Records rejected for non-physical diameter/velocity/miss distance,
    /// or for repeating an id already spawned.
    pub skipped: usize,
}

/// Spawn one body per usable record. Records are drawn from `rng` in
/// order, so the same seed and feed always produce the same world.
/// Only the first record with a given id is spawned.
pub fn spawn_bodies(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    records: &[NeoRecord],
    trajectory_samples: usize,
) -> SpawnSummary {
    let mut summary = SpawnSummary::default();
    let mut seen = HashSet::new();
    for record in records {
        if record.is_physical() && seen.insert(record.id.as_str()) {
            spawn_body(world, rng, record, trajectory_samples);
            summary.spawned += 1;
        } else {
            summary.skipped += 1;
        }
    }
    summary
}

/// Spawn a single body on a fresh random flyby.
pub fn spawn_body(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    record: &NeoRecord,
    trajectory_samples: usize,
) -> hecs::Entity {
    let diameter_m = record.average_diameter_m();
    let elements = random_elements(rng, record.miss_distance_km);

    let limit = orbit::max_angle(elements.eccentricity);
    let initial = -limit + rng.gen::<f64>() * limit * INITIAL_PHASE_SPREAD;
    let phase = OrbitPhase {
        true_anomaly: initial,
        initial_true_anomaly: initial,
        base_angular_speed: rng.gen_range(ANGULAR_SPEED_MIN..ANGULAR_SPEED_MAX),
    };

    let info = NeoInfo {
        id: record.id.clone(),
        name: record.name.clone(),
        diameter_m,
        velocity_km_s: record.velocity_km_per_sec,
        miss_distance_km: record.miss_distance_km,
        hazardous: record.potentially_hazardous,
        visual_radius: visual_radius(diameter_m),
        selected: false,
    };

    let position = orbit::position(phase.true_anomaly, &elements).unwrap_or_default();
    let entity = world.spawn((info, elements, phase, Position(position), Orbiting));

    let points = orbit::trajectory_curve(&elements, trajectory_samples);
    if points.len() >= 2 {
        // Entity was just spawned, so insertion cannot fail.
        let _ = world.insert_one(entity, Trajectory { points });
    }

    entity
}

/// Draw flyby elements for a body with the given miss distance.
fn random_elements(rng: &mut ChaCha8Rng, miss_distance_km: f64) -> OrbitElements {
    OrbitElements {
        periapsis: periapsis_for_miss_distance(miss_distance_km),
        eccentricity: rng.gen_range(ECCENTRICITY_MIN..ECCENTRICITY_MAX),
        rotation: rng.gen_range(0.0..TAU),
        inclination: (rng.gen::<f64>() - 0.5) * PI * INCLINATION_SPREAD,
    }
}
