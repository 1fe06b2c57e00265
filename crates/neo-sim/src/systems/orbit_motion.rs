//! Orbit motion system.
//!
//! Sweeps every managed body (`Orbiting`) along its flyby arc by a scaled
//! time delta and re-places it with the orbit model. Bodies handed to the
//! impact animator have no `Orbiting` marker and are never touched here.

use hecs::World;

use neo_core::components::{OrbitElements, OrbitPhase, Orbiting, Position};
use neo_core::constants::CLOCK_DISTANCE_FLOOR;

use crate::orbit;

/// Advance all managed bodies by `scaled_delta` simulated seconds.
///
/// Angular speed is boosted near periapsis:
/// `base * (1 + sqrt(periapsis / max(r, floor)))`. A phase past `+maxAngle`
/// wraps to `-maxAngle` so the body re-enters from the far end of its arc.
pub fn run(world: &mut World, scaled_delta: f64) {
    for (_entity, (phase, elements, pos, _orbiting)) in
        world.query_mut::<(&mut OrbitPhase, &OrbitElements, &mut Position, &Orbiting)>()
    {
        let current_r = pos.0.length();
        let speed_factor = (elements.periapsis / current_r.max(CLOCK_DISTANCE_FLOOR)).sqrt();

        phase.true_anomaly += phase.base_angular_speed * (1.0 + speed_factor) * scaled_delta;

        let limit = orbit::max_angle(elements.eccentricity);
        if phase.true_anomaly > limit {
            phase.true_anomaly = -limit;
        }

        // An undefined position keeps the body where it was this frame.
        if let Some(next) = orbit::position(phase.true_anomaly, elements) {
            pos.0 = next;
        }
    }
}

/// Return every managed body to its initial phase angle and position.
pub fn reset_phases(world: &mut World) {
    for (_entity, (phase, elements, pos, _orbiting)) in
        world.query_mut::<(&mut OrbitPhase, &OrbitElements, &mut Position, &Orbiting)>()
    {
        phase.true_anomaly = phase.initial_true_anomaly;
        if let Some(initial) = orbit::position(phase.true_anomaly, elements) {
            pos.0 = initial;
        }
    }
}
