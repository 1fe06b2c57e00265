//! Simulation engine for the NEO impact simulator.
//!
//! Owns the hecs ECS world of near-Earth objects, advances their flyby
//! arcs on a pausable, rescalable clock, scripts impact descents, and
//! produces `SimSnapshot`s for the frontend.

pub mod animator;
pub mod clock;
pub mod engine;
pub mod impact_path;
pub mod orbit;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use neo_core as core;

#[cfg(test)]
mod proptest_orbit;
