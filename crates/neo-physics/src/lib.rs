//! Physical consequence models for the NEO impact simulator.
//!
//! Pure functions only: energy and consequence scaling laws, the
//! historical benchmark table, ground damage zones, and display formatting.
//! No ECS dependency; operates on plain data.

pub mod area;
pub mod benchmarks;
pub mod consequence;
pub mod format;
pub mod scale;

pub use consequence::{consequence_report, energy_preview, kinetic_energy};
