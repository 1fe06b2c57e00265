//! Energy and consequence scaling laws.
//!
//! Inputs are assumed physically sensible (positive diameter and velocity).
//! Validation happens where feed data enters the engine, not here.

use neo_core::constants::*;
use neo_core::reports::{ConsequenceReport, EnergyPreview};

use crate::benchmarks::nearest_benchmark;

/// Mass of a spherical body of the given diameter at asteroid density (kg).
pub fn estimate_mass(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    ASTEROID_DENSITY_KG_M3 * volume
}

/// Kinetic energy at impact (J).
pub fn kinetic_energy(diameter_m: f64, velocity_km_s: f64) -> f64 {
    let mass = estimate_mass(diameter_m);
    let velocity_m_s = velocity_km_s * 1000.0;
    0.5 * mass * velocity_m_s * velocity_m_s
}

/// Energy expressed in megatons of TNT.
pub fn to_megatons(energy_j: f64) -> f64 {
    energy_j / JOULES_PER_MEGATON
}

/// Final crater diameter (km): 0.074 * Mt^0.29.
pub fn crater_diameter_km(energy_j: f64) -> f64 {
    0.074 * to_megatons(energy_j).powf(0.29)
}

/// Richter-like magnitude of the induced ground shaking.
///
/// Only `SEISMIC_EFFICIENCY` of the energy is assumed to become seismic
/// energy, then `M = (log10(Es) - 4.8) / 1.5`. This is an approximation,
/// not a physical derivation.
pub fn earthquake_magnitude(energy_j: f64) -> f64 {
    let seismic_energy = energy_j * SEISMIC_EFFICIENCY;
    (seismic_energy.log10() - 4.8) / 1.5
}

/// Radius of severe blast destruction (km): 1.4 * Mt^(1/3).
pub fn destruction_radius_km(energy_j: f64) -> f64 {
    1.4 * to_megatons(energy_j).cbrt()
}

/// Energy in units of the Hiroshima bomb yield.
pub fn hiroshima_equivalents(energy_j: f64) -> f64 {
    energy_j / HIROSHIMA_JOULES
}

/// Dashboard readout for a body at a chosen velocity.
pub fn energy_preview(diameter_m: f64, velocity_km_s: f64) -> EnergyPreview {
    let kinetic_energy_j = kinetic_energy(diameter_m, velocity_km_s);
    EnergyPreview {
        velocity_km_s,
        kinetic_energy_j,
        hiroshima_equivalents: hiroshima_equivalents(kinetic_energy_j),
    }
}

/// Full consequence report for a (diameter, velocity) pair.
pub fn consequence_report(diameter_m: f64, velocity_km_s: f64) -> ConsequenceReport {
    let energy = kinetic_energy(diameter_m, velocity_km_s);
    let benchmark = nearest_benchmark(energy);

    ConsequenceReport {
        diameter_m,
        velocity_km_s,
        kinetic_energy_j: energy,
        hiroshima_equivalents: hiroshima_equivalents(energy),
        crater_diameter_km: crater_diameter_km(energy),
        earthquake_magnitude: earthquake_magnitude(energy),
        destruction_radius_km: destruction_radius_km(energy),
        benchmark_name: benchmark.name.to_string(),
        benchmark_description: benchmark.description.to_string(),
    }
}
