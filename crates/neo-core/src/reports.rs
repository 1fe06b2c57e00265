//! Derived physical-consequence and impact-area reports.
//!
//! All reports are immutable snapshots computed on demand; they carry
//! everything the report-rendering collaborator needs.

use serde::{Deserialize, Serialize};

use crate::enums::{DamageZone, InfrastructureKind};

/// Consequences of a body striking the ground, derived from size and speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsequenceReport {
    pub diameter_m: f64,
    pub velocity_km_s: f64,
    pub kinetic_energy_j: f64,
    pub hiroshima_equivalents: f64,
    pub crater_diameter_km: f64,
    pub earthquake_magnitude: f64,
    pub destruction_radius_km: f64,
    pub benchmark_name: String,
    pub benchmark_description: String,
}

/// Energy readout for the selection dashboard before an impact is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyPreview {
    pub velocity_km_s: f64,
    pub kinetic_energy_j: f64,
    pub hiroshima_equivalents: f64,
}

/// Ground damage-zone radii around an impact point (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageRadii {
    pub thermal_km: f64,
    pub pressure_km: f64,
    pub shrapnel_km: f64,
}

/// A mapped facility near the impact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureSite {
    /// Raw tag value (e.g. "hospital", "farmland").
    #[serde(rename = "type")]
    pub site_type: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A site annotated with its distance from the impact point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedSite {
    #[serde(flatten)]
    pub site: InfrastructureSite,
    pub kind: InfrastructureKind,
    pub distance_km: f64,
    pub zone: DamageZone,
}

/// Ground-truth infrastructure report for one impact location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAreaReport {
    pub latitude: f64,
    pub longitude: f64,
    pub kinetic_energy_joules: f64,
    pub radii: DamageRadii,
    pub search_radius_m: f64,
    pub hospitals_affected: u32,
    pub schools_affected: u32,
    pub industrial_affected: u32,
    pub farmland_affected: u32,
    pub infrastructure: Vec<AffectedSite>,
}
