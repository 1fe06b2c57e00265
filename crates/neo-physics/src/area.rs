//! Ground impact-area model.
//!
//! Derives damage-zone radii from impact energy and classifies already
//! resolved infrastructure sites by great-circle distance from the impact
//! point. Fetching the sites is the caller's business.

use serde_json::Value;

use neo_core::constants::*;
use neo_core::enums::{DamageZone, InfrastructureKind};
use neo_core::reports::{AffectedSite, DamageRadii, ImpactAreaReport, InfrastructureSite};
use neo_core::types::GeoPoint;

/// Thermal / pressure / shrapnel radii for an impact of the given energy.
pub fn damage_radii(energy_j: f64) -> DamageRadii {
    let scale = (energy_j / AREA_ENERGY_REFERENCE_J).powf(AREA_SCALE_EXPONENT);
    DamageRadii {
        thermal_km: THERMAL_RADIUS_PER_SCALE_KM * scale,
        pressure_km: PRESSURE_RADIUS_PER_SCALE_KM * scale,
        shrapnel_km: SHRAPNEL_RADIUS_PER_SCALE_KM * scale,
    }
}

/// Radius (m) within which infrastructure should be queried.
pub fn search_radius_m(radii: &DamageRadii) -> f64 {
    (radii.shrapnel_km * 1000.0).clamp(SEARCH_RADIUS_MIN_M, SEARCH_RADIUS_MAX_M)
}

/// Great-circle distance between two coordinates (km).
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Zone a site falls in, by distance from the impact point.
pub fn classify_zone(distance_km: f64) -> DamageZone {
    if distance_km < THERMAL_ZONE_KM {
        DamageZone::Thermal
    } else if distance_km < PRESSURE_ZONE_KM {
        DamageZone::Pressure
    } else {
        DamageZone::Shrapnel
    }
}

/// Parse one Overpass-style map element into a site.
///
/// Coordinates come from `center` (ways) or `lat`/`lon` (nodes). Elements
/// with no coordinates or no tags are skipped.
pub fn parse_site(element: &Value) -> Option<InfrastructureSite> {
    let (lat, lng) = match element.get("center") {
        Some(center) => (center.get("lat")?.as_f64()?, center.get("lon")?.as_f64()?),
        None => (element.get("lat")?.as_f64()?, element.get("lon")?.as_f64()?),
    };

    let tags = element.get("tags")?;
    let tag = |key: &str| tags.get(key).and_then(Value::as_str);

    let site_type = tag("amenity")
        .or_else(|| tag("landuse"))
        .or_else(|| tag("building"))
        .unwrap_or("unknown")
        .to_string();

    let name = tag("name")
        .or_else(|| tag("name:en"))
        .or_else(|| tag("name:tr"))
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(&site_type).to_string());

    Some(InfrastructureSite {
        site_type,
        name,
        lat,
        lng,
    })
}

/// Parse every usable element of an Overpass response body.
pub fn parse_sites(response: &Value) -> Vec<InfrastructureSite> {
    response
        .get("elements")
        .and_then(Value::as_array)
        .map(|elements| elements.iter().filter_map(parse_site).collect())
        .unwrap_or_default()
}

fn fallback_name(site_type: &str) -> &'static str {
    match site_type {
        "industrial" => "Industrial Area",
        "farmland" | "farmyard" => "Agricultural Land",
        "factory" => "Factory",
        "warehouse" => "Warehouse",
        "orchard" => "Orchard",
        "vineyard" => "Vineyard",
        _ => "Unnamed",
    }
}

/// Build the infrastructure report for an impact at `impact`.
pub fn build_area_report(
    impact: GeoPoint,
    energy_j: f64,
    sites: Vec<InfrastructureSite>,
) -> ImpactAreaReport {
    let radii = damage_radii(energy_j);

    let mut report = ImpactAreaReport {
        latitude: impact.lat,
        longitude: impact.lng,
        kinetic_energy_joules: energy_j,
        radii,
        search_radius_m: search_radius_m(&radii),
        hospitals_affected: 0,
        schools_affected: 0,
        industrial_affected: 0,
        farmland_affected: 0,
        infrastructure: Vec::with_capacity(sites.len()),
    };

    for site in sites {
        let kind = InfrastructureKind::from_tag(&site.site_type);
        match kind {
            InfrastructureKind::Medical => report.hospitals_affected += 1,
            InfrastructureKind::Education => report.schools_affected += 1,
            InfrastructureKind::Industrial => report.industrial_affected += 1,
            InfrastructureKind::Agricultural => report.farmland_affected += 1,
            InfrastructureKind::Other => {}
        }

        let distance_km = haversine_km(impact, GeoPoint::new(site.lat, site.lng));
        report.infrastructure.push(AffectedSite {
            site,
            kind,
            distance_km,
            zone: classify_zone(distance_km),
        });
    }

    report
}
