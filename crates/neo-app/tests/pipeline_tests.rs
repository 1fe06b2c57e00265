use neo_app::config::{AutoTrigger, RunConfig};
use neo_app::feed::{load_feed, parse_feed};
use neo_app::state::AppState;
use neo_core::commands::SimCommand;
use neo_core::enums::{DamageZone, ImpactPhase, InfrastructureKind};
use neo_core::events::SimEvent;
use neo_core::types::{GeoPoint, NeoRecord};
use neo_physics::area::{build_area_report, parse_sites};
use neo_physics::kinetic_energy;

const FEED: &str = r#"[
    {"id": "2000433", "name": "433 Eros", "diameterMinMeters": 800, "diameterMaxMeters": 1200,
     "velocityKmPerSec": 20.0, "missDistanceKm": 45000000, "potentiallyHazardous": false},
    {"id": "3542519", "name": "(2010 PK9)", "diameterMinMeters": 120, "diameterMaxMeters": 270,
     "velocityKmPerSec": 14.2, "missDistanceKm": 4500000, "potentiallyHazardous": true},
    {"id": "broken", "name": "no size", "diameterMinMeters": 0, "diameterMaxMeters": 0,
     "velocityKmPerSec": 11.0, "missDistanceKm": 900000, "potentiallyHazardous": false}
]"#;

fn records() -> Vec<NeoRecord> {
    parse_feed(FEED).unwrap()
}

fn run_to_completion(config: RunConfig) -> (neo_app::game_loop::RunSummary, AppState) {
    let state = AppState::new();
    state
        .start(config, vec![SimCommand::LoadFeed { records: records() }])
        .unwrap();
    let summary = state.wait().unwrap();
    (summary, state)
}

#[test]
fn test_feed_to_impact_report() {
    let config = RunConfig {
        frames: 3000,
        auto_trigger: Some(AutoTrigger {
            body_id: "3542519".into(),
            velocity_km_s: 20.0,
            at_frame: 10,
        }),
        ..Default::default()
    };
    let (summary, state) = run_to_completion(config);

    assert_eq!(summary.frames_run, 3000);
    assert!(summary.events.contains(&SimEvent::BodiesLoaded {
        count: 2,
        skipped: 1
    }));

    let report = summary
        .events
        .iter()
        .find_map(|e| match e {
            SimEvent::ImpactArrived { body_id, report } if body_id == "3542519" => Some(report),
            _ => None,
        })
        .expect("impact should arrive within the frame budget");
    assert_eq!(report.diameter_m, 195.0);
    assert_eq!(report.velocity_km_s, 20.0);
    assert!((report.kinetic_energy_j - kinetic_energy(195.0, 20.0)).abs() / report.kinetic_energy_j < 1e-12);

    let snapshot = state.snapshot().unwrap();
    assert_eq!(snapshot.impact.phase, ImpactPhase::Idle);
    assert_eq!(snapshot.bodies.len(), 1);
    assert_eq!(snapshot.bodies[0].id, "2000433");
}

#[test]
fn test_runs_are_deterministic() {
    let config = RunConfig {
        frames: 400,
        auto_trigger: Some(AutoTrigger {
            body_id: "2000433".into(),
            velocity_km_s: 30.0,
            at_frame: 0,
        }),
        ..Default::default()
    };
    let (summary_a, state_a) = run_to_completion(config.clone());
    let (summary_b, state_b) = run_to_completion(config);

    assert_eq!(
        serde_json::to_string(&summary_a).unwrap(),
        serde_json::to_string(&summary_b).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&state_a.snapshot()).unwrap(),
        serde_json::to_string(&state_b.snapshot()).unwrap()
    );
}

#[test]
fn test_unknown_trigger_reports_warning() {
    let config = RunConfig {
        frames: 5,
        auto_trigger: Some(AutoTrigger {
            body_id: "nope".into(),
            velocity_km_s: 12.0,
            at_frame: 2,
        }),
        ..Default::default()
    };
    let (summary, state) = run_to_completion(config);

    assert!(summary
        .alerts
        .iter()
        .any(|a| a.message.contains("unknown body nope") && a.frame == 2));
    assert!(!summary
        .events
        .iter()
        .any(|e| matches!(e, SimEvent::ImpactStarted { .. })));
    assert_eq!(state.snapshot().unwrap().bodies.len(), 2);
}

#[test]
fn test_shutdown_stops_unbounded_run() {
    let state = AppState::new();
    let config = RunConfig {
        frames: 0,
        realtime: true,
        ..Default::default()
    };
    state
        .start(config, vec![SimCommand::LoadFeed { records: records() }])
        .unwrap();
    state
        .send_command(SimCommand::SetPaused { paused: true })
        .unwrap();

    std::thread::sleep(std::time::Duration::from_millis(50));
    let summary = state.shutdown().unwrap();
    assert!(summary.frames_run >= 1);
    assert!(state.send_command(SimCommand::Reset).is_err());
}

#[test]
fn test_config_and_feed_from_disk() {
    let dir = std::env::temp_dir().join(format!("neo-app-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let feed_path = dir.join("feed.json");
    let config_path = dir.join("run.json");
    std::fs::write(&feed_path, FEED).unwrap();
    std::fs::write(&config_path, r#"{"frames": 12, "sim": {"seed": 5}}"#).unwrap();

    let records = load_feed(&feed_path).unwrap();
    let config = RunConfig::load(&config_path).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(config.frames, 12);
    assert_eq!(config.sim.seed, 5);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_area_report_from_overpass_response() {
    let response: serde_json::Value = serde_json::from_str(
        r#"{"elements": [
            {"type": "node", "lat": 40.7128, "lon": -74.0060,
             "tags": {"amenity": "hospital", "name": "Downtown General"}},
            {"type": "way", "center": {"lat": 40.78, "lon": -74.0060},
             "tags": {"amenity": "school"}},
            {"type": "way", "center": {"lat": 40.90, "lon": -74.0060},
             "tags": {"landuse": "farmland"}},
            {"type": "node", "tags": {"amenity": "clinic"}}
        ]}"#,
    )
    .unwrap();

    let impact = GeoPoint::new(40.7128, -74.0060);
    let energy = kinetic_energy(195.0, 20.0);
    let report = build_area_report(impact, energy, parse_sites(&response));

    assert_eq!(report.hospitals_affected, 1);
    assert_eq!(report.schools_affected, 1);
    assert_eq!(report.farmland_affected, 1);
    assert_eq!(report.industrial_affected, 0);
    assert_eq!(report.infrastructure.len(), 3);

    let hospital = &report.infrastructure[0];
    assert_eq!(hospital.kind, InfrastructureKind::Medical);
    assert_eq!(hospital.zone, DamageZone::Thermal);
    assert!(hospital.distance_km < 1e-6);

    // ~7.5 km north
    assert_eq!(report.infrastructure[1].zone, DamageZone::Pressure);
    // ~20.9 km north
    assert_eq!(report.infrastructure[2].zone, DamageZone::Shrapnel);

    assert!(report.search_radius_m >= 2000.0 && report.search_radius_m <= 15000.0);
}
