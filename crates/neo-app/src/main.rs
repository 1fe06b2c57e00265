//! neo-app: headless runner for the NEO impact simulator.
//!
//! Usage:
//!   neo-app run --feed feed.json [--config run.json] [--frames N] [--seed N]
//!               [--trigger <id>,<km/s>]
//!   neo-app report --diameter 1000 --velocity 20
//!   neo-app area --overpass sites.json --at 40.7,-74.0 --energy 3.1e20

use std::path::PathBuf;
use std::process;

use serde::Serialize;
use serde_json::Value;

use neo_app::config::{AutoTrigger, RunConfig};
use neo_app::feed::load_feed;
use neo_app::game_loop::RunSummary;
use neo_app::state::AppState;
use neo_core::commands::SimCommand;
use neo_core::events::SimEvent;
use neo_core::state::SimSnapshot;
use neo_core::types::GeoPoint;
use neo_physics::area::{build_area_report, parse_sites};
use neo_physics::format::{format_energy_scientific, format_energy_si, format_number};
use neo_physics::{consequence_report, kinetic_energy};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "report" => cmd_report(&args[2..]),
        "area" => cmd_area(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "neo-app: headless NEO flyby and impact simulator\n\
         \n\
         Commands:\n\
         \n\
         run       Load a feed and run the frame loop, printing a JSON summary\n\
         \n\
           --feed <path>          NEO feed (record array or NeoWs document)\n\
           --config <path>        Run config JSON (optional)\n\
           --frames <N>           Frames to run (overrides config)\n\
           --seed <N>             RNG seed (overrides config)\n\
           --trigger <id>,<km/s>  Trigger an impact on the first frame\n\
         \n\
         report    Print the consequence report for a body\n\
         \n\
           --diameter <m>         Body diameter in meters\n\
           --velocity <km/s>      Impact velocity\n\
         \n\
         area      Tally infrastructure around an impact point\n\
         \n\
           --overpass <path>      Overpass API response JSON\n\
           --at <lat,lng>         Impact coordinates\n\
           --energy <J>           Kinetic energy (or --diameter and --velocity)\n\
         \n\
         Examples:\n\
         \n\
           neo-app run --feed today.json --trigger 3542519,20\n\
           neo-app report --diameter 1000 --velocity 20\n\
           neo-app area --overpass sites.json --at 40.71,-74.0 --energy 3.1e20\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].as_str());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let raw = parse_value(args, flag)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("Error: {flag} expects a number, got {raw}");
            process::exit(1);
        }
    }
}

fn parse_pair(raw: &str) -> Option<(&str, &str)> {
    let (a, b) = raw.split_once(',')?;
    Some((a.trim(), b.trim()))
}

fn parse_trigger(args: &[String]) -> Option<AutoTrigger> {
    let raw = parse_value(args, "--trigger")?;
    let parsed = parse_pair(raw).and_then(|(id, v)| {
        let velocity_km_s: f64 = v.parse().ok()?;
        Some(AutoTrigger {
            body_id: id.to_string(),
            velocity_km_s,
            at_frame: 0,
        })
    });
    if parsed.is_none() {
        eprintln!("Error: --trigger expects <id>,<km/s>, got {raw}");
        process::exit(1);
    }
    parsed
}

fn parse_at(args: &[String]) -> Option<GeoPoint> {
    let raw = parse_value(args, "--at")?;
    let (lat, lng) = parse_pair(raw)?;
    Some(GeoPoint::new(lat.parse().ok()?, lng.parse().ok()?))
}

fn require<T>(value: Option<T>, what: &str) -> T {
    match value {
        Some(v) => v,
        None => {
            eprintln!("Error: {what} is required");
            process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding output: {e}");
            process::exit(1);
        }
    }
}

// --- Run command ---

#[derive(Serialize)]
struct RunOutput {
    summary: RunSummary,
    snapshot: Option<SimSnapshot>,
}

fn cmd_run(args: &[String]) {
    let feed_path = PathBuf::from(require(parse_value(args, "--feed"), "--feed <path>"));

    let mut config = match parse_value(args, "--config") {
        Some(path) => match RunConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    if let Some(frames) = parse_number(args, "--frames") {
        config.frames = frames;
    }
    if let Some(seed) = parse_number(args, "--seed") {
        config.sim.seed = seed;
    }
    if let Some(trigger) = parse_trigger(args) {
        config.auto_trigger = Some(trigger);
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if config.frames == 0 {
        eprintln!("Error: run needs a frame budget (--frames N with N > 0)");
        process::exit(1);
    }

    let records = match load_feed(&feed_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    eprintln!(
        "Loaded {} record(s) from {}",
        records.len(),
        feed_path.display()
    );

    let state = AppState::new();
    if let Err(e) = state.start(config.clone(), vec![SimCommand::LoadFeed { records }]) {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let summary = match state.wait() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    eprintln!(
        "Ran {} frame(s) at {} fps",
        summary.frames_run, config.frame_rate
    );
    for alert in &summary.alerts {
        eprintln!("[{:?}] frame {}: {}", alert.level, alert.frame, alert.message);
    }
    for event in &summary.events {
        if let SimEvent::ImpactArrived { body_id, report } = event {
            eprintln!(
                "{body_id}: {} ({}), {} Hiroshima, crater {:.2} km, M{:.1}, like {}",
                format_energy_scientific(report.kinetic_energy_j),
                format_energy_si(report.kinetic_energy_j),
                format_number(report.hiroshima_equivalents, 1),
                report.crater_diameter_km,
                report.earthquake_magnitude,
                report.benchmark_name,
            );
        }
    }

    print_json(&RunOutput {
        summary,
        snapshot: state.snapshot(),
    });
}

// --- Report command ---

fn cmd_report(args: &[String]) {
    let diameter: f64 = require(parse_number(args, "--diameter"), "--diameter <m>");
    let velocity: f64 = require(parse_number(args, "--velocity"), "--velocity <km/s>");
    if !(diameter.is_finite() && diameter > 0.0 && velocity.is_finite() && velocity > 0.0) {
        eprintln!("Error: diameter and velocity must be positive");
        process::exit(1);
    }

    let report = consequence_report(diameter, velocity);
    eprintln!(
        "Energy: {} ({})",
        format_energy_scientific(report.kinetic_energy_j),
        format_energy_si(report.kinetic_energy_j)
    );
    print_json(&report);
}

// --- Area command ---

fn cmd_area(args: &[String]) {
    let path = PathBuf::from(require(parse_value(args, "--overpass"), "--overpass <path>"));
    let impact = require(parse_at(args), "--at <lat,lng>");

    let energy_j = match parse_number::<f64>(args, "--energy") {
        Some(e) => e,
        None => {
            let diameter: f64 =
                require(parse_number(args, "--diameter"), "--energy <J> or --diameter <m>");
            let velocity: f64 = require(parse_number(args, "--velocity"), "--velocity <km/s>");
            kinetic_energy(diameter, velocity)
        }
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };
    let response: Value = match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", path.display());
            process::exit(1);
        }
    };

    let report = build_area_report(impact, energy_j, parse_sites(&response));
    eprintln!(
        "Search radius {:.0} m: {} medical, {} education, {} industrial, {} agricultural",
        report.search_radius_m,
        report.hospitals_affected,
        report.schools_affected,
        report.industrial_affected,
        report.farmland_affected,
    );
    print_json(&report);
}
