//! NEO feed loading.
//!
//! Accepts either a flat JSON array of records (the proxy's `/feed` output)
//! or a raw NeoWs document keyed by `near_earth_objects`. Fetching the feed
//! over the network is the caller's job.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use neo_core::types::NeoRecord;

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("failed to read feed {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized feed layout (expected a record array or a near_earth_objects document)")]
    UnknownLayout,

    #[error("feed object {index} is missing or has an invalid `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Read and parse a feed file.
pub fn load_feed(path: impl AsRef<Path>) -> Result<Vec<NeoRecord>, FeedError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_feed(&text)
}

/// Parse feed text in either supported layout.
pub fn parse_feed(text: &str) -> Result<Vec<NeoRecord>, FeedError> {
    let doc: Value = serde_json::from_str(text)?;
    match doc {
        Value::Array(_) => Ok(serde_json::from_value(doc)?),
        Value::Object(ref map) => match map.get("near_earth_objects") {
            Some(by_date) => parse_neows(by_date),
            None => Err(FeedError::UnknownLayout),
        },
        _ => Err(FeedError::UnknownLayout),
    }
}

/// Flatten a NeoWs `near_earth_objects` map (date -> objects) into records,
/// in date order. Each record takes its first close approach.
pub fn parse_neows(by_date: &Value) -> Result<Vec<NeoRecord>, FeedError> {
    let Some(dates) = by_date.as_object() else {
        return Err(FeedError::UnknownLayout);
    };

    let mut records = Vec::new();
    for (date, objects) in dates {
        let Some(objects) = objects.as_array() else {
            return Err(FeedError::UnknownLayout);
        };
        for obj in objects {
            let index = records.len();
            records.push(parse_neows_object(obj, date, index)?);
        }
    }
    Ok(records)
}

fn parse_neows_object(obj: &Value, date: &str, index: usize) -> Result<NeoRecord, FeedError> {
    let missing = |field| FeedError::MissingField { index, field };

    let diameter = &obj["estimated_diameter"]["meters"];
    let approach = &obj["close_approach_data"][0];

    Ok(NeoRecord {
        id: text_field(&obj["id"]).ok_or_else(|| missing("id"))?,
        name: text_field(&obj["name"]).ok_or_else(|| missing("name"))?,
        diameter_min_meters: number_field(&diameter["estimated_diameter_min"])
            .ok_or_else(|| missing("estimated_diameter_min"))?,
        diameter_max_meters: number_field(&diameter["estimated_diameter_max"])
            .ok_or_else(|| missing("estimated_diameter_max"))?,
        velocity_km_per_sec: number_field(&approach["relative_velocity"]["kilometers_per_second"])
            .ok_or_else(|| missing("kilometers_per_second"))?,
        miss_distance_km: number_field(&approach["miss_distance"]["kilometers"])
            .ok_or_else(|| missing("kilometers"))?,
        potentially_hazardous: obj["is_potentially_hazardous_asteroid"]
            .as_bool()
            .unwrap_or(false),
        close_approach_date: Some(date.to_string()),
    })
}

/// NeoWs sends ids as strings but some mirrors use numbers.
fn text_field(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Velocities and distances arrive as decimal strings.
fn number_field(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
