use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use thiserror::Error;

use super::model::{City, Dataset, TripRecord};

/// Timestamp layout used by all three city files.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A load failure is fatal for the session: the caller gets no partial data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to parse row {row} of {path}")]
    Row {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: invalid start time {value:?}")]
    Timestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV row as it appears on disk. Columns the tool does not use
/// (the pandas index column, End Time) are ignored. Washington's file has
/// no Gender / Birth Year columns at all, hence the defaults.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    /// Stored as a float in some exports ("2762.0").
    #[serde(rename = "Trip Duration")]
    duration_secs: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    /// Float in the source ("1992.0"), truncated to a year.
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the full trip dataset for `city` from `<data_dir>/<city file>`,
/// deriving the month / weekday / hour columns from the start timestamp.
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset, LoadError> {
    let path = data_dir.join(city.data_file());

    let mut reader = csv::Reader::from_path(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;

    let mut trips = Vec::new();
    for (row, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(|source| LoadError::Row {
            path: path.clone(),
            row,
            source,
        })?;
        trips.push(trip_from_raw(raw, row)?);
    }

    log::info!("loaded {} trips for {city} from {}", trips.len(), path.display());
    Ok(Dataset::new(city, trips))
}

fn trip_from_raw(raw: RawTrip, row: usize) -> Result<TripRecord, LoadError> {
    let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT).map_err(
        |source| LoadError::Timestamp {
            row,
            value: raw.start_time.clone(),
            source,
        },
    )?;

    Ok(TripRecord {
        month: start_time.month(),
        weekday: start_time.weekday(),
        hour: start_time.hour(),
        start_time,
        duration_secs: raw.duration_secs.round().max(0.0) as u32,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender: raw.gender,
        birth_year: raw.birth_year.map(|y| y as i32),
    })
}
