//! GBFS `station_status.json` DTOs.
//!
//! Only the fields the upstream feed documents are modelled; anything else
//! is ignored. Counts default to zero because operators omit fields they
//! don't support (most commonly `num_ebikes_available`).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// The top-level feed envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusFeed {
    /// POSIX time the feed was last updated.
    #[serde(default)]
    pub last_updated: Option<f64>,

    /// Seconds before the feed should be re-fetched.
    #[serde(default)]
    pub ttl: Option<f64>,

    pub data: StationStatusData,
}

/// The `data` object of the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusData {
    pub stations: Vec<StationStatus>,
}

/// Live status of one dock.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatus {
    #[serde(deserialize_with = "station_id")]
    pub station_id: String,

    #[serde(default, deserialize_with = "count")]
    pub num_bikes_available: u32,

    #[serde(default, deserialize_with = "count")]
    pub num_bikes_disabled: u32,

    #[serde(default, deserialize_with = "count")]
    pub num_ebikes_available: u32,

    #[serde(default, deserialize_with = "count")]
    pub num_docks_available: u32,

    #[serde(default, deserialize_with = "count")]
    pub num_docks_disabled: u32,

    #[serde(default = "yes", deserialize_with = "flag")]
    pub is_installed: bool,

    #[serde(default = "yes", deserialize_with = "flag")]
    pub is_renting: bool,

    #[serde(default = "yes", deserialize_with = "flag")]
    pub is_returning: bool,

    /// POSIX time this station last reported.
    #[serde(default)]
    pub last_reported: Option<i64>,

    #[serde(default)]
    pub eightd_has_available_keys: bool,

    #[serde(default)]
    pub eightd_active_station_services: Vec<StationService>,
}

/// Reference to a station service (valet, etc.).
#[derive(Debug, Clone, Deserialize)]
pub struct StationService {
    pub id: String,
}

impl StationStatusFeed {
    /// Index stations by ID.
    ///
    /// If the feed repeats an ID, the later record wins.
    pub fn by_id(&self) -> HashMap<&str, &StationStatus> {
        self.data
            .stations
            .iter()
            .map(|s| (s.station_id.as_str(), s))
            .collect()
    }

    /// When the feed was generated, if it said.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.last_updated?;
        if !secs.is_finite() {
            return None;
        }
        DateTime::from_timestamp(secs.trunc() as i64, 0)
    }
}

impl StationStatus {
    /// Whether the dock is installed and handing out bikes.
    pub fn is_operating(&self) -> bool {
        self.is_installed && self.is_renting
    }
}

fn yes() -> bool {
    true
}

/// GBFS 1.x sends `0`/`1`, 2.x sends booleans.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// Counts are clamped into `u32` so one bad station can't sink the feed.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = i64::deserialize(deserializer)?;
    Ok(n.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Some operators publish numeric station IDs.
fn station_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Int(n) => n.to_string(),
    })
}
