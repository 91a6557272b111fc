//! Joins the station directory against live status and grades availability.

use std::fmt;
use std::ops::Range;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::directory::Region;
use crate::feed::StationStatusFeed;

/// Longest bar drawn for one station.
pub const MAX_BARS: u32 = 50;

/// Error returned for thresholds that can't produce three tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid tier thresholds (green at {green_at}, yellow at {yellow_at}): {reason}")]
pub struct InvalidThresholds {
    pub green_at: u32,
    pub yellow_at: u32,
    reason: &'static str,
}

/// Count boundaries for the colour tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Minimum e-bikes for green.
    pub green_at: u32,
    /// Minimum e-bikes for yellow.
    pub yellow_at: u32,
}

impl TierThresholds {
    /// Validate and build thresholds.
    ///
    /// `yellow_at` must be at least 1 (an empty dock is always red) and no
    /// greater than `green_at`.
    pub fn new(green_at: u32, yellow_at: u32) -> Result<Self, InvalidThresholds> {
        let reason = if yellow_at == 0 {
            "yellow threshold must be at least 1"
        } else if yellow_at > green_at {
            "yellow threshold must not exceed green threshold"
        } else {
            return Ok(Self {
                green_at,
                yellow_at,
            });
        };

        Err(InvalidThresholds {
            green_at,
            yellow_at,
            reason,
        })
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green_at: 3,
            yellow_at: 1,
        }
    }
}

/// Availability grade, named after the CSS class it renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Red,
    Yellow,
    Green,
}

impl Tier {
    /// Grade an e-bike count.
    pub fn classify(count: u32, thresholds: &TierThresholds) -> Self {
        if count >= thresholds.green_at {
            Tier::Green
        } else if count >= thresholds.yellow_at {
            Tier::Yellow
        } else {
            Tier::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Green => "green",
            Tier::Yellow => "yellow",
            Tier::Red => "red",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directory station with its live count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub id: &'static str,
    pub name: &'static str,
    /// Available e-bikes (0 when the feed doesn't list the station).
    pub count: u32,
    pub tier: Tier,
    /// Whether the feed listed this station at all.
    pub found: bool,
}

impl StationReport {
    /// One entry per available e-bike, for drawing bars, capped at
    /// [`MAX_BARS`].
    pub fn bars(&self) -> Range<u32> {
        0..self.count.min(MAX_BARS)
    }
}

/// A region's stations, in directory order.
#[derive(Debug, Clone, Serialize)]
pub struct RegionReport {
    pub name: &'static str,
    pub stations: Vec<StationReport>,
}

/// Everything a page needs.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub regions: Vec<RegionReport>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Report {
    /// Feed timestamp formatted for display.
    pub fn updated_display(&self) -> Option<String> {
        self.last_updated
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    }
}

/// Fill in live counts for every station in `regions`.
///
/// Stations missing from the feed are reported red with a zero count.
/// Stations that are listed but not installed or not renting are red
/// whatever their count.
pub fn populate(
    regions: &[Region],
    feed: &StationStatusFeed,
    thresholds: &TierThresholds,
) -> Report {
    let live = feed.by_id();

    let regions = regions
        .iter()
        .map(|region| RegionReport {
            name: region.name,
            stations: region
                .stations
                .iter()
                .map(|station| match live.get(station.id) {
                    Some(status) => {
                        let count = status.num_ebikes_available;
                        let tier = if status.is_operating() {
                            Tier::classify(count, thresholds)
                        } else {
                            Tier::Red
                        };
                        StationReport {
                            id: station.id,
                            name: station.name,
                            count,
                            tier,
                            found: true,
                        }
                    }
                    None => StationReport {
                        id: station.id,
                        name: station.name,
                        count: 0,
                        tier: Tier::Red,
                        found: false,
                    },
                })
                .collect(),
        })
        .collect();

    Report {
        regions,
        last_updated: feed.last_updated_at(),
    }
}
