/// Core data types for the tornado analysis crate.
///
/// This module defines the row type shared by the ingest and analysis
/// layers. It contains no logic beyond a few accessors, and no I/O.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const COL_EVENT_ID: &str = "event_id";
pub const COL_GRID_ID: &str = "grid_id";
pub const COL_DATETIME: &str = "datetime";
pub const COL_LON: &str = "lon";
pub const COL_LAT: &str = "lat";
pub const COL_FUJITA_SCALE: &str = "fujita_scale";

/// Columns that must be present in every input file. Matching is exact
/// and case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_EVENT_ID,
    COL_GRID_ID,
    COL_DATETIME,
    COL_LON,
    COL_LAT,
    COL_FUJITA_SCALE,
];

// ---------------------------------------------------------------------------
// Record type
// ---------------------------------------------------------------------------

/// One normalized row of the tornado table.
///
/// A single physical tornado track may cross several grid cells, so several
/// records can share one `event_id`. Any field is `None` when the raw cell
/// was blank, and `datetime` / `fujita_scale` are also `None` when the value
/// could not be parsed. Such rows never match a date filter, a grid, a
/// severity comparison or an event grouping, and never contribute to a
/// maximum or a distinct count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TornadoRecord {
    pub event_id: Option<i64>,
    pub grid_id: Option<i64>,
    pub datetime: Option<NaiveDateTime>,
    pub lon: Option<f64>,  // always within [-180, 180] once normalized
    pub lat: Option<f64>,
    pub fujita_scale: Option<f64>,
    /// Any other columns in the input, passed through untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl TornadoRecord {
    /// True if the record has a valid timestamp inside `[start, end]`.
    pub fn within(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        matches!(self.datetime, Some(dt) if dt >= start && dt <= end)
    }

    /// True if the record has a known rating of at least `threshold`.
    pub fn at_least(&self, threshold: f64) -> bool {
        matches!(self.fujita_scale, Some(f) if f >= threshold)
    }

    /// True if the record has a known grid equal to `grid_id`.
    pub fn in_grid(&self, grid_id: i64) -> bool {
        self.grid_id == Some(grid_id)
    }
}
