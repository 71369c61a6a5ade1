/// Field normalization: `RawTable` → `Vec<TornadoRecord>`.
///
/// Applied once, at load time, in this order:
///
/// 1. `datetime` is parsed; anything unparsable becomes `None`.
/// 2. `lon` values above 180 (0–360 convention) have 360 subtracted.
/// 3. `fujita_scale` has every "EF" / "F" scheme marker removed, then is
///    parsed as a number; anything non-numeric becomes `None`.
///
/// Steps 1 and 3 never fail. Blank or null-marker cells ("", "NA", "nan",
/// "null", ...) in the id and coordinate columns become `None` as well.
/// Text that is present but not a number in those columns is structural:
/// the load fails with the offending line and column.
///
/// Every normalizer here is a projection: feeding it already-normalized
/// output returns the same value.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::ingest::csv_table::RawTable;
use crate::model::*;

/// Datetime layouts tried in order. Date-only forms are handled separately.
const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Cell contents read as "no value", matched after trimming.
const NULL_MARKERS: [&str; 10] = ["", "NA", "N/A", "NaN", "nan", "-nan", "null", "NULL", "None", "<NA>"];

/// Counts of values that degraded to `None` during normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows: usize,
    pub invalid_datetimes: usize,
    pub missing_ratings: usize,
    /// Rows with a blank `event_id` or `grid_id`.
    pub missing_ids: usize,
    /// Rows with a blank `lon` or `lat`.
    pub missing_coordinates: usize,
}

// ---------------------------------------------------------------------------
// Per-field normalizers
// ---------------------------------------------------------------------------

/// Parses a timestamp string. Date-only input resolves to midnight;
/// offsets are converted to UTC.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Maps a 0–360 longitude into -180..180.
pub fn normalize_lon(lon: f64) -> f64 {
    if lon > 180.0 { lon - 360.0 } else { lon }
}

/// Removes every "EF" or "F" occurrence, scanning left to right and
/// preferring "EF" where both could match. Not anchored to the start.
pub fn strip_scale_prefix(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'F' => {}
            'E' if chars.peek() == Some(&'F') => {
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Parses a Fujita rating such as "F3", "EF3" or "3". Returns `None` for
/// anything that is not a finite number after stripping. Infinite values
/// ("inf", "infinity") are treated as missing too, unlike dataframe numeric
/// coercion which keeps them, so a stray "inf" cannot become the maximum.
pub fn parse_fujita_scale(raw: &str) -> Option<f64> {
    let stripped = strip_scale_prefix(raw);
    let value: f64 = stripped.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

fn is_null_cell(raw: &str) -> bool {
    NULL_MARKERS.contains(&raw.trim())
}

/// Parses an integer id; blank cells give `None`. Integral floats ("101.0")
/// are accepted since dataframe exports write integer columns that way once
/// a null appears.
fn parse_id(raw: &str, line: usize, column: &str) -> Result<Option<i64>, LoadError> {
    if is_null_cell(raw) {
        return Ok(None);
    }

    let s = raw.trim();
    if let Ok(id) = s.parse::<i64>() {
        return Ok(Some(id));
    }

    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(f as i64)),
        _ => Err(invalid(line, column, raw)),
    }
}

fn parse_coordinate(raw: &str, line: usize, column: &str) -> Result<Option<f64>, LoadError> {
    if is_null_cell(raw) {
        return Ok(None);
    }

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(invalid(line, column, raw)),
    }
}

fn invalid(line: usize, column: &str, value: &str) -> LoadError {
    LoadError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Table normalization
// ---------------------------------------------------------------------------

fn required<'a>(table: &'a RawTable, name: &str) -> Result<&'a [String], LoadError> {
    table
        .column(name)
        .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
}

/// Builds the canonical record list from a raw table.
pub fn normalize_table(
    table: &RawTable,
) -> Result<(Vec<TornadoRecord>, NormalizeStats), LoadError> {
    let event_ids = required(table, COL_EVENT_ID)?;
    let grid_ids = required(table, COL_GRID_ID)?;
    let datetimes = required(table, COL_DATETIME)?;
    let lons = required(table, COL_LON)?;
    let lats = required(table, COL_LAT)?;
    let ratings = required(table, COL_FUJITA_SCALE)?;

    let extra_columns: Vec<(&String, &[String])> = table
        .column_names()
        .iter()
        .filter(|name| !REQUIRED_COLUMNS.contains(&name.as_str()))
        .filter_map(|name| table.column(name).map(|values| (name, values)))
        .collect();

    let mut stats = NormalizeStats {
        rows: table.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let line = table.line(row);

        let lon = parse_coordinate(&lons[row], line, COL_LON)?.map(normalize_lon);
        if lon.is_some_and(|l| !(-180.0..=180.0).contains(&l)) {
            return Err(invalid(line, COL_LON, &lons[row]));
        }
        let lat = parse_coordinate(&lats[row], line, COL_LAT)?;
        if lon.is_none() || lat.is_none() {
            stats.missing_coordinates += 1;
        }

        let event_id = parse_id(&event_ids[row], line, COL_EVENT_ID)?;
        let grid_id = parse_id(&grid_ids[row], line, COL_GRID_ID)?;
        if event_id.is_none() || grid_id.is_none() {
            stats.missing_ids += 1;
        }

        let datetime = parse_datetime(&datetimes[row]);
        if datetime.is_none() {
            debug!(line, value = %datetimes[row], "unparsable datetime");
            stats.invalid_datetimes += 1;
        }

        let fujita_scale = parse_fujita_scale(&ratings[row]);
        if fujita_scale.is_none() {
            stats.missing_ratings += 1;
        }

        let extra: BTreeMap<String, String> = extra_columns
            .iter()
            .map(|(name, values)| (name.to_string(), values[row].clone()))
            .collect();

        records.push(TornadoRecord {
            event_id,
            grid_id,
            datetime,
            lon,
            lat,
            fujita_scale,
            extra,
        });
    }

    if stats.invalid_datetimes > 0
        || stats.missing_ratings > 0
        || stats.missing_ids > 0
        || stats.missing_coordinates > 0
    {
        warn!(
            rows = stats.rows,
            invalid_datetimes = stats.invalid_datetimes,
            missing_ratings = stats.missing_ratings,
            missing_ids = stats.missing_ids,
            missing_coordinates = stats.missing_coordinates,
            "some fields degraded to missing during normalization"
        );
    }

    Ok((records, stats))
}
