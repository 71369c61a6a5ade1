/// Historical tornado dataset and its analytical queries.
///
/// `TornadoDataset` owns the normalized table. It is built once, from a
/// CSV export or from already-typed records, and never changes afterwards:
/// every query derives a fresh `TornadoView` or a number from it, so a
/// shared `&TornadoDataset` can be queried from any number of threads.
///
/// # Queries
///
/// All four take an inclusive `[start_date, end_date]` range given as
/// strings. Bounds are compared against the parsed instant, so a date-only
/// `end_date` means midnight of that day: a record at `2020-12-31 00:00:00`
/// is inside `..= "2020-12-31"`, one at `00:00:01` is not.
///
/// - `date_filter`               — rows in range
/// - `worst_tornadoes`           — rows at the range's highest rating, newest first
/// - `multiple_grid_count`       — events seen in more than one grid cell
/// - `grid_severity_probability` — distinct qualifying events per day in one cell

use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use crate::analysis::view::TornadoView;
use crate::error::{LoadError, QueryError};
use crate::ingest::csv_table::read_table;
use crate::ingest::normalize::{normalize_lon, normalize_table, parse_datetime};
use crate::model::{COL_LON, TornadoRecord};

#[derive(Debug, Clone)]
pub struct TornadoDataset {
    records: Vec<TornadoRecord>,
}

impl TornadoDataset {
    /// Reads and normalizes the CSV export at `path`.
    ///
    /// Fails only on structural problems (unreadable file, malformed CSV,
    /// missing required column, non-numeric id or coordinate). Blank ids and
    /// coordinates, bad timestamps and bad ratings degrade to `None`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let table = read_table(path)?;
        let (records, stats) = normalize_table(&table)?;

        info!(
            path = %path.display(),
            rows = records.len(),
            invalid_datetimes = stats.invalid_datetimes,
            missing_ratings = stats.missing_ratings,
            missing_ids = stats.missing_ids,
            "loaded tornado dataset"
        );

        Ok(Self { records })
    }

    /// Builds a dataset from typed records, applying the same longitude and
    /// rating normalization as `load`. Records that are already normalized
    /// pass through unchanged.
    ///
    /// For error reporting, `line` is the 1-based position of the record.
    pub fn from_records(records: Vec<TornadoRecord>) -> Result<Self, LoadError> {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(idx, mut record)| {
                record.lon = record.lon.map(normalize_lon);
                if let Some(lon) = record.lon.filter(|l| !(-180.0..=180.0).contains(l)) {
                    return Err(LoadError::InvalidValue {
                        line: idx + 1,
                        column: COL_LON.to_string(),
                        value: lon.to_string(),
                    });
                }
                record.fujita_scale = record.fujita_scale.filter(|f| f.is_finite());
                Ok(record)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[TornadoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Rows whose `datetime` lies in `[start_date, end_date]`. Rows without
    /// a valid timestamp never match. An inverted range yields an empty view.
    pub fn date_filter(&self, start_date: &str, end_date: &str) -> Result<TornadoView, QueryError> {
        let (start, end) = parse_range(start_date, end_date)?;
        Ok(TornadoView::new(self.in_range(start, end).cloned().collect()))
    }

    /// Every row in range whose rating equals the range's maximum rating,
    /// newest first. Rows sharing a timestamp keep file order.
    ///
    /// Empty if the range holds no rows, or no row with a known rating.
    pub fn worst_tornadoes(&self, start_date: &str, end_date: &str) -> Result<TornadoView, QueryError> {
        let filtered = self.date_filter(start_date, end_date)?;

        let Some(max) = filtered.max_fujita_scale() else {
            return Ok(TornadoView::default());
        };

        let mut worst: Vec<TornadoRecord> = filtered
            .into_records()
            .into_iter()
            .filter(|r| r.fujita_scale == Some(max))
            .collect();
        worst.sort_by(|a, b| b.datetime.cmp(&a.datetime));

        debug!(max_fujita_scale = max, rows = worst.len(), "worst tornadoes");
        Ok(TornadoView::new(worst))
    }

    /// Number of events in range that touch more than one distinct grid.
    /// Rows without an event id belong to no event, and a missing grid id
    /// is not a grid.
    pub fn multiple_grid_count(&self, start_date: &str, end_date: &str) -> Result<usize, QueryError> {
        let (start, end) = parse_range(start_date, end_date)?;

        let mut grids_by_event: HashMap<i64, HashSet<i64>> = HashMap::new();
        for record in self.in_range(start, end) {
            let Some(event_id) = record.event_id else {
                continue;
            };
            let grids = grids_by_event.entry(event_id).or_default();
            if let Some(grid_id) = record.grid_id {
                grids.insert(grid_id);
            }
        }

        Ok(grids_by_event.values().filter(|grids| grids.len() > 1).count())
    }

    /// Distinct events in `grid_id` rated at least `fujita_scale`, divided
    /// by the number of days in the inclusive range. Rows without an event
    /// id are never counted.
    ///
    /// The day count is `(end - start)` in whole days, plus one. An end
    /// before the start is rejected with `QueryError::InvertedRange`.
    pub fn grid_severity_probability(
        &self,
        grid_id: i64,
        fujita_scale: f64,
        start_date: &str,
        end_date: &str,
    ) -> Result<f64, QueryError> {
        let (start, end) = parse_range(start_date, end_date)?;
        if end < start {
            return Err(QueryError::InvertedRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }

        let qualifying = TornadoView::new(
            self.in_range(start, end)
                .filter(|r| r.in_grid(grid_id) && r.at_least(fujita_scale))
                .cloned()
                .collect(),
        );

        let day_count = end.signed_duration_since(start).num_days() + 1;
        Ok(qualifying.distinct_event_count() as f64 / day_count as f64)
    }

    fn in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> impl Iterator<Item = &TornadoRecord> {
        self.records.iter().filter(move |r| r.within(start, end))
    }
}

fn parse_bound(raw: &str) -> Result<NaiveDateTime, QueryError> {
    parse_datetime(raw).ok_or_else(|| QueryError::InvalidDate(raw.to_string()))
}

fn parse_range(start_date: &str, end_date: &str) -> Result<(NaiveDateTime, NaiveDateTime), QueryError> {
    Ok((parse_bound(start_date)?, parse_bound(end_date)?))
}
