/// Test fixtures: representative tornado CSV payloads.
///
/// These mirror the layout of the historical tornado export: a leading
/// unnamed index column, then `event_id`, `grid_id`, `datetime`, `lon`,
/// `lat`, `fujita_scale`. Raw values deliberately include the quirks the
/// normalizer has to handle: 0–360 longitudes, "F"/"EF" rating prefixes,
/// unparsable ratings and timestamps.

/// Six rows across five events.
///
/// - event 1 crosses grids 101 → 102, longitude of the first row in 0–360 form
/// - event 3 has an unparsable datetime
/// - event 4 has an unparsable rating
#[cfg(test)]
pub(crate) fn fixture_small_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,1,101,2020-03-02 18:30:00,262.5,35.2,F3
1,1,102,2020-03-02 18:45:00,-97.3,35.3,EF3
2,2,101,2020-05-10 00:00:00,-96.0,36.0,2
3,3,103,not a date,-95.0,37.0,F4
4,4,101,2020-05-10 12:00:00,-96.1,36.1,unknown
5,5,104,2021-01-15 09:00:00,-90.0,33.0,EF1
"
}

/// Two rows carrying a pass-through column.
#[cfg(test)]
pub(crate) fn fixture_extra_columns_csv() -> &'static str {
    ",event_id,state,grid_id,datetime,lon,lat,fujita_scale
0,7,OK,201,2019-04-01 10:00:00,-97.0,35.0,F2
1,8,KS,202,2019-04-02 11:00:00,-98.0,38.0,EF0
"
}

/// Second data row has one field too few.
#[cfg(test)]
pub(crate) fn fixture_ragged_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,1,101,2020-03-02 18:30:00,-97.5,35.2,F3
1,1,102,2020-03-02 18:45:00,-97.3,35.3
"
}

/// Header lacks `fujita_scale`.
#[cfg(test)]
pub(crate) fn fixture_missing_column_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat
0,1,101,2020-03-02 18:30:00,-97.5,35.2
"
}

/// Non-numeric grid id on the second data row (file line 3).
#[cfg(test)]
pub(crate) fn fixture_bad_grid_id_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,1,101,2020-03-02 18:30:00,-97.5,35.2,F3
1,1,north,2020-03-02 18:45:00,-97.3,35.3,F3
"
}

/// Event 1 crosses grids [1, 1, 2]; event 2 stays in grid 3 for three
/// records. Exactly one event spans more than one grid.
#[cfg(test)]
pub(crate) fn fixture_grid_events_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,1,1,2020-04-01 10:00:00,-97.0,35.0,F2
1,1,1,2020-04-01 10:10:00,-96.9,35.1,F2
2,1,2,2020-04-01 10:20:00,-96.8,35.2,F2
3,2,3,2020-04-02 15:00:00,-95.0,36.0,EF1
4,2,3,2020-04-02 15:10:00,-95.0,36.0,EF1
5,2,3,2020-04-02 15:20:00,-95.0,36.0,EF1
"
}

/// Grid 101 over 2020-06-01..2020-06-10 with threshold 2:
///
/// - event 10: two qualifying records in grid 101 (counted once)
/// - event 11: one qualifying record
/// - event 12: below threshold
/// - event 13: qualifying rating but grid 102
/// - event 14: grid 101 and qualifying but outside the range
/// - event 15: grid 101, rating unknown
#[cfg(test)]
pub(crate) fn fixture_probability_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,10,101,2020-06-02 14:00:00,-97.0,35.0,F2
1,10,101,2020-06-02 14:20:00,-96.9,35.0,F3
2,11,101,2020-06-10 00:00:00,-97.1,35.1,EF4
3,12,101,2020-06-05 09:00:00,-97.2,35.2,F1
4,13,102,2020-06-06 09:00:00,-96.0,35.0,F5
5,14,101,2020-06-11 09:00:00,-97.0,35.0,F3
6,15,101,2020-06-07 09:00:00,-97.0,35.0,unknown
"
}

/// Blank cells in the id and coordinate columns, 2020-03-01..2020-03-10:
///
/// - row 0: no event_id (grid 101, F3)
/// - row 1: no grid_id (event 20, the only F4)
/// - row 2: no lat (event 21, grid 101)
/// - row 3: no lon (event 21, grid 102)
/// - row 4: complete (event 23, grid 101)
#[cfg(test)]
pub(crate) fn fixture_blank_cells_csv() -> &'static str {
    ",event_id,grid_id,datetime,lon,lat,fujita_scale
0,,101,2020-03-02 18:30:00,-97.5,35.0,F3
1,20,,2020-03-02 18:45:00,-97.3,35.1,F4
2,21,101,2020-03-03 10:00:00,-97.0,,EF2
3,21,102,2020-03-03 10:20:00,,35.3,EF2
4,23,101,2020-03-05 09:00:00,-96.5,35.4,F2
"
}
