/// Analytical queries over the normalized tornado table.
///
/// Submodules:
/// - `dataset` — `TornadoDataset`: owns the table, answers the four queries.
/// - `view`    — `TornadoView`: read-only row snapshots returned by queries.

pub mod dataset;
pub mod view;
