/// Reading and cleaning raw tornado exports.
///
/// Submodules:
/// - `csv_table` — delimited file → column-name → values table
/// - `normalize` — per-field cleanup into `TornadoRecord`s
/// - `fixtures`  (test only) — representative CSV payloads

pub mod csv_table;
pub mod normalize;

#[cfg(test)]
pub(crate) mod fixtures;
