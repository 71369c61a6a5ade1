/// tornado_analysis: historical tornado record analysis.
///
/// # Module structure
///
/// ```text
/// tornado_analysis
/// ├── model       — shared row type (TornadoRecord) and column names
/// ├── error       — LoadError, QueryError, ConfigError
/// ├── config      — runner configuration loader (tornado.toml)
/// ├── ingest
/// │   ├── csv_table — delimited file → column-oriented raw table
/// │   ├── normalize — datetime / longitude / Fujita scale cleanup
/// │   └── fixtures  (test only) — representative CSV payloads
/// └── analysis
///     ├── dataset — TornadoDataset: load + date_filter, worst_tornadoes,
///     │             multiple_grid_count, grid_severity_probability
///     └── view    — TornadoView, read-only snapshot of selected rows
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;

pub use analysis::dataset::TornadoDataset;
pub use analysis::view::TornadoView;
pub use error::{ConfigError, LoadError, QueryError};
pub use model::TornadoRecord;
