/// Error types for loading and querying tornado data.
///
/// Load failures are structural: the file is missing, unreadable, or not
/// tabular. A single bad `datetime` or `fujita_scale` value is never an
/// error; it degrades to `None` during normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Structural failure while reading the input table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed delimited data (ragged rows, bad quoting).
    #[error("failed to parse {path} as tabular data: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row was found.
    #[error("input has no header row")]
    EmptyFile,

    /// A required column is absent from the header.
    #[error("required column '{0}' not found in header")]
    MissingColumn(String),

    /// A structural column (ids, coordinates) holds a value that cannot be
    /// used at all.
    #[error("line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },
}

/// Invalid arguments passed to a query.
#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    /// A date argument could not be parsed.
    #[error("invalid date '{0}'")]
    InvalidDate(String),

    /// The end of the range precedes its start, so there is no inclusive
    /// day count to divide by.
    #[error("end date {end} is before start date {start}")]
    InvertedRange { start: String, end: String },
}

/// Failure while loading `tornado.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
