/// Runner configuration loader - parses tornado.toml
///
/// Keeps the data file location and default query parameters out of the
/// command line. Only the `tornado_analysis` binary reads this;
/// `TornadoDataset::load` takes nothing but a path.
///
/// Lookup order for the data file:
/// 1. `--data PATH` on the command line (handled in main)
/// 2. `TORNADO_DATA` environment variable (a `.env` file is honored)
/// 3. `[dataset] path` in tornado.toml

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "tornado.toml";

/// Environment variable that overrides `[dataset] path`.
pub const DATA_PATH_ENV: &str = "TORNADO_DATA";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub query: QueryDefaults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
}

/// Fallback query arguments used when the command line omits them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryDefaults {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grid_id: Option<i64>,
    pub fujita_scale: Option<f64>,
}

/// Parses the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `tornado.toml` from the working directory if present, then applies
/// the `TORNADO_DATA` override. A missing file is not an error.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = Path::new(DEFAULT_CONFIG_PATH);
    let config = if path.exists() {
        load_config_from(path)?
    } else {
        AppConfig::default()
    };

    dotenv::dotenv().ok();
    Ok(config.with_data_path_override(env::var(DATA_PATH_ENV).ok()))
}

impl AppConfig {
    /// Replaces the dataset path when `path` is set and non-empty.
    pub fn with_data_path_override(mut self, path: Option<String>) -> Self {
        if let Some(p) = path.filter(|p| !p.trim().is_empty()) {
            self.dataset.path = Some(PathBuf::from(p));
        }
        self
    }
}
