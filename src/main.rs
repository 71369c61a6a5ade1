//! Tornado Analysis - command-line runner
//!
//! Loads a historical tornado CSV export once and runs one query against it:
//! 1. `filter`       — rows whose datetime falls in the range
//! 2. `worst`        — rows at the range's highest Fujita rating, newest first
//! 3. `multi-grid`   — number of events that crossed more than one grid cell
//! 4. `probability`  — distinct qualifying events per day in one grid cell
//!
//! Usage:
//!   tornado_analysis [--data PATH] [--config PATH] [--json] filter [START END]
//!   tornado_analysis [--data PATH] [--config PATH] [--json] worst [START END]
//!   tornado_analysis [--data PATH] [--config PATH] multi-grid [START END]
//!   tornado_analysis [--data PATH] [--config PATH] probability [GRID FUJITA START END]
//!
//! Arguments left off fall back to the `[query]` table in tornado.toml.
//!
//! Environment:
//!   TORNADO_DATA - path to the CSV export (overrides tornado.toml)
//!   RUST_LOG     - log filter (default: info)

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use tornado_analysis::config::{self, AppConfig, QueryDefaults};
use tornado_analysis::{TornadoDataset, TornadoView};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: tornado_analysis [--data PATH] [--config PATH] [--json] \
<filter|worst|multi-grid|probability> [ARGS...]";

/// Parsed command line.
struct Args {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    command: String,
    rest: Vec<String>,
}

fn main() {
    setup_logging();

    let args = parse_args(env::args().skip(1).collect()).unwrap_or_else(|msg| {
        eprintln!("Error: {}", msg);
        eprintln!("{}", USAGE);
        process::exit(1);
    });

    let config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("❌ {}", e);
        process::exit(2);
    });

    let data_path = match args.data.clone().or_else(|| config.dataset.path.clone()) {
        Some(p) => p,
        None => {
            eprintln!("Error: no data file given (use --data, TORNADO_DATA or tornado.toml)");
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config, &data_path) {
        error!("{}", e);
        eprintln!("❌ {}", e);
        process::exit(2);
    }
}

fn run(args: &Args, config: &AppConfig, data_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("🌪  Tornado Analysis");
    println!("===================\n");

    let dataset = TornadoDataset::load(data_path)?;
    info!(rows = dataset.len(), "dataset ready");
    println!("✓ Loaded {} records from {}\n", dataset.len(), data_path.display());

    let defaults = &config.query;

    match args.command.as_str() {
        "filter" => {
            let (start, end) = range_args(&args.rest, 0, defaults)?;
            let view = dataset.date_filter(&start, &end)?;
            println!("📋 {} records between {} and {}", view.len(), start, end);
            print_view(&view, args.json)?;
        }
        "worst" => {
            let (start, end) = range_args(&args.rest, 0, defaults)?;
            let view = dataset.worst_tornadoes(&start, &end)?;
            match view.max_fujita_scale() {
                Some(max) => println!("🔍 {} records at Fujita {} between {} and {}", view.len(), max, start, end),
                None => println!("ℹ️  No rated tornadoes between {} and {}", start, end),
            }
            print_view(&view, args.json)?;
        }
        "multi-grid" => {
            let (start, end) = range_args(&args.rest, 0, defaults)?;
            let count = dataset.multiple_grid_count(&start, &end)?;
            println!("🗺  {} events crossed more than one grid between {} and {}", count, start, end);
        }
        "probability" => {
            let grid_id: i64 = match args.rest.first() {
                Some(s) => s.parse().map_err(|_| format!("invalid grid id '{}'", s))?,
                None => defaults.grid_id.ok_or("missing GRID argument")?,
            };
            let fujita_scale: f64 = match args.rest.get(1) {
                Some(s) => s.parse().map_err(|_| format!("invalid Fujita threshold '{}'", s))?,
                None => defaults.fujita_scale.ok_or("missing FUJITA argument")?,
            };
            let (start, end) = range_args(&args.rest, 2, defaults)?;

            let p = dataset.grid_severity_probability(grid_id, fujita_scale, &start, &end)?;
            println!(
                "📈 P(Fujita >= {}) in grid {} between {} and {}: {:.6}",
                fujita_scale, grid_id, start, end, p
            );
        }
        other => return Err(format!("unknown command '{}'\n{}", other, USAGE).into()),
    }

    Ok(())
}

fn parse_args(raw: Vec<String>) -> Result<Args, String> {
    let mut data = None;
    let mut config = None;
    let mut json = false;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "--data" | "--config" => {
                let value = raw
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a path", raw[i]))?;
                if raw[i] == "--data" {
                    data = Some(PathBuf::from(value));
                } else {
                    config = Some(PathBuf::from(value));
                }
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                process::exit(0);
            }
            _ => {
                positional.push(raw[i].clone());
                i += 1;
            }
        }
    }

    if positional.is_empty() {
        return Err("missing command".to_string());
    }
    let command = positional.remove(0);

    Ok(Args {
        data,
        config,
        json,
        command,
        rest: positional,
    })
}

/// START and END at `offset` in `rest`, or the configured defaults.
fn range_args(rest: &[String], offset: usize, defaults: &QueryDefaults) -> Result<(String, String), String> {
    let start = rest
        .get(offset)
        .cloned()
        .or_else(|| defaults.start_date.clone())
        .ok_or("missing START date")?;
    let end = rest
        .get(offset + 1)
        .cloned()
        .or_else(|| defaults.end_date.clone())
        .ok_or("missing END date")?;
    Ok((start, end))
}

fn print_view(view: &TornadoView, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    for r in view {
        let when = or_dash(r.datetime.map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()));
        println!(
            "   {}  event {:>6}  grid {:>5}  F{:<3} ({}, {})",
            when,
            or_dash(r.event_id.map(|id| id.to_string())),
            or_dash(r.grid_id.map(|id| id.to_string())),
            or_dash(r.fujita_scale.map(|f| f.to_string())),
            or_dash(r.lat.map(|lat| format!("{lat:.2}"))),
            or_dash(r.lon.map(|lon| format!("{lon:.2}")))
        );
    }
    Ok(())
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Initialize logging system
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
