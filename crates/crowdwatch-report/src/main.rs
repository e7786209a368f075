//! Report binary for Crowdwatch.
//!
//! Loads configuration and one zone snapshot, evaluates it, logs the
//! headline metrics and alerts to stderr, and writes the full dashboard
//! data as JSON to stdout.
//!
//! # Usage
//!
//! ```text
//! crowdwatch-report [SNAPSHOT]
//! ```
//!
//! `SNAPSHOT` defaults to `$CROWDWATCH_SNAPSHOT`, then to
//! `data/sample-snapshot.json`. Configuration is read from
//! `$CROWDWATCH_CONFIG`, then `crowdwatch-config.yaml`; a missing file
//! means defaults.
//!
//! # Startup Sequence
//!
//! 1. Load configuration
//! 2. Initialize structured logging (tracing)
//! 3. Load the snapshot
//! 4. Validate and evaluate it
//! 5. Log the summary and write the report

mod error;
mod report;

use std::io::Write;
use std::path::{Path, PathBuf};

use crowdwatch_core::config::{AnalyticsConfig, LoggingConfig};
use crowdwatch_core::{evaluate_checked, load_snapshot};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReportError;
use crate::report::Report;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "crowdwatch-config.yaml";

/// Default snapshot file, relative to the working directory.
const DEFAULT_SNAPSHOT_PATH: &str = "data/sample-snapshot.json";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration or the snapshot cannot be loaded, a
/// zone fails validation, or the report cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = env_path("CROWDWATCH_CONFIG", DEFAULT_CONFIG_PATH);
    let (config, config_found) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("crowdwatch-report starting");
    if config_found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Load the snapshot.
    let snapshot_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| env_path("CROWDWATCH_SNAPSHOT", DEFAULT_SNAPSHOT_PATH), PathBuf::from);
    let zones = load_snapshot(&snapshot_path).map_err(ReportError::from)?;
    info!(path = %snapshot_path.display(), zones = zones.len(), "Snapshot loaded");

    // 4. Validate and evaluate.
    let evaluation = evaluate_checked(&zones, &config).map_err(ReportError::from)?;

    // 5. Summarize and write.
    let report = Report::new(snapshot_path.display().to_string(), evaluation);
    report.log_summary();
    write_report(&report)?;

    Ok(())
}

/// Resolve a path from an environment variable, falling back to a default.
fn env_path(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var).map_or_else(|| PathBuf::from(default), PathBuf::from)
}

/// Load configuration from `path`, or defaults if the file does not exist.
///
/// The returned flag says whether the file was found.
fn load_config(path: &Path) -> Result<(AnalyticsConfig, bool), ReportError> {
    if path.exists() {
        let config = AnalyticsConfig::from_file(path)?;
        Ok((config, true))
    } else {
        let mut config = AnalyticsConfig::default();
        config.logging.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global tracing subscriber, writing to stderr.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Write the report as pretty JSON to stdout.
fn write_report(report: &Report) -> Result<(), ReportError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}
