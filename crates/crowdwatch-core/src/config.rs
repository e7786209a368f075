//! Configuration loading and typed config structures for Crowdwatch.
//!
//! The canonical configuration lives in `crowdwatch-config.yaml` at the
//! project root. Every threshold defaults to the value the dashboard has
//! always used, so an absent file or an absent key changes nothing.

use std::path::Path;

use serde::Deserialize;

use crate::alerts::{CRITICAL_DENSITY, DENSE_DENSITY, HIGH_SPEED, STAGNATION_SPEED};
use crate::classify::{HIGH_DENSITY, MEDIUM_DENSITY};
use crate::geometry::{ARROW_METERS_PER_SPEED, METERS_PER_DEGREE};

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV_VAR: &str = "CROWDWATCH_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level analytics configuration.
///
/// Mirrors the structure of `crowdwatch-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyticsConfig {
    /// Density tier thresholds.
    #[serde(default)]
    pub classifier: ClassifierThresholds,

    /// Alert rule thresholds.
    #[serde(default)]
    pub alerts: AlertThresholds,

    /// Flow arrow scaling.
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Boundary validation switches.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AnalyticsConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `CROWDWATCH_LOG` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Density thresholds for the map color tiers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassifierThresholds {
    /// Densities strictly above this are [`Tier::High`](crowdwatch_types::Tier::High).
    #[serde(default = "default_high_density")]
    pub high_density: f64,

    /// Densities strictly above this are at least
    /// [`Tier::Medium`](crowdwatch_types::Tier::Medium).
    #[serde(default = "default_medium_density")]
    pub medium_density: f64,
}

impl ClassifierThresholds {
    /// The dashboard's standing thresholds (80 / 50).
    pub const DEFAULT: Self = Self {
        high_density: HIGH_DENSITY,
        medium_density: MEDIUM_DENSITY,
    };
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds for the alert rule table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AlertThresholds {
    /// Density strictly above this raises a critical alert and counts the
    /// zone as critical in the metrics.
    #[serde(default = "default_critical_density")]
    pub critical_density: f64,

    /// Density strictly above this makes the zone dense for the
    /// stagnation and high-speed rules.
    #[serde(default = "default_dense_density")]
    pub dense_density: f64,

    /// Speed strictly below this (m/s) counts as stagnation.
    #[serde(default = "default_stagnation_speed")]
    pub stagnation_speed: f64,

    /// Speed strictly above this (m/s) counts as high-speed movement.
    #[serde(default = "default_high_speed")]
    pub high_speed: f64,
}

impl AlertThresholds {
    /// The dashboard's standing thresholds (90 / 70 / 1 m/s / 3 m/s).
    pub const DEFAULT: Self = Self {
        critical_density: CRITICAL_DENSITY,
        dense_density: DENSE_DENSITY,
        stagnation_speed: STAGNATION_SPEED,
        high_speed: HIGH_SPEED,
    };
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scaling for the flow arrow drawn at each zone.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeometryConfig {
    /// Arrow length in meters per 1 m/s of flow speed.
    #[serde(default = "default_arrow_meters_per_speed")]
    pub arrow_meters_per_speed: f64,

    /// Meters per degree used by the equirectangular approximation.
    #[serde(default = "default_meters_per_degree")]
    pub meters_per_degree: f64,
}

impl GeometryConfig {
    /// Ten meters per m/s, 111 320 meters per degree.
    pub const DEFAULT: Self = Self {
        arrow_meters_per_speed: ARROW_METERS_PER_SPEED,
        meters_per_degree: METERS_PER_DEGREE,
    };
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Boundary validation switches.
///
/// Non-finite numbers and negative speeds are always rejected. The
/// switches here tighten validation beyond that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Reject densities outside 0 to 100 instead of evaluating them.
    #[serde(default)]
    pub strict_density_range: bool,

    /// Reject snapshots in which two zones share an id.
    #[serde(default)]
    pub reject_duplicate_ids: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Apply environment variable overrides.
    ///
    /// If `CROWDWATCH_LOG` is set, it replaces `level`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(LOG_ENV_VAR) {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_high_density() -> f64 {
    HIGH_DENSITY
}

const fn default_medium_density() -> f64 {
    MEDIUM_DENSITY
}

const fn default_critical_density() -> f64 {
    CRITICAL_DENSITY
}

const fn default_dense_density() -> f64 {
    DENSE_DENSITY
}

const fn default_stagnation_speed() -> f64 {
    STAGNATION_SPEED
}

const fn default_high_speed() -> f64 {
    HIGH_SPEED
}

const fn default_arrow_meters_per_speed() -> f64 {
    ARROW_METERS_PER_SPEED
}

const fn default_meters_per_degree() -> f64 {
    METERS_PER_DEGREE
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_thresholds() {
        let config = AnalyticsConfig::default();
        assert!((config.classifier.high_density - 80.0).abs() < f64::EPSILON);
        assert!((config.classifier.medium_density - 50.0).abs() < f64::EPSILON);
        assert!((config.alerts.critical_density - 90.0).abs() < f64::EPSILON);
        assert!((config.alerts.dense_density - 70.0).abs() < f64::EPSILON);
        assert!((config.alerts.stagnation_speed - 1.0).abs() < f64::EPSILON);
        assert!((config.alerts.high_speed - 3.0).abs() < f64::EPSILON);
        assert!((config.geometry.arrow_meters_per_speed - 10.0).abs() < f64::EPSILON);
        assert!((config.geometry.meters_per_degree - 111_320.0).abs() < f64::EPSILON);
        assert!(!config.validation.strict_density_range);
        assert!(!config.validation.reject_duplicate_ids);
        assert!(!config.logging.json);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
classifier:
  high_density: 85
  medium_density: 55

alerts:
  critical_density: 95
  dense_density: 75
  stagnation_speed: 0.5
  high_speed: 4

geometry:
  arrow_meters_per_speed: 20
  meters_per_degree: 111000

validation:
  strict_density_range: true
  reject_duplicate_ids: true

logging:
  json: true
";
        let config = AnalyticsConfig::parse(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert!((config.classifier.high_density - 85.0).abs() < f64::EPSILON);
        assert!((config.classifier.medium_density - 55.0).abs() < f64::EPSILON);
        assert!((config.alerts.critical_density - 95.0).abs() < f64::EPSILON);
        assert!((config.alerts.dense_density - 75.0).abs() < f64::EPSILON);
        assert!((config.alerts.stagnation_speed - 0.5).abs() < f64::EPSILON);
        assert!((config.alerts.high_speed - 4.0).abs() < f64::EPSILON);
        assert!((config.geometry.arrow_meters_per_speed - 20.0).abs() < f64::EPSILON);
        assert!((config.geometry.meters_per_degree - 111_000.0).abs() < f64::EPSILON);
        assert!(config.validation.strict_density_range);
        assert!(config.validation.reject_duplicate_ids);
        assert!(config.logging.json);
    }

    #[test]
    fn parse_partial_yaml_keeps_other_defaults() {
        let yaml = "alerts:\n  critical_density: 92\n";
        let config = AnalyticsConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert!((config.alerts.critical_density - 92.0).abs() < f64::EPSILON);
        assert!((config.alerts.dense_density - 70.0).abs() < f64::EPSILON);
        assert_eq!(config.classifier, ClassifierThresholds::DEFAULT);
        assert_eq!(config.geometry, GeometryConfig::DEFAULT);
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = AnalyticsConfig::parse("alerts: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AnalyticsConfig::from_file(Path::new("/nonexistent/crowdwatch-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("crowdwatch-config.yaml");
        if path.exists() {
            let config = AnalyticsConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
