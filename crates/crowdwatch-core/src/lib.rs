//! Zone analytics and alerting engine for Crowdwatch.
//!
//! Takes a snapshot of zone observations and derives what the map
//! dashboard draws: a density tier per zone, a flow arrow per zone, a list
//! of rule-based alerts, and the headline metrics. Every analytics function
//! is pure and reentrant; there is no state between calls.
//!
//! # Modules
//!
//! - [`alerts`] -- Ordered alert rule table and alert generation.
//! - [`classify`] -- Density to [`Tier`](crowdwatch_types::Tier) mapping.
//! - [`config`] -- Configuration loading from `crowdwatch-config.yaml`.
//! - [`evaluate`] -- One render cycle composing the other modules.
//! - [`geometry`] -- Direction bearings and flow arrow endpoints.
//! - [`metrics`] -- Zone count, mean density, critical zones, alert count.
//! - [`snapshot`] -- JSON snapshot loading.
//! - [`validation`] -- Boundary checks producing `InvalidZone` errors.

pub mod alerts;
pub mod classify;
pub mod config;
pub mod evaluate;
pub mod geometry;
pub mod metrics;
pub mod snapshot;
pub mod validation;

pub use alerts::{AlertRule, generate_alerts, generate_alerts_with, zone_alerts};
pub use classify::{classify, classify_with};
pub use config::{AnalyticsConfig, ConfigError};
pub use evaluate::{evaluate, evaluate_checked, zone_view};
pub use geometry::{direction_angle_degrees, flow_indicator, flow_offset, flow_offset_with};
pub use metrics::snapshot_metrics;
pub use snapshot::{SnapshotError, load_snapshot, parse_snapshot};
pub use validation::{InvalidZoneReason, ValidationError, validate_snapshot, validate_zone};
