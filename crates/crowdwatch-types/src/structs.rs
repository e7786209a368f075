//! Zone observations and the records derived from them.
//!
//! [`Zone`] is the input shape supplied by the data source. Everything else
//! here is produced by the engine for one evaluation and handed to the
//! dashboard; nothing is persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AlertType, Direction, Tier};
use crate::ids::ZoneId;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Geographic position as `(latitude, longitude)` in degrees.
///
/// Serialized as a two-element array, `[lat, lon]`, which is what the map
/// library consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coordinate(pub f64, pub f64);

impl Coordinate {
    /// Build a coordinate from latitude and longitude.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self(lat, lon)
    }

    /// Latitude in degrees.
    pub const fn lat(self) -> f64 {
        self.0
    }

    /// Longitude in degrees.
    pub const fn lon(self) -> f64 {
        self.1
    }

    /// Return this coordinate shifted by the given angular deltas.
    pub const fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self(self.0 + d_lat, self.1 + d_lon)
    }

    /// Whether both components are finite numbers.
    pub const fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Zone
// ---------------------------------------------------------------------------

/// Crowd movement within a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Flow {
    /// Raw heading label as reported, e.g. `"N"`.
    pub direction: String,
    /// Movement speed in meters per second.
    pub speed: f64,
}

impl Flow {
    /// Parsed heading. Unrecognized labels become [`Direction::Unknown`].
    pub fn heading(&self) -> Direction {
        Direction::from_label(&self.direction)
    }
}

/// One monitored zone in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Zone {
    /// Identifier assigned by the data source.
    pub id: ZoneId,
    /// Display name. Absent or empty names fall back to `"Zone <id>"`.
    #[serde(default)]
    pub name: Option<String>,
    /// Center of the zone.
    pub center: Coordinate,
    /// Occupancy percentage, nominally 0 to 100.
    pub density: f64,
    /// Crowd movement.
    pub flow: Flow,
    /// Coverage radius in meters.
    pub radius: f64,
}

impl Zone {
    /// Human-readable label used in alert messages and zone cards.
    pub fn display_label(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("Zone {}", self.id),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived records
// ---------------------------------------------------------------------------

/// A rule-based notice raised for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Alert {
    /// Id of the zone that raised the alert. Not unique across alerts.
    pub id: ZoneId,
    /// Human-readable message naming the zone.
    pub message: String,
    /// Severity tag.
    #[serde(rename = "type")]
    pub alert_type: AlertType,
}

/// Arrow marker showing where a zone's crowd is heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FlowIndicator {
    /// Zone the arrow belongs to.
    pub zone_id: ZoneId,
    /// Parsed heading.
    pub heading: Direction,
    /// Arrow rotation, clockwise from north.
    pub angle_degrees: f64,
    /// Arrow length on the ground.
    pub distance_meters: f64,
    /// Where the arrow tip is drawn.
    pub endpoint: Coordinate,
}

/// Per-zone render data for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ZoneView {
    /// Zone identifier.
    pub id: ZoneId,
    /// Display label.
    pub label: String,
    /// Density tier.
    pub tier: Tier,
    /// Fill color for the tier.
    pub color: String,
    /// Flow arrow.
    pub indicator: FlowIndicator,
}

/// Headline numbers shown above the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SnapshotMetrics {
    /// Number of zones in the snapshot.
    pub total_zones: u32,
    /// Mean density, or `None` for an empty snapshot.
    pub average_density: Option<f64>,
    /// Zones over the critical density threshold.
    pub critical_zones: u32,
    /// Alerts raised for the snapshot.
    pub active_alerts: u32,
}

/// Everything the dashboard needs to draw one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SnapshotEvaluation {
    /// One view per input zone, in input order.
    pub zones: Vec<ZoneView>,
    /// Alerts in zone order, then rule order.
    pub alerts: Vec<Alert>,
    /// Aggregate metrics.
    pub metrics: SnapshotMetrics,
}
