//! Rule-based alert generation for zone snapshots.
//!
//! Every zone is checked against a fixed, ordered rule table. Rules are
//! independent: each one that matches appends exactly one alert, so a zone
//! can raise several alerts sharing its id.
//!
//! | Order | Rule | Condition | Type |
//! |-------|------|-----------|------|
//! | 1 | [`AlertRule::CriticalDensity`] | `density > 90` | critical |
//! | 2 | [`AlertRule::Stagnation`] | `speed < 1 && density > 70` | warning |
//! | 3 | [`AlertRule::HighSpeedInDenseArea`] | `density > 70 && speed > 3` | warning |
//!
//! All comparisons are strict. Rules 2 and 3 never fire together with the
//! standing thresholds only because their speed ranges do not overlap.

use crowdwatch_types::{Alert, AlertType, Zone};
use tracing::trace;

use crate::config::AlertThresholds;

/// Density strictly above this raises a critical alert.
pub const CRITICAL_DENSITY: f64 = 90.0;

/// Density strictly above this makes a zone dense.
pub const DENSE_DENSITY: f64 = 70.0;

/// Speed strictly below this (m/s) is stagnation.
pub const STAGNATION_SPEED: f64 = 1.0;

/// Speed strictly above this (m/s) is high-speed movement.
pub const HIGH_SPEED: f64 = 3.0;

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One row of the alert rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertRule {
    /// Density over the critical threshold.
    CriticalDensity,
    /// A dense zone that has almost stopped moving.
    Stagnation,
    /// A dense zone moving fast.
    HighSpeedInDenseArea,
}

impl AlertRule {
    /// Rules in evaluation order.
    pub const ORDERED: [Self; 3] = [
        Self::CriticalDensity,
        Self::Stagnation,
        Self::HighSpeedInDenseArea,
    ];

    /// Severity of alerts raised by this rule.
    pub const fn alert_type(self) -> AlertType {
        match self {
            Self::CriticalDensity => AlertType::Critical,
            Self::Stagnation | Self::HighSpeedInDenseArea => AlertType::Warning,
        }
    }

    /// Short machine name, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CriticalDensity => "critical_density",
            Self::Stagnation => "stagnation",
            Self::HighSpeedInDenseArea => "high_speed_dense",
        }
    }

    /// Whether the zone satisfies this rule's condition.
    pub fn matches(self, zone: &Zone, thresholds: &AlertThresholds) -> bool {
        let density = zone.density;
        let speed = zone.flow.speed;
        match self {
            Self::CriticalDensity => density > thresholds.critical_density,
            Self::Stagnation => {
                speed < thresholds.stagnation_speed && density > thresholds.dense_density
            }
            Self::HighSpeedInDenseArea => {
                density > thresholds.dense_density && speed > thresholds.high_speed
            }
        }
    }

    /// Alert text for a zone with the given display label.
    pub fn message(self, label: &str) -> String {
        match self {
            Self::CriticalDensity => {
                format!("Critical: \"{label}\" has extremely high density.")
            }
            Self::Stagnation => format!("Warning: \"{label}\" is experiencing stagnation."),
            Self::HighSpeedInDenseArea => {
                format!("Warning: High-speed movement in a dense area at \"{label}\".")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Alerts raised by a single zone, in rule order.
pub fn zone_alerts(zone: &Zone, thresholds: &AlertThresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let mut label: Option<String> = None;

    for rule in AlertRule::ORDERED {
        if !rule.matches(zone, thresholds) {
            continue;
        }
        let label = label.get_or_insert_with(|| zone.display_label());
        trace!(zone_id = %zone.id, rule = rule.name(), "alert rule matched");
        alerts.push(Alert {
            id: zone.id,
            message: rule.message(label),
            alert_type: rule.alert_type(),
        });
    }

    alerts
}

/// Alerts for a snapshot with the standing thresholds.
///
/// Output follows zone order first, then rule order within a zone.
pub fn generate_alerts(zones: &[Zone]) -> Vec<Alert> {
    generate_alerts_with(zones, &AlertThresholds::DEFAULT)
}

/// Alerts for a snapshot with configured thresholds.
pub fn generate_alerts_with(zones: &[Zone], thresholds: &AlertThresholds) -> Vec<Alert> {
    zones
        .iter()
        .flat_map(|zone| zone_alerts(zone, thresholds))
        .collect()
}
