//! One render cycle over a snapshot.
//!
//! [`evaluate`] runs the classifier and flow geometry per zone, the alert
//! rules over the whole snapshot, and the headline metrics. The pieces do
//! not depend on each other; this module only composes them.

use crowdwatch_types::{SnapshotEvaluation, Zone, ZoneView};
use tracing::debug;

use crate::alerts::generate_alerts_with;
use crate::classify::classify_with;
use crate::config::AnalyticsConfig;
use crate::geometry::flow_indicator;
use crate::metrics::snapshot_metrics;
use crate::validation::{ValidationError, validate_snapshot};

/// Render data for one zone.
pub fn zone_view(zone: &Zone, config: &AnalyticsConfig) -> ZoneView {
    let tier = classify_with(zone.density, &config.classifier);
    ZoneView {
        id: zone.id,
        label: zone.display_label(),
        tier,
        color: tier.color().to_owned(),
        indicator: flow_indicator(zone, &config.geometry),
    }
}

/// Evaluate a snapshot without validating it.
///
/// Total and deterministic: the same zones and config always give the same
/// result, in input order.
pub fn evaluate(zones: &[Zone], config: &AnalyticsConfig) -> SnapshotEvaluation {
    let views: Vec<ZoneView> = zones.iter().map(|z| zone_view(z, config)).collect();
    let alerts = generate_alerts_with(zones, &config.alerts);
    let metrics = snapshot_metrics(zones, &alerts, config.alerts.critical_density);

    debug!(
        zones = metrics.total_zones,
        alerts = metrics.active_alerts,
        critical_zones = metrics.critical_zones,
        "snapshot evaluated"
    );

    SnapshotEvaluation {
        zones: views,
        alerts,
        metrics,
    }
}

/// Validate a snapshot, then evaluate it.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidZone`] if any zone fails validation
/// under `config.validation`.
pub fn evaluate_checked(
    zones: &[Zone],
    config: &AnalyticsConfig,
) -> Result<SnapshotEvaluation, ValidationError> {
    validate_snapshot(zones, &config.validation)?;
    Ok(evaluate(zones, config))
}

#[cfg(test)]
mod tests {
    use crowdwatch_types::{Coordinate, Flow, Tier, ZoneId};

    use super::*;

    fn zone(id: u32, name: Option<&str>, density: f64, direction: &str, speed: f64) -> Zone {
        Zone {
            id: ZoneId(id),
            name: name.map(str::to_owned),
            center: Coordinate::new(21.39, 39.86),
            density,
            flow: Flow {
                direction: direction.to_owned(),
                speed,
            },
            radius: 200.0,
        }
    }

    #[test]
    fn view_per_zone_in_order() {
        let zones = [
            zone(3, Some("Prayer Hall"), 95.0, "E", 0.5),
            zone(1, None, 40.0, "N", 1.5),
            zone(2, Some("Exit Area"), 60.0, "E", 3.0),
        ];
        let evaluation = evaluate(&zones, &AnalyticsConfig::default());

        let ids: Vec<_> = evaluation.zones.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![ZoneId(3), ZoneId(1), ZoneId(2)]);

        let tiers: Vec<_> = evaluation.zones.iter().map(|v| v.tier).collect();
        assert_eq!(tiers, vec![Tier::High, Tier::Low, Tier::Medium]);

        let labels: Vec<_> = evaluation.zones.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Prayer Hall", "Zone 1", "Exit Area"]);

        assert_eq!(
            evaluation.zones.first().map(|v| v.color.as_str()),
            Some("red")
        );
        assert_eq!(evaluation.alerts.len(), 2);
        assert_eq!(evaluation.metrics.active_alerts, 2);
        assert_eq!(evaluation.metrics.critical_zones, 1);
    }

    #[test]
    fn empty_snapshot() {
        let evaluation = evaluate(&[], &AnalyticsConfig::default());
        assert!(evaluation.zones.is_empty());
        assert!(evaluation.alerts.is_empty());
        assert!(evaluation.metrics.average_density.is_none());
    }

    #[test]
    fn checked_rejects_bad_zone() {
        let zones = [zone(1, None, 40.0, "N", 1.0), zone(2, None, f64::NAN, "N", 1.0)];
        let result = evaluate_checked(&zones, &AnalyticsConfig::default());
        assert!(matches!(
            result,
            Err(ValidationError::InvalidZone { id: ZoneId(2), .. })
        ));
    }

    #[test]
    fn checked_matches_unchecked_on_good_input() {
        let zones = [zone(1, None, 85.0, "N", 2.5)];
        let config = AnalyticsConfig::default();
        assert_eq!(evaluate_checked(&zones, &config).ok(), Some(evaluate(&zones, &config)));
    }

    #[test]
    fn critical_metric_follows_configured_rule_threshold() {
        let mut config = AnalyticsConfig::default();
        config.alerts.critical_density = 80.0;
        let evaluation = evaluate(&[zone(1, None, 85.0, "N", 2.0)], &config);
        assert_eq!(evaluation.metrics.critical_zones, 1);
        assert_eq!(evaluation.alerts.len(), 1);
    }
}
