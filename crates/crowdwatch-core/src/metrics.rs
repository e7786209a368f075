//! Headline metrics for a snapshot.
//!
//! The critical-zone count uses the same threshold as the critical alert
//! rule, so the two numbers always agree.

use crowdwatch_types::{Alert, SnapshotMetrics, Zone};

/// Mean density across the snapshot, or `None` when it is empty.
pub fn average_density(zones: &[Zone]) -> Option<f64> {
    if zones.is_empty() {
        return None;
    }
    let sum: f64 = zones.iter().map(|z| z.density).sum();
    Some(sum / f64::from(saturating_count(zones.len())))
}

/// Number of zones with density strictly above `critical_density`.
pub fn critical_zone_count(zones: &[Zone], critical_density: f64) -> u32 {
    saturating_count(
        zones
            .iter()
            .filter(|z| z.density > critical_density)
            .count(),
    )
}

/// Compute the metric cards for a snapshot and the alerts raised for it.
pub fn snapshot_metrics(
    zones: &[Zone],
    alerts: &[Alert],
    critical_density: f64,
) -> SnapshotMetrics {
    SnapshotMetrics {
        total_zones: saturating_count(zones.len()),
        average_density: average_density(zones),
        critical_zones: critical_zone_count(zones, critical_density),
        active_alerts: saturating_count(alerts.len()),
    }
}

/// `usize` to `u32`, clamped at `u32::MAX`.
fn saturating_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use crowdwatch_types::{AlertType, Coordinate, Flow, ZoneId};

    use super::*;

    fn zone(id: u32, density: f64) -> Zone {
        Zone {
            id: ZoneId(id),
            name: None,
            center: Coordinate::default(),
            density,
            flow: Flow {
                direction: "N".to_owned(),
                speed: 1.0,
            },
            radius: 100.0,
        }
    }

    #[test]
    fn empty_snapshot_has_no_average() {
        let metrics = snapshot_metrics(&[], &[], 90.0);
        assert_eq!(metrics.total_zones, 0);
        assert!(metrics.average_density.is_none());
        assert_eq!(metrics.critical_zones, 0);
        assert_eq!(metrics.active_alerts, 0);
    }

    #[test]
    fn average_of_dashboard_zones() {
        let zones = [zone(1, 85.0), zone(2, 40.0), zone(3, 95.0), zone(4, 60.0)];
        let avg = average_density(&zones).unwrap_or(f64::NAN);
        assert!((avg - 70.0).abs() < 1e-12);
    }

    #[test]
    fn critical_count_is_strict() {
        let zones = [zone(1, 90.0), zone(2, 90.1), zone(3, 100.0)];
        assert_eq!(critical_zone_count(&zones, 90.0), 2);
    }

    #[test]
    fn active_alerts_counts_records() {
        let alerts = vec![
            Alert {
                id: ZoneId(1),
                message: String::new(),
                alert_type: AlertType::Critical,
            },
            Alert {
                id: ZoneId(1),
                message: String::new(),
                alert_type: AlertType::Warning,
            },
        ];
        let metrics = snapshot_metrics(&[zone(1, 95.0)], &alerts, 90.0);
        assert_eq!(metrics.active_alerts, 2);
        assert_eq!(metrics.total_zones, 1);
        assert_eq!(metrics.critical_zones, 1);
    }
}
