//! The JSON document written to stdout.

use chrono::{DateTime, Utc};
use crowdwatch_types::{AlertType, SnapshotEvaluation};
use serde::Serialize;
use tracing::{info, warn};

/// One evaluated snapshot plus where and when it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the evaluation ran.
    pub generated_at: DateTime<Utc>,
    /// Path of the snapshot file.
    pub snapshot: String,
    /// Dashboard data.
    pub evaluation: SnapshotEvaluation,
}

impl Report {
    /// Wrap an evaluation, stamping it with the current time.
    pub fn new(snapshot: String, evaluation: SnapshotEvaluation) -> Self {
        Self {
            generated_at: Utc::now(),
            snapshot,
            evaluation,
        }
    }

    /// Log the metric cards and every alert.
    ///
    /// Critical alerts go out at `warn`, everything else at `info`.
    pub fn log_summary(&self) {
        let metrics = &self.evaluation.metrics;
        info!(
            total_zones = metrics.total_zones,
            average_density = %format_average(metrics.average_density),
            critical_zones = metrics.critical_zones,
            active_alerts = metrics.active_alerts,
            "Snapshot evaluated"
        );

        for alert in &self.evaluation.alerts {
            match alert.alert_type {
                AlertType::Critical => warn!(zone_id = %alert.id, "{}", alert.message),
                AlertType::Warning => info!(zone_id = %alert.id, "{}", alert.message),
            }
        }

        if self.evaluation.alerts.is_empty() {
            info!("No alerts at the moment");
        }
    }
}

/// Mean density to one decimal place, or `n/a` for an empty snapshot.
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "n/a".to_owned(), |avg| format!("{avg:.1}%"))
}
