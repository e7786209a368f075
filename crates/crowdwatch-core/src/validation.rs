//! Boundary validation for zone snapshots.
//!
//! The analytics functions accept any number and never fail. Validation is
//! for the layer that receives data from outside: it rejects values the
//! engine cannot produce meaningful output for (NaN, infinities, negative
//! speeds or radii) and, when configured, densities outside 0 to 100 and
//! repeated zone ids.

use std::collections::BTreeSet;

use crowdwatch_types::{Zone, ZoneId};
use tracing::warn;

use crate::config::ValidationConfig;

/// Lowest nominal density.
pub const MIN_DENSITY: f64 = 0.0;

/// Highest nominal density.
pub const MAX_DENSITY: f64 = 100.0;

/// Errors raised when a snapshot fails boundary validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A zone record is unusable.
    #[error("invalid zone {id}: {reason}")]
    InvalidZone {
        /// The offending zone.
        id: ZoneId,
        /// What is wrong with it.
        reason: InvalidZoneReason,
    },
}

/// Why a zone was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidZoneReason {
    /// Density is NaN or infinite.
    #[error("density is not a finite number ({0})")]
    NonFiniteDensity(f64),

    /// Density is outside 0 to 100 and strict range checking is on.
    #[error("density {0} is outside 0..=100")]
    DensityOutOfRange(f64),

    /// Speed is NaN or infinite.
    #[error("flow speed is not a finite number ({0})")]
    NonFiniteSpeed(f64),

    /// Speed is below zero.
    #[error("flow speed {0} is negative")]
    NegativeSpeed(f64),

    /// Center latitude or longitude is NaN or infinite.
    #[error("center is not a finite coordinate")]
    NonFiniteCenter,

    /// Radius is NaN, infinite, or negative.
    #[error("radius {0} is not a non-negative finite number")]
    InvalidRadius(f64),

    /// Another zone earlier in the snapshot has the same id.
    #[error("duplicate zone id")]
    DuplicateId,
}

/// Check a single zone.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidZone`] with the first problem found.
pub fn validate_zone(zone: &Zone, config: &ValidationConfig) -> Result<(), ValidationError> {
    check_zone(zone, config).map_err(|reason| {
        warn!(zone_id = %zone.id, %reason, "zone rejected");
        ValidationError::InvalidZone {
            id: zone.id,
            reason,
        }
    })
}

/// Check every zone in a snapshot, stopping at the first failure.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidZone`] for the first zone that fails.
pub fn validate_snapshot(
    zones: &[Zone],
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for zone in zones {
        validate_zone(zone, config)?;
        if config.reject_duplicate_ids && !seen.insert(zone.id) {
            warn!(zone_id = %zone.id, "duplicate zone id rejected");
            return Err(ValidationError::InvalidZone {
                id: zone.id,
                reason: InvalidZoneReason::DuplicateId,
            });
        }
    }
    Ok(())
}

fn check_zone(zone: &Zone, config: &ValidationConfig) -> Result<(), InvalidZoneReason> {
    let density = zone.density;
    if !density.is_finite() {
        return Err(InvalidZoneReason::NonFiniteDensity(density));
    }
    if config.strict_density_range && !(MIN_DENSITY..=MAX_DENSITY).contains(&density) {
        return Err(InvalidZoneReason::DensityOutOfRange(density));
    }

    let speed = zone.flow.speed;
    if !speed.is_finite() {
        return Err(InvalidZoneReason::NonFiniteSpeed(speed));
    }
    if speed < 0.0 {
        return Err(InvalidZoneReason::NegativeSpeed(speed));
    }

    if !zone.center.is_finite() {
        return Err(InvalidZoneReason::NonFiniteCenter);
    }

    if !zone.radius.is_finite() || zone.radius < 0.0 {
        return Err(InvalidZoneReason::InvalidRadius(zone.radius));
    }

    Ok(())
}
