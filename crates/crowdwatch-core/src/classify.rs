//! Density tier classification for map coloring.
//!
//! Thresholds are strict and checked from the top down:
//! - above 80: high
//! - above 50: medium
//! - anything else: low
//!
//! Out-of-range densities (negative, above 100) go through the same rule.
//! NaN fails every comparison and lands in [`Tier::Low`].

use crowdwatch_types::Tier;

use crate::config::ClassifierThresholds;

/// Densities strictly above this are high.
pub const HIGH_DENSITY: f64 = 80.0;

/// Densities strictly above this are at least medium.
pub const MEDIUM_DENSITY: f64 = 50.0;

/// Classify a density with the standing thresholds.
pub fn classify(density: f64) -> Tier {
    classify_with(density, &ClassifierThresholds::DEFAULT)
}

/// Classify a density with configured thresholds.
pub fn classify_with(density: f64, thresholds: &ClassifierThresholds) -> Tier {
    if density > thresholds.high_density {
        Tier::High
    } else if density > thresholds.medium_density {
        Tier::Medium
    } else {
        Tier::Low
    }
}
