//! Enumeration types shared by the engine and the dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Flow direction
// ---------------------------------------------------------------------------

/// Compass heading of a zone's crowd flow.
///
/// Data sources report the heading as a label (`"N"`, `"E"`, `"S"`, `"W"`).
/// Any other label, including the empty string and intercardinals such as
/// `"NE"`, maps to [`Direction::Unknown`], which renders like north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Direction {
    /// Toward increasing latitude.
    #[serde(rename = "N")]
    North,
    /// Toward increasing longitude.
    #[serde(rename = "E")]
    East,
    /// Toward decreasing latitude.
    #[serde(rename = "S")]
    South,
    /// Toward decreasing longitude.
    #[serde(rename = "W")]
    West,
    /// A label outside the four cardinal points.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Direction {
    /// Parse a direction label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            "N" => Self::North,
            "E" => Self::East,
            "S" => Self::South,
            "W" => Self::West,
            _ => Self::Unknown,
        }
    }

    /// Clockwise bearing from north, in degrees.
    ///
    /// [`Direction::Unknown`] falls back to `0.0`.
    pub const fn angle_degrees(self) -> f64 {
        match self {
            Self::North | Self::Unknown => 0.0,
            Self::East => 90.0,
            Self::South => 180.0,
            Self::West => 270.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Density tier
// ---------------------------------------------------------------------------

/// Discrete density severity used to color a zone on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Tier {
    /// Density above the high threshold.
    High,
    /// Density above the medium threshold, up to and including the high one.
    Medium,
    /// Everything else, including negative and NaN densities.
    Low,
}

impl Tier {
    /// Fill color the map uses for this tier.
    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Medium => "orange",
            Self::Low => "green",
        }
    }
}

// ---------------------------------------------------------------------------
// Alert severity
// ---------------------------------------------------------------------------

/// Severity tag carried by an [`Alert`](crate::Alert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum AlertType {
    /// Immediate attention required.
    Critical,
    /// Something is off but not critical.
    Warning,
}

impl AlertType {
    /// Lowercase tag, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

impl core::fmt::Display for AlertType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_labels_parse() {
        assert_eq!(Direction::from_label("N"), Direction::North);
        assert_eq!(Direction::from_label("E"), Direction::East);
        assert_eq!(Direction::from_label("S"), Direction::South);
        assert_eq!(Direction::from_label("W"), Direction::West);
    }

    #[test]
    fn other_labels_are_unknown() {
        for label in ["", "NE", "n", "North", " N", "SW"] {
            assert_eq!(Direction::from_label(label), Direction::Unknown, "{label:?}");
        }
    }

    #[test]
    fn unknown_points_north() {
        let unknown = Direction::Unknown.angle_degrees();
        let north = Direction::North.angle_degrees();
        assert!((unknown - north).abs() < f64::EPSILON);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(Tier::High.color(), "red");
        assert_eq!(Tier::Medium.color(), "orange");
        assert_eq!(Tier::Low.color(), "green");
    }

    #[test]
    fn alert_type_serializes_lowercase() {
        let json = serde_json::to_string(&AlertType::Critical).unwrap_or_default();
        assert_eq!(json, "\"critical\"");
        assert_eq!(AlertType::Warning.to_string(), "warning");
    }
}
