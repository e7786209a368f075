//! Flow arrow geometry.
//!
//! The arrow for a zone starts at the zone center and is `speed * 10`
//! meters long. Meters are turned into degrees with a flat-earth
//! (equirectangular) factor of 1 / 111 320 on both axes, which is only
//! good for short arrows. No geodesic correction is applied.
//!
//! Bearings are clockwise from north, so the latitude component uses the
//! cosine and the longitude component the sine.

use std::f64::consts::PI;

use crowdwatch_types::{Coordinate, Direction, FlowIndicator, Zone};

use crate::config::GeometryConfig;

/// Meters per degree of latitude or longitude.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Arrow length in meters per 1 m/s of flow speed.
pub const ARROW_METERS_PER_SPEED: f64 = 10.0;

/// Bearing in degrees for a direction label.
///
/// `N`, `E`, `S`, `W` map to 0, 90, 180, 270. Every other label maps to 0.
pub fn direction_angle_degrees(direction: &str) -> f64 {
    Direction::from_label(direction).angle_degrees()
}

/// Arrow tip for a flow starting at `center`, with the standing scale.
pub fn flow_offset(center: Coordinate, direction: &str, speed: f64) -> Coordinate {
    flow_offset_with(
        center,
        Direction::from_label(direction),
        speed,
        &GeometryConfig::DEFAULT,
    )
}

/// Arrow tip for a flow starting at `center`, with a configured scale.
pub fn flow_offset_with(
    center: Coordinate,
    heading: Direction,
    speed: f64,
    config: &GeometryConfig,
) -> Coordinate {
    let degrees = arrow_length_meters(speed, config) / config.meters_per_degree;
    let radians = heading.angle_degrees() * PI / 180.0;
    center.offset(degrees * radians.cos(), degrees * radians.sin())
}

/// Arrow length on the ground for a given speed.
pub fn arrow_length_meters(speed: f64, config: &GeometryConfig) -> f64 {
    speed * config.arrow_meters_per_speed
}

/// Build the arrow marker for a zone.
pub fn flow_indicator(zone: &Zone, config: &GeometryConfig) -> FlowIndicator {
    let heading = zone.flow.heading();
    FlowIndicator {
        zone_id: zone.id,
        heading,
        angle_degrees: heading.angle_degrees(),
        distance_meters: arrow_length_meters(zone.flow.speed, config),
        endpoint: flow_offset_with(zone.center, heading, zone.flow.speed, config),
    }
}
