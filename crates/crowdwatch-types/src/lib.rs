//! Shared type definitions for Crowdwatch.
//!
//! This crate is the single source of truth for the data exchanged between
//! the zone analytics engine and the map dashboard. Types defined here flow
//! downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Integer identifier wrappers
//! - [`enums`] -- Flow direction, density tier, and alert severity
//! - [`structs`] -- Zone observations and derived render records

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AlertType, Direction, Tier};
pub use ids::ZoneId;
pub use structs::{
    Alert, Coordinate, Flow, FlowIndicator, SnapshotEvaluation, SnapshotMetrics, Zone, ZoneView,
};
