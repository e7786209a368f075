//! Error types for the report binary.
//!
//! [`ReportError`] is the top-level error type that wraps all possible
//! failure modes while loading, evaluating, and writing a snapshot.

use crowdwatch_core::{ConfigError, SnapshotError, ValidationError};

/// Top-level error for the report binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Snapshot loading failed.
    #[error("snapshot error: {source}")]
    Snapshot {
        /// The underlying snapshot error.
        #[from]
        source: SnapshotError,
    },

    /// The snapshot contained an unusable zone.
    #[error("validation error: {source}")]
    Validation {
        /// The underlying validation error.
        #[from]
        source: ValidationError,
    },

    /// The report could not be serialized.
    #[error("serialization error: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// Writing to stdout failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
