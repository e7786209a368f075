//! Loading zone snapshots from JSON.
//!
//! A snapshot file is a JSON array of zone records:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Entrance Area",
//!     "center": [21.3891, 39.852],
//!     "density": 85,
//!     "flow": { "direction": "N", "speed": 2.5 },
//!     "radius": 200
//!   }
//! ]
//! ```
//!
//! Records with missing fields or non-numeric values fail to parse.

use std::path::Path;

use crowdwatch_types::Zone;
use tracing::debug;

/// Errors that can occur when loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Failed to read the snapshot file from disk.
    #[error("failed to read snapshot file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The content is not a valid array of zone records.
    #[error("failed to parse snapshot JSON: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Read a snapshot from a JSON file.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if the file cannot be read, or
/// [`SnapshotError::Json`] if it is not a valid zone array.
pub fn load_snapshot(path: &Path) -> Result<Vec<Zone>, SnapshotError> {
    let contents = std::fs::read_to_string(path)?;
    let zones = parse_snapshot(&contents)?;
    debug!(path = %path.display(), zones = zones.len(), "snapshot loaded");
    Ok(zones)
}

/// Parse a snapshot from a JSON string.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] if the string is not a valid zone array.
pub fn parse_snapshot(json: &str) -> Result<Vec<Zone>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use crowdwatch_types::ZoneId;

    use super::*;

    #[test]
    fn parses_zone_array() {
        let json = r#"[
            {"id": 1, "name": "Entrance Area", "center": [21.3891, 39.852],
             "density": 85, "flow": {"direction": "N", "speed": 2.5}, "radius": 200},
            {"id": 2, "center": [21.3885, 39.856],
             "density": 40, "flow": {"direction": "E", "speed": 1.5}, "radius": 150}
        ]"#;
        let zones = parse_snapshot(json).ok().unwrap_or_default();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones.first().map(|z| z.id), Some(ZoneId(1)));
        assert_eq!(zones.get(1).map(Zone::display_label).as_deref(), Some("Zone 2"));
    }

    #[test]
    fn empty_array_is_empty_snapshot() {
        assert!(parse_snapshot("[]").ok().unwrap_or_default().is_empty());
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"[{"id": 1, "center": [0, 0], "density": 10, "radius": 5}]"#;
        assert!(matches!(parse_snapshot(json), Err(SnapshotError::Json { .. })));
    }

    #[test]
    fn non_numeric_density_is_rejected() {
        let json = r#"[{"id": 1, "center": [0, 0], "density": "high",
                       "flow": {"direction": "N", "speed": 1}, "radius": 5}]"#;
        assert!(matches!(parse_snapshot(json), Err(SnapshotError::Json { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_snapshot(Path::new("/nonexistent/snapshot.json"));
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }
}
