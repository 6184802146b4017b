//! Error types for route dataset loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make a route dataset unusable.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The route file could not be read.
    #[error("Failed to read route file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The route data is not a valid JSON array of waypoints.
    #[error("Failed to parse route data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The route contains no waypoints.
    #[error("Route dataset is empty")]
    Empty,

    /// A waypoint carries values that cannot describe a real position.
    #[error("Invalid waypoint at index {index}: {reason}")]
    InvalidWaypoint { index: usize, reason: String },
}
