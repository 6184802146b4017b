//! Immutable, ordered route dataset.

use std::path::Path;

use super::error::DatasetError;
use super::waypoint::Waypoint;

/// Route bundled into the library, used when no route file is configured.
const BUNDLED_ROUTE: &str = include_str!("../../data/vehicle-route.json");

/// An ordered, non-empty sequence of waypoints.
///
/// Cumulative great-circle distances are computed once at construction so
/// that the distance travelled up to any index is a lookup.
#[derive(Debug, Clone)]
pub struct RouteDataset {
    waypoints: Vec<Waypoint>,

    /// `cumulative_km[i]` is the path length from waypoint 0 to waypoint `i`.
    cumulative_km: Vec<f64>,
}

impl RouteDataset {
    /// Build a dataset from waypoints, validating every entry.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, DatasetError> {
        if waypoints.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (index, waypoint) in waypoints.iter().enumerate() {
            waypoint
                .validate()
                .map_err(|reason| DatasetError::InvalidWaypoint { index, reason })?;
        }

        let mut cumulative_km = Vec::with_capacity(waypoints.len());
        let mut total = 0.0;
        cumulative_km.push(total);
        for pair in waypoints.windows(2) {
            total += pair[0].distance_km_to(&pair[1]);
            cumulative_km.push(total);
        }

        Ok(Self {
            waypoints,
            cumulative_km,
        })
    }

    /// Parse a JSON array of waypoints.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let waypoints: Vec<Waypoint> = serde_json::from_str(json)?;
        Self::new(waypoints)
    }

    /// Load a JSON route file from disk.
    pub fn load_from(path: &Path) -> Result<Self, DatasetError> {
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;

        tracing::info!(
            path = %path.display(),
            waypoints = dataset.len(),
            "Route dataset loaded"
        );
        Ok(dataset)
    }

    /// The route compiled into the library.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED_ROUTE)
    }

    /// Load from `path` if given, otherwise use the bundled route.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::bundled(),
        }
    }

    /// Number of waypoints (always at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// All waypoints in route order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Waypoint at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Map an unbounded step count onto a waypoint index, wrapping at the end.
    #[inline]
    pub fn wrap_index(&self, step: u64) -> usize {
        (step % self.waypoints.len() as u64) as usize
    }

    /// Index of the waypoint following `index`, wrapping to 0 after the last.
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// Waypoints from the start up to and including `index`.
    ///
    /// `index` is clamped to the last waypoint.
    pub fn prefix(&self, index: usize) -> &[Waypoint] {
        let end = index.min(self.waypoints.len() - 1);
        &self.waypoints[..=end]
    }

    /// Path length in kilometers from the first waypoint to `index`.
    ///
    /// `index` is clamped to the last waypoint.
    pub fn traversed_km(&self, index: usize) -> f64 {
        let end = index.min(self.cumulative_km.len() - 1);
        self.cumulative_km[end]
    }

    /// Path length of the whole route in kilometers.
    pub fn total_km(&self) -> f64 {
        self.cumulative_km[self.cumulative_km.len() - 1]
    }

    /// Aggregate statistics over the whole route.
    pub fn summary(&self) -> RouteSummary {
        let speeds = self.waypoints.iter().map(|w| w.speed);
        let min_speed = speeds.clone().fold(f64::INFINITY, f64::min);
        let max_speed = speeds.clone().fold(f64::NEG_INFINITY, f64::max);
        let average_speed = speeds.sum::<f64>() / self.waypoints.len() as f64;
        let first = &self.waypoints[0];
        let last = &self.waypoints[self.waypoints.len() - 1];

        RouteSummary {
            waypoint_count: self.waypoints.len(),
            total_distance_meters: (self.total_km() * 1000.0).round() as u64,
            average_speed,
            min_speed,
            max_speed,
            first_timestamp: first.timestamp.clone(),
            last_timestamp: last.timestamp.clone(),
            recorded_span: first
                .recorded_at()
                .zip(last.recorded_at())
                .map(|(start, end)| end - start),
        }
    }
}

/// Aggregate statistics describing a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Number of waypoints.
    pub waypoint_count: usize,
    /// Full path length in meters.
    pub total_distance_meters: u64,
    /// Mean recorded speed in km/h.
    pub average_speed: f64,
    /// Slowest recorded speed in km/h.
    pub min_speed: f64,
    /// Fastest recorded speed in km/h.
    pub max_speed: f64,
    /// Timestamp of the first waypoint.
    pub first_timestamp: String,
    /// Timestamp of the last waypoint.
    pub last_timestamp: String,
    /// Time between the first and last recordings, when both are RFC 3339.
    pub recorded_span: Option<chrono::Duration>,
}
