//! Position report types returned to consumers.

use serde::{Deserialize, Serialize};

use crate::route::{RouteDataset, Waypoint};

/// Acknowledgment message returned after a reset.
pub const RESET_MESSAGE: &str = "Simulation reset successfully";

/// Full simulation status at one instant.
///
/// Derived fresh on every query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    /// Waypoint the vehicle is at.
    pub current: Waypoint,

    /// Waypoint the vehicle is heading to (wraps to the start after the last).
    pub next: Waypoint,

    /// Route travelled so far, from the first waypoint through `current`.
    pub route: Vec<Waypoint>,

    /// Share of the route covered, as a whole percentage.
    pub progress: u32,

    /// Distance travelled along the route in meters.
    pub total_distance: u64,

    /// Index of `current` within the route.
    pub current_index: usize,

    /// Number of waypoints in the route.
    pub total_points: usize,

    /// True when `current` is the final waypoint.
    pub is_complete: bool,
}

impl PositionReport {
    /// Build the report for the vehicle standing at `index`.
    ///
    /// `index` must be a valid waypoint index for `route`.
    pub fn at_index(route: &RouteDataset, index: usize) -> Self {
        let total_points = route.len();
        let prefix = route.prefix(index);
        let current_index = prefix.len() - 1;
        let current = prefix[current_index].clone();
        let next = route.waypoints()[route.next_index(current_index)].clone();

        Self {
            current,
            next,
            route: prefix.to_vec(),
            progress: progress_percent(current_index, total_points),
            total_distance: (route.traversed_km(current_index) * 1000.0).round() as u64,
            current_index,
            total_points,
            is_complete: current_index + 1 >= total_points,
        }
    }
}

/// Percentage of waypoints reached, counting `index` itself, rounded half up.
pub fn progress_percent(index: usize, total_points: usize) -> u32 {
    if total_points == 0 {
        return 0;
    }
    ((index as f64 + 1.0) / total_points as f64 * 100.0).round() as u32
}

/// Body returned by a successful reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetAck {
    /// Human-readable confirmation.
    pub message: String,
}

impl Default for ResetAck {
    fn default() -> Self {
        Self {
            message: RESET_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(n: usize) -> RouteDataset {
        let waypoints = (0..n)
            .map(|i| Waypoint {
                latitude: 0.0,
                longitude: i as f64 * 0.001,
                timestamp: format!("2024-01-15T08:00:{:02}Z", i),
                speed: 25.0,
                heading: 90.0,
            })
            .collect();
        RouteDataset::new(waypoints).unwrap()
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 5), 20);
        assert_eq!(progress_percent(1, 5), 40);
        assert_eq!(progress_percent(4, 5), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        // 12.5 rounds up
        assert_eq!(progress_percent(0, 8), 13);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn test_report_at_start() {
        let route = route(5);
        let report = PositionReport::at_index(&route, 0);

        assert_eq!(report.current_index, 0);
        assert_eq!(report.current, route.waypoints()[0]);
        assert_eq!(report.next, route.waypoints()[1]);
        assert_eq!(report.route.len(), 1);
        assert_eq!(report.progress, 20);
        assert_eq!(report.total_distance, 0);
        assert_eq!(report.total_points, 5);
        assert!(!report.is_complete);
    }

    #[test]
    fn test_report_at_last_waypoint_wraps_next() {
        let route = route(5);
        let report = PositionReport::at_index(&route, 4);

        assert_eq!(report.next, route.waypoints()[0]);
        assert_eq!(report.progress, 100);
        assert!(report.is_complete);
        assert_eq!(
            report.total_distance,
            (route.total_km() * 1000.0).round() as u64
        );
    }

    #[test]
    fn test_report_prefix_ends_at_current() {
        let route = route(5);
        for index in 0..5 {
            let report = PositionReport::at_index(&route, index);
            assert_eq!(report.route.len(), index + 1);
            assert_eq!(report.route.last(), Some(&report.current));
        }
    }

    #[test]
    fn test_single_waypoint_is_complete() {
        let route = route(1);
        let report = PositionReport::at_index(&route, 0);
        assert!(report.is_complete);
        assert_eq!(report.progress, 100);
        assert_eq!(report.next, report.current);
    }

    #[test]
    fn test_report_json_field_names() {
        let route = route(3);
        let value = serde_json::to_value(PositionReport::at_index(&route, 1)).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "current",
            "next",
            "route",
            "progress",
            "totalDistance",
            "currentIndex",
            "totalPoints",
            "isComplete",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 8);
        assert_eq!(value["currentIndex"], 1);
        assert_eq!(value["totalPoints"], 3);
        assert_eq!(value["isComplete"], false);
    }

    #[test]
    fn test_reset_ack_message() {
        let ack = ResetAck::default();
        assert_eq!(ack.message, "Simulation reset successfully");
        assert_eq!(
            serde_json::to_string(&ack).unwrap(),
            r#"{"message":"Simulation reset successfully"}"#
        );
    }
}
