//! A single recorded point along the route.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coord::GeoPoint;

/// One recorded point along the simulated route.
///
/// Serialized with the same field names the position service reports,
/// so a route file can be fed back verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,

    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,

    /// When the point was recorded, as supplied by the dataset.
    ///
    /// Normally RFC 3339; kept as a string so unusual formats still load.
    pub timestamp: String,

    /// Ground speed in km/h.
    pub speed: f64,

    /// Heading in degrees (0-360, 0 = north).
    pub heading: f64,
}

impl Waypoint {
    /// Position of this waypoint.
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Great-circle distance to another waypoint in kilometers.
    #[inline]
    pub fn distance_km_to(&self, other: &Waypoint) -> f64 {
        self.position().distance_km(&other.position())
    }

    /// Parse the timestamp as RFC 3339, if it is in that format.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Check that every numeric field describes a plausible reading.
    pub(super) fn validate(&self) -> Result<(), String> {
        if !self.position().is_valid() {
            return Err(format!(
                "position ({}, {}) is outside valid latitude/longitude ranges",
                self.latitude, self.longitude
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(format!("speed {} must be a non-negative number", self.speed));
        }
        if !self.heading.is_finite() {
            return Err(format!("heading {} must be a finite number", self.heading));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(latitude: f64, longitude: f64) -> Waypoint {
        Waypoint {
            latitude,
            longitude,
            timestamp: "2024-01-15T08:00:00Z".to_string(),
            speed: 30.0,
            heading: 90.0,
        }
    }

    #[test]
    fn test_deserialize_waypoint() {
        let json = r#"{
            "latitude": 37.7749,
            "longitude": -122.4194,
            "timestamp": "2024-01-15T08:00:00Z",
            "speed": 32.5,
            "heading": 45
        }"#;

        let wp: Waypoint = serde_json::from_str(json).unwrap();
        assert_eq!(wp.latitude, 37.7749);
        assert_eq!(wp.longitude, -122.4194);
        assert_eq!(wp.timestamp, "2024-01-15T08:00:00Z");
        assert_eq!(wp.speed, 32.5);
        assert_eq!(wp.heading, 45.0);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(waypoint(1.0, 2.0)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["heading", "latitude", "longitude", "speed", "timestamp"]
        );
    }

    #[test]
    fn test_recorded_at_parses_rfc3339() {
        let wp = waypoint(0.0, 0.0);
        let at = wp.recorded_at().expect("timestamp should parse");
        assert_eq!(at.to_rfc3339(), "2024-01-15T08:00:00+00:00");
    }

    #[test]
    fn test_recorded_at_none_for_free_form() {
        let mut wp = waypoint(0.0, 0.0);
        wp.timestamp = "yesterday at noon".to_string();
        assert!(wp.recorded_at().is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(waypoint(10.0, 10.0).validate().is_ok());
        assert!(waypoint(91.0, 10.0).validate().is_err());
        assert!(waypoint(10.0, 181.0).validate().is_err());

        let mut wp = waypoint(10.0, 10.0);
        wp.speed = -1.0;
        assert!(wp.validate().is_err());

        let mut wp = waypoint(10.0, 10.0);
        wp.heading = f64::NAN;
        assert!(wp.validate().is_err());
    }

    #[test]
    fn test_distance_between_waypoints() {
        let a = waypoint(0.0, 0.0);
        let b = waypoint(0.0, 1.0);
        assert!((a.distance_km_to(&b) - 111.19).abs() < 0.1);
    }
}
