//! Geographic distance calculations.
//!
//! Provides the great-circle distance between two latitude/longitude pairs
//! using the haversine formula on a spherical Earth. Inputs are plain
//! decimal degrees and are not validated.

mod types;

pub use types::{GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Calculate the great-circle distance between two positions.
///
/// # Arguments
///
/// * `from` - First position as (latitude, longitude) in degrees
/// * `to` - Second position as (latitude, longitude) in degrees
///
/// # Returns
///
/// Distance in kilometers.
///
/// # Example
///
/// ```
/// use vehiclesim::coord::distance_km;
///
/// // One degree of longitude along the equator
/// let dist = distance_km((0.0, 0.0), (0.0, 1.0));
/// assert!((dist - 111.19).abs() < 0.1);
/// ```
#[inline]
pub fn distance_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + (lat1 * DEG_TO_RAD).cos() * (lat2 * DEG_TO_RAD).cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
