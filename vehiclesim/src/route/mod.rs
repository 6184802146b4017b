//! Route dataset: the fixed, ordered list of waypoints the vehicle follows.
//!
//! A dataset is loaded once at startup, either from a JSON file or from the
//! route bundled with the library, and never changes afterwards.
//!
//! # File Format
//!
//! A JSON array of waypoint objects:
//!
//! ```json
//! [
//!   { "latitude": 37.7749, "longitude": -122.4194,
//!     "timestamp": "2024-01-15T08:00:00Z", "speed": 32.0, "heading": 0.0 }
//! ]
//! ```

mod dataset;
mod error;
mod waypoint;

pub use dataset::{RouteDataset, RouteSummary};
pub use error::DatasetError;
pub use waypoint::Waypoint;
