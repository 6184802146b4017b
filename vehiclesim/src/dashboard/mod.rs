//! Terminal dashboard for a running position service.
//!
//! Polls `GET /api/vehicle` on a fixed interval and renders each report as
//! a block of text: route progress, coordinates, speed band, heading,
//! distance travelled and the waypoint timestamp. Fetch failures are shown
//! as a banner and retried on the next tick.

mod client;
mod format;
mod poller;

pub use client::{FetchError, HttpVehicleClient, VehicleClient, DEFAULT_SERVICE_URL};
pub use format::{
    compass_point, format_coordinate, format_timestamp, progress_bar, render_report,
    status_label, SpeedBand,
};
pub use poller::{DashboardPoller, PollEvent, DEFAULT_POLL_INTERVAL};
