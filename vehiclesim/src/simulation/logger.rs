//! Periodic position logging daemon.
//!
//! Emits the simulated vehicle position at DEBUG level on a fixed interval.
//!
//! # Output Format
//!
//! Structured fields:
//! - `index` / `points` - Current waypoint and route length
//! - `lat`, `lon` - Position in decimal degrees
//! - `speed_kmh`, `hdg` - Recorded speed and heading
//! - `progress` - Percentage of the route covered
//! - `distance_m` - Distance travelled in meters

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::provider::{PositionProvider, SharedPositionProvider};

/// Default logging interval (30 seconds).
pub const DEFAULT_LOG_INTERVAL: Duration = Duration::from_secs(30);

/// Spawns a background task that periodically logs the vehicle position.
///
/// The task stops when `cancellation` is triggered. Callers should check
/// `tracing::enabled!(tracing::Level::DEBUG)` first to avoid an idle task.
pub fn spawn_position_logger(
    provider: SharedPositionProvider,
    cancellation: CancellationToken,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    log_position(provider.as_ref());
                }
                _ = cancellation.cancelled() => {
                    tracing::debug!("Position logger stopped");
                    break;
                }
            }
        }
    })
}

fn log_position(provider: &dyn PositionProvider) {
    match provider.current_position() {
        Ok(report) => {
            tracing::debug!(
                index = report.current_index,
                points = report.total_points,
                lat = format!("{:.6}", report.current.latitude),
                lon = format!("{:.6}", report.current.longitude),
                speed_kmh = format!("{:.1}", report.current.speed),
                hdg = format!("{:.0}", report.current.heading),
                progress = report.progress,
                distance_m = report.total_distance,
                "Vehicle position"
            );
        }
        Err(e) => {
            tracing::debug!(error = %e, "Vehicle position unavailable");
        }
    }
}
