//! Route command - summarize the route dataset the server would load.

use std::path::PathBuf;
use std::time::Duration;

use vehiclesim::dashboard::format_timestamp;
use vehiclesim::route::RouteDataset;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the route command.
pub fn run(route: Option<PathBuf>) -> Result<(), CliError> {
    let runner = CliRunner::for_client()?;
    runner.log_startup("route");
    let config = runner.config();

    let route_file = route.or_else(|| config.simulation.route_file.clone());
    let dataset = RouteDataset::load_or_bundled(route_file.as_deref())?;
    let summary = dataset.summary();

    let step = config.simulation.to_simulation_config().step_interval;
    let loop_time = step * summary.waypoint_count as u32;

    println!("Route Summary");
    println!("=============");
    println!();
    match &route_file {
        Some(path) => println!("  Source:         {}", path.display()),
        None => println!("  Source:         (bundled)"),
    }
    println!("  Waypoints:      {}", summary.waypoint_count);
    println!(
        "  Length:         {:.2} km ({} m)",
        summary.total_distance_meters as f64 / 1000.0,
        summary.total_distance_meters
    );
    println!(
        "  Speed:          avg {:.1} km/h, min {:.1}, max {:.1}",
        summary.average_speed, summary.min_speed, summary.max_speed
    );
    println!("  Recorded from:  {}", format_timestamp(&summary.first_timestamp));
    println!("  Recorded to:    {}", format_timestamp(&summary.last_timestamp));
    if let Some(span) = summary.recorded_span.and_then(|span| span.to_std().ok()) {
        println!("  Recorded span:  {}", format_duration(span));
    }
    println!(
        "  Loop duration:  {} ({} ms per waypoint)",
        format_duration(loop_time),
        step.as_millis()
    );

    Ok(())
}

/// Format a duration as `1m 15s` / `42s`.
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (minutes, seconds) = (secs / 60, secs % 60);
    if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(75)), "1m 15s");
        assert_eq!(format_duration(Duration::from_millis(3000 * 25)), "1m 15s");
    }
}
