//! Text formatting for the terminal dashboard.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::simulation::PositionReport;

/// Width of the progress bar in characters.
const PROGRESS_BAR_WIDTH: usize = 30;

/// Speed band used to colour-code the speed readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedBand {
    /// Below 30 km/h.
    Low,
    /// 30 to 50 km/h.
    Moderate,
    /// 50 km/h and above.
    High,
}

impl SpeedBand {
    /// Classify a speed in km/h.
    pub fn from_speed(speed: f64) -> Self {
        if speed < 30.0 {
            Self::Low
        } else if speed < 50.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// ANSI colour escape for this band.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Low => "\x1b[32m",
            Self::Moderate => "\x1b[33m",
            Self::High => "\x1b[31m",
        }
    }
}

impl fmt::Display for SpeedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Format a coordinate as `37.774900° N`.
pub fn format_coordinate(value: f64, is_latitude: bool) -> String {
    let direction = match (is_latitude, value >= 0.0) {
        (true, true) => 'N',
        (true, false) => 'S',
        (false, true) => 'E',
        (false, false) => 'W',
    };
    format!("{:.6}° {}", value.abs(), direction)
}

/// Eight-point compass label for a heading in degrees.
pub fn compass_point(heading: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = heading.rem_euclid(360.0);
    let sector = ((normalized + 22.5) / 45.0).floor() as usize % 8;
    POINTS[sector]
}

/// Format a waypoint timestamp for display, e.g. `Jan 15, 2024, 8:00:00 AM`.
///
/// Timestamps that are not RFC 3339 are shown as-is.
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t
            .with_timezone(&Utc)
            .format("%b %-d, %Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Render a fixed-width progress bar for a percentage (clamped to 100).
pub fn progress_bar(progress: u32) -> String {
    let filled = (progress.min(100) as usize * PROGRESS_BAR_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Status label shown under the progress bar.
pub fn status_label(report: &PositionReport) -> &'static str {
    if report.is_complete {
        "Complete!"
    } else {
        "In Progress"
    }
}

/// Render one dashboard frame for a position report.
pub fn render_report(report: &PositionReport, color: bool) -> String {
    let current = &report.current;
    let band = SpeedBand::from_speed(current.speed);
    let (speed_on, speed_off) = if color {
        (band.ansi_color(), "\x1b[0m")
    } else {
        ("", "")
    };

    let mut out = String::new();
    out.push_str("Vehicle Tracking System\n");
    out.push_str(&format!(
        "  Point {} of {}\n\n",
        report.current_index + 1,
        report.total_points
    ));
    out.push_str(&format!(
        "  Route Progress  {} {:>3}%  {}\n",
        progress_bar(report.progress),
        report.progress,
        status_label(report)
    ));
    out.push_str(&format!(
        "  Latitude        {}\n",
        format_coordinate(current.latitude, true)
    ));
    out.push_str(&format!(
        "  Longitude       {}\n",
        format_coordinate(current.longitude, false)
    ));
    out.push_str(&format!(
        "  Speed           {}{} km/h ({}){}\n",
        speed_on, current.speed, band, speed_off
    ));
    out.push_str(&format!(
        "  Heading         {}° {}\n",
        current.heading,
        compass_point(current.heading)
    ));
    out.push_str(&format!(
        "  Distance        {} meters\n",
        report.total_distance
    ));
    out.push_str(&format!(
        "  Last updated    {}\n",
        format_timestamp(&current.timestamp)
    ));
    out
}
