//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

use crate::simulation::SimulationConfig;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// HTTP server settings
    pub server: ServerSettings,
    /// Simulation settings
    pub simulation: SimulationSettings,
    /// Terminal dashboard settings
    pub dashboard: DashboardSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Address to bind (default: 127.0.0.1)
    pub host: String,
    /// Port to bind (default: 3000)
    pub port: u16,
}

/// Simulation configuration.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Milliseconds spent at each waypoint (default: 3000)
    pub step_interval_ms: u64,
    /// Route file to load; `None` uses the bundled route
    pub route_file: Option<PathBuf>,
}

impl SimulationSettings {
    /// Build the runtime simulation configuration.
    pub fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig::default().with_step_interval(Duration::from_millis(self.step_interval_ms))
    }
}

/// Terminal dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Base URL of the position service
    pub url: String,
    /// Seconds between polls (default: 3)
    pub poll_interval_secs: u64,
}

impl DashboardSettings {
    /// Poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
