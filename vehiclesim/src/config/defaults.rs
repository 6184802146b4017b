//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;

/// Default bind host for the HTTP server.
pub const DEFAULT_SERVER_HOST: &str = crate::server::DEFAULT_HOST;

/// Default bind port for the HTTP server.
pub const DEFAULT_SERVER_PORT: u16 = crate::server::DEFAULT_PORT;

/// Default time per waypoint in milliseconds.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 3000;

/// Default base URL the dashboard polls.
pub const DEFAULT_DASHBOARD_URL: &str = crate::dashboard::DEFAULT_SERVICE_URL;

/// Default seconds between dashboard polls.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "vehiclesim.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
            },
            simulation: SimulationSettings {
                step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
                route_file: None,
            },
            dashboard: DashboardSettings {
                url: DEFAULT_DASHBOARD_URL.to_string(),
                poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
