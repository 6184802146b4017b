//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let route_file = config
        .simulation
        .route_file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[server]
; Address the position service binds to (use 0.0.0.0 to listen on all interfaces)
host = {}
; TCP port for the position service
port = {}

[simulation]
; Wall-clock milliseconds spent at each waypoint before advancing (default: 3000)
step_interval_ms = {}
; JSON route file (array of latitude/longitude/timestamp/speed/heading objects)
; Leave empty to use the route bundled with VehicleSim
route_file = {}

[dashboard]
; Base URL of the position service polled by `vehiclesim watch`
url = {}
; Seconds between polls (default: 3)
poll_interval_secs = {}

[logging]
; Log file path (truncated at each start)
file = {}
"#,
        config.server.host,
        config.server.port,
        config.simulation.step_interval_ms,
        route_file,
        config.dashboard.url,
        config.dashboard.poll_interval_secs,
        path_to_string(&config.logging.file),
    )
}

/// Convert a path to a string, replacing the home directory with `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
