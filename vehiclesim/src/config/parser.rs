//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [server] section
    if let Some(section) = ini.section(Some("server")) {
        if let Some(v) = section.get("host") {
            let v = v.trim();
            if !v.is_empty() {
                config.server.host = v.to_string();
            }
        }
        if let Some(v) = section.get("port") {
            config.server.port = v.trim().parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "server".to_string(),
                key: "port".to_string(),
                value: v.to_string(),
                reason: "must be a port number (0-65535)".to_string(),
            })?;
        }
    }

    // [simulation] section
    if let Some(section) = ini.section(Some("simulation")) {
        if let Some(v) = section.get("step_interval_ms") {
            config.simulation.step_interval_ms = parse_positive(v).ok_or_else(|| {
                ConfigFileError::InvalidValue {
                    section: "simulation".to_string(),
                    key: "step_interval_ms".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (milliseconds)".to_string(),
                }
            })?;
        }
        if let Some(v) = section.get("route_file") {
            let v = v.trim();
            config.simulation.route_file = if v.is_empty() {
                None
            } else {
                Some(expand_tilde(v))
            };
        }
    }

    // [dashboard] section
    if let Some(section) = ini.section(Some("dashboard")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !v.starts_with("http://") && !v.starts_with("https://") {
                return Err(ConfigFileError::InvalidValue {
                    section: "dashboard".to_string(),
                    key: "url".to_string(),
                    value: v.to_string(),
                    reason: "must start with http:// or https://".to_string(),
                });
            }
            config.dashboard.url = v.to_string();
        }
        if let Some(v) = section.get("poll_interval_secs") {
            config.dashboard.poll_interval_secs = parse_positive(v).ok_or_else(|| {
                ConfigFileError::InvalidValue {
                    section: "dashboard".to_string(),
                    key: "poll_interval_secs".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                }
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a strictly positive integer.
fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|v| *v > 0)
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
