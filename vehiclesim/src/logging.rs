//! Logging infrastructure for VehicleSim.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to the configured log file (cleared when the server starts)
//! - Optionally prints to stdout for tailing the server
//! - Configurable via RUST_LOG environment variable

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Options controlling which outputs are enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOptions {
    /// Mirror log output to stdout.
    pub stdout: bool,
    /// Force `debug` level regardless of `RUST_LOG`.
    pub debug: bool,
    /// Clear the log file before writing; otherwise append.
    pub truncate: bool,
}

/// Initialize logging system.
///
/// Creates the log directory if needed, optionally clears the previous
/// log file, and installs the global subscriber.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_path: &Path, options: LoggingOptions) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = prepare_log_file(log_path, options.truncate)?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .with_span_events(FmtSpan::CLOSE);

    let stdout_layer = options.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .compact()
    });

    tracing_subscriber::registry()
        .with(build_filter(options.debug))
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and, when `truncate` is set, empty the log file.
///
/// Returns the directory and file name for the appender.
fn prepare_log_file(log_path: &Path, truncate: bool) -> Result<(&Path, &OsStr), io::Error> {
    let (log_dir, log_file) = split_log_path(log_path)?;

    fs::create_dir_all(log_dir)?;
    if truncate {
        fs::write(log_path, "")?;
    }

    Ok((log_dir, log_file))
}

/// Build the level filter: `debug` when forced, else `RUST_LOG`, else `info`.
fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Split a log path into its directory and file name.
fn split_log_path(log_path: &Path) -> Result<(&Path, &OsStr), io::Error> {
    let file = log_path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", log_path.display()),
        )
    })?;
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((dir, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_log_path() {
        let path = PathBuf::from("/var/log/vehiclesim/vehiclesim.log");
        let (dir, file) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("/var/log/vehiclesim"));
        assert_eq!(file, "vehiclesim.log");
    }

    #[test]
    fn test_split_bare_file_name_uses_current_dir() {
        let (dir, file) = split_log_path(Path::new("sim.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(file, "sim.log");
    }

    #[test]
    fn test_split_rejects_directory_only_path() {
        let err = split_log_path(Path::new("/")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_prepare_truncates_for_fresh_session() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_file = temp_dir.path().join("vehiclesim.log");
        fs::write(&log_file, "previous session\n").unwrap();

        let (dir, name) = prepare_log_file(&log_file, true).unwrap();
        assert_eq!(dir, temp_dir.path());
        assert_eq!(name, "vehiclesim.log");
        assert_eq!(fs::read_to_string(&log_file).unwrap(), "");
    }

    #[test]
    fn test_prepare_keeps_existing_content_when_appending() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_file = temp_dir.path().join("vehiclesim.log");
        fs::write(&log_file, "server running\n").unwrap();

        prepare_log_file(&log_file, false).unwrap();
        assert_eq!(fs::read_to_string(&log_file).unwrap(), "server running\n");
    }

    #[test]
    fn test_prepare_creates_nested_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_file = temp_dir.path().join("a").join("b").join("sim.log");

        prepare_log_file(&log_file, false).unwrap();
        assert!(log_file.parent().unwrap().is_dir());
        assert!(!log_file.exists());

        prepare_log_file(&log_file, true).unwrap();
        assert!(log_file.exists());
    }

    // Testing actual log output requires a separate process because tracing
    // uses a global subscriber that can only be set once.
}
