//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and async runtime
//! creation to reduce duplication across command handlers.

use crate::error::CliError;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use tracing::info;
use vehiclesim::config::ConfigFile;
use vehiclesim::logging::{init_logging, LoggingGuard, LoggingOptions};

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a runner for the server, which starts a fresh log file and
    /// logs to stdout as well.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn for_server(debug_mode: bool) -> Result<Self, CliError> {
        Self::with_options(LoggingOptions {
            stdout: true,
            debug: debug_mode,
            truncate: true,
        })
    }

    /// Create a runner for client commands.
    ///
    /// Client logs are appended so they never clear a running server's log.
    /// When stdout is a TTY, stdout logging is disabled to prevent
    /// interference with the dashboard output.
    pub fn for_client() -> Result<Self, CliError> {
        Self::with_options(LoggingOptions {
            stdout: !atty::is(atty::Stream::Stdout),
            debug: false,
            truncate: false,
        })
    }

    fn with_options(options: LoggingOptions) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, options)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("VehicleSim v{}", vehiclesim::VERSION);
        info!("VehicleSim CLI: {} command", command);
    }

    /// Build the multi-threaded tokio runtime.
    pub fn runtime(&self) -> Result<Runtime, CliError> {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::Runtime(format!("Failed to start async runtime: {}", e)))
    }

    /// Cancellation token fired by Ctrl+C.
    pub fn shutdown_on_ctrlc(&self) -> Result<CancellationToken, CliError> {
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        ctrlc::set_handler(move || {
            info!("Shutdown requested");
            token.cancel();
        })
        .map_err(|e| CliError::Runtime(format!("Failed to set signal handler: {}", e)))?;

        Ok(shutdown)
    }
}
