//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use vehiclesim::config::ConfigFileError;
use vehiclesim::dashboard::FetchError;
use vehiclesim::route::DatasetError;
use vehiclesim::server::ServerError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Invalid command-line or configuration value
    Config(String),
    /// Failed to read or write the config file
    ConfigFile(ConfigFileError),
    /// Failed to load the route dataset
    Route(DatasetError),
    /// HTTP server error
    Server(ServerError),
    /// Request to the position service failed
    Fetch { url: String, error: FetchError },
    /// Failed to start the async runtime or signal handler
    Runtime(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Server(ServerError::Bind { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Another process is using the port: try --port <PORT>");
                eprintln!("  2. Ports below 1024 need elevated privileges");
            }
            CliError::Fetch {
                url,
                error: FetchError::Http(_),
            } => {
                eprintln!();
                eprintln!("Is the position service running at {}?", url);
                eprintln!("Start it with: vehiclesim serve");
            }
            CliError::Route(_) => {
                eprintln!();
                eprintln!(
                    "The route file must be a JSON array of \
                     {{latitude, longitude, timestamp, speed, heading}} objects."
                );
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Route(e) => write!(f, "Failed to load route: {}", e),
            CliError::Server(e) => write!(f, "HTTP server error: {}", e),
            CliError::Fetch { url, error } => {
                write!(f, "Request to {} failed: {}", url, error)
            }
            CliError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Route(e) => Some(e),
            CliError::Server(e) => Some(e),
            CliError::Fetch { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        CliError::Route(e)
    }
}

impl From<ServerError> for CliError {
    fn from(e: ServerError) -> Self {
        CliError::Server(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display_includes_url() {
        let err = CliError::Fetch {
            url: "http://127.0.0.1:3000".to_string(),
            error: FetchError::Status {
                status: 500,
                message: Some("Failed to fetch vehicle data".to_string()),
            },
        };
        let text = err.to_string();
        assert!(text.contains("http://127.0.0.1:3000"));
        assert!(text.contains("500"));
    }

    #[test]
    fn test_route_error_source() {
        use std::error::Error;
        let err = CliError::from(DatasetError::Empty);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to load route"));
    }
}
