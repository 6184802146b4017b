//! VehicleSim CLI - Command-line interface
//!
//! Runs the simulated vehicle position service and the clients that talk
//! to it.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::serve::ServeArgs;
use commands::watch::WatchArgs;

#[derive(Parser)]
#[command(name = "vehiclesim")]
#[command(version = vehiclesim::VERSION)]
#[command(about = "Simulated vehicle position service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP position service
    Serve {
        /// Address to bind (default from config: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default from config: 3000)
        #[arg(long)]
        port: Option<u16>,

        /// JSON route file (default: route_file from config, else the bundled route)
        #[arg(long)]
        route: Option<PathBuf>,

        /// Milliseconds spent at each waypoint
        #[arg(long)]
        step_ms: Option<u64>,

        /// Enable debug logging, including periodic position logs
        #[arg(long)]
        debug: bool,
    },

    /// Show a live terminal dashboard for a running service
    Watch {
        /// Base URL of the service (default from config)
        #[arg(long)]
        url: Option<String>,

        /// Seconds between polls
        #[arg(long)]
        interval_secs: Option<u64>,

        /// Fetch and print a single report, then exit
        #[arg(long)]
        once: bool,

        /// Disable ANSI colors
        #[arg(long)]
        no_color: bool,
    },

    /// Restart a running simulation from the first waypoint
    Reset {
        /// Base URL of the service (default from config)
        #[arg(long)]
        url: Option<String>,
    },

    /// Print a summary of the route dataset
    Route {
        /// JSON route file (default: route_file from config, else the bundled route)
        #[arg(long)]
        route: Option<PathBuf>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            route,
            step_ms,
            debug,
        } => commands::serve::run(ServeArgs {
            host,
            port,
            route,
            step_ms,
            debug,
        }),
        Commands::Watch {
            url,
            interval_secs,
            once,
            no_color,
        } => commands::watch::run(WatchArgs {
            url,
            interval_secs,
            once,
            no_color,
        }),
        Commands::Reset { url } => commands::reset::run(url),
        Commands::Route { route } => commands::route::run(route),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "vehiclesim",
            "serve",
            "--port",
            "8080",
            "--step-ms",
            "500",
            "--route",
            "/tmp/route.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve {
                host,
                port,
                route,
                step_ms,
                debug,
            } => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
                assert_eq!(step_ms, Some(500));
                assert_eq!(route, Some(PathBuf::from("/tmp/route.json")));
                assert!(!debug);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_watch_once() {
        let cli = Cli::try_parse_from(["vehiclesim", "watch", "--once", "--url", "http://h:1"])
            .unwrap();
        match cli.command {
            Commands::Watch { url, once, .. } => {
                assert!(once);
                assert_eq!(url.as_deref(), Some("http://h:1"));
            }
            _ => panic!("expected watch command"),
        }
    }

    #[test]
    fn test_parse_config_init_force() {
        let cli = Cli::try_parse_from(["vehiclesim", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCommands::Init { force: true }
            }
        ));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["vehiclesim", "serve", "--port", "70000"]).is_err());
    }
}
