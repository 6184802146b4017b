//! Configuration file for VehicleSim components.
//!
//! Settings live in `~/.vehiclesim/config.ini`. A missing file means
//! defaults; command-line flags override individual values.
//!
//! # Example
//!
//! ```
//! use vehiclesim::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.server.port, 3000);
//! assert_eq!(config.simulation.step_interval_ms, 3000);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, DashboardSettings, LoggingSettings, ServerSettings, SimulationSettings,
};
