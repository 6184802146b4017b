//! Vehicle simulation: time-driven position along a fixed route.
//!
//! # Model
//!
//! The simulation keeps one piece of mutable state, the instant it was last
//! started or reset. Every query divides the time elapsed since then into
//! fixed step intervals (3 seconds by default) and advances one waypoint per
//! step, wrapping back to the first waypoint after the last:
//!
//! ```text
//! index = floor(elapsed / step_interval) mod route_length
//! ```
//!
//! Because the index is derived from wall-clock time rather than a ticking
//! counter, a paused process does not pause the vehicle.
//!
//! # Usage
//!
//! ```
//! use vehiclesim::route::RouteDataset;
//! use vehiclesim::simulation::{SimulationConfig, SimulationService};
//!
//! let route = RouteDataset::bundled().unwrap();
//! let service = SimulationService::new(route, SimulationConfig::default());
//!
//! let report = service.query().unwrap();
//! assert_eq!(report.current_index, 0);
//!
//! service.reset();
//! ```
//!
//! # Components
//!
//! - [`SimulationClock`] - start anchor behind one lock, driven by a [`TimeSource`]
//! - [`SimulationService`] - query and reset
//! - [`PositionReport`] - derived status returned by a query
//! - [`PositionProvider`] - trait consumed by the HTTP server and logger

mod clock;
mod error;
mod logger;
mod provider;
mod report;
mod service;

pub use clock::{ClockSnapshot, ManualTimeSource, SimulationClock, SystemTimeSource, TimeSource};
pub use error::SimulationError;
pub use logger::{spawn_position_logger, DEFAULT_LOG_INTERVAL};
pub use provider::{PositionProvider, SharedPositionProvider};
pub use report::{progress_percent, PositionReport, ResetAck, RESET_MESSAGE};
pub use service::{SimulationConfig, SimulationService, DEFAULT_STEP_INTERVAL};
