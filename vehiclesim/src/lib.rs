//! VehicleSim - simulated vehicle position service
//!
//! This library replays a fixed, recorded route as if a vehicle were driving
//! it in real time. Wall-clock time since the last reset is cut into fixed
//! steps (3 seconds by default) and each step advances the vehicle by one
//! waypoint, wrapping back to the start at the end of the route.
//!
//! # High-Level API
//!
//! ```ignore
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//! use vehiclesim::route::RouteDataset;
//! use vehiclesim::server;
//! use vehiclesim::simulation::{SimulationConfig, SimulationService};
//!
//! let service = SimulationService::new(RouteDataset::bundled()?, SimulationConfig::default());
//! let listener = server::bind("127.0.0.1", 3000).await?;
//! server::serve(listener, Arc::new(service), CancellationToken::new()).await?;
//! ```

pub mod config;
pub mod coord;
pub mod dashboard;
pub mod logging;
pub mod route;
pub mod server;
pub mod simulation;

/// Version of the VehicleSim library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
