//! Position query service.
//!
//! Owns the route dataset and the simulation clock, and answers the two
//! external operations: query the current position, and reset.

use std::sync::Arc;
use std::time::Duration;

use super::clock::{SimulationClock, TimeSource};
use super::error::SimulationError;
use super::report::{PositionReport, ResetAck};
use crate::route::{DatasetError, RouteDataset};

/// Default time spent at each waypoint (3 seconds).
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(3000);

/// Configuration for the simulation service.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Wall-clock time per waypoint advance.
    pub step_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl SimulationConfig {
    /// Set the step interval.
    pub fn with_step_interval(mut self, step_interval: Duration) -> Self {
        self.step_interval = step_interval;
        self
    }
}

/// Route state: either loaded, or the reason it is not.
#[derive(Debug)]
enum RouteState {
    Ready(RouteDataset),
    Unavailable(String),
}

/// Simulation service - maps elapsed time to a position along the route.
#[derive(Debug)]
pub struct SimulationService {
    route: RouteState,
    clock: SimulationClock,
    config: SimulationConfig,
}

impl SimulationService {
    /// Create a service over a loaded route, driven by system time.
    pub fn new(route: RouteDataset, config: SimulationConfig) -> Self {
        Self::with_clock(Ok(route), config, SimulationClock::system())
    }

    /// Create a service from the outcome of loading a route.
    ///
    /// A failed load does not prevent construction; every query then fails
    /// with [`SimulationError::DatasetUnavailable`] while resets still work.
    pub fn from_load_result(
        route: Result<RouteDataset, DatasetError>,
        config: SimulationConfig,
    ) -> Self {
        Self::with_clock(route, config, SimulationClock::system())
    }

    /// Create a service driven by a custom time source.
    pub fn with_time_source(
        route: Result<RouteDataset, DatasetError>,
        config: SimulationConfig,
        time_source: Arc<dyn TimeSource>,
    ) -> Self {
        Self::with_clock(route, config, SimulationClock::new(time_source))
    }

    fn with_clock(
        route: Result<RouteDataset, DatasetError>,
        config: SimulationConfig,
        clock: SimulationClock,
    ) -> Self {
        let route = match route {
            Ok(dataset) => {
                tracing::info!(
                    waypoints = dataset.len(),
                    route_km = format!("{:.3}", dataset.total_km()),
                    step_ms = config.step_interval.as_millis() as u64,
                    "Simulation started"
                );
                RouteState::Ready(dataset)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Route dataset unavailable, position queries will fail"
                );
                RouteState::Unavailable(e.to_string())
            }
        };

        Self {
            route,
            clock,
            config,
        }
    }

    /// The loaded route, if available.
    pub fn route(&self) -> Option<&RouteDataset> {
        match &self.route {
            RouteState::Ready(dataset) => Some(dataset),
            RouteState::Unavailable(_) => None,
        }
    }



    /// Index of the current waypoint, derived from elapsed time.
    pub fn current_index(&self) -> Result<usize, SimulationError> {
        let route = self.ready_route()?;
        let steps = self.clock.elapsed_steps(self.config.step_interval);
        Ok(route.wrap_index(steps))
    }

    /// Derive the full position report for the current instant.
    pub fn query(&self) -> Result<PositionReport, SimulationError> {
        let route = self.ready_route()?;
        let steps = self.clock.elapsed_steps(self.config.step_interval);
        let index = route.wrap_index(steps);

        tracing::trace!(steps, index, "Position query");
        Ok(PositionReport::at_index(route, index))
    }

    /// Restart the simulation from the first waypoint.
    pub fn reset(&self) -> ResetAck {
        let resets = self.clock.reset();
        tracing::info!(resets, "Simulation reset");
        ResetAck::default()
    }

    fn ready_route(&self) -> Result<&RouteDataset, SimulationError> {
        match &self.route {
            RouteState::Ready(dataset) => Ok(dataset),
            RouteState::Unavailable(reason) => {
                Err(SimulationError::DatasetUnavailable(reason.clone()))
            }
        }
    }
}
