//! Provider trait for consumers of simulation state.
//!
//! The HTTP server and the position logger depend on [`PositionProvider`]
//! rather than on [`SimulationService`] directly, so either can be driven
//! by a test double.

use std::sync::Arc;

use super::error::SimulationError;
use super::report::{PositionReport, ResetAck};
use super::service::SimulationService;

/// Query and reset API for the simulated vehicle.
pub trait PositionProvider: Send + Sync {
    /// Derive the current position report.
    fn current_position(&self) -> Result<PositionReport, SimulationError>;

    /// Restart the simulation from the first waypoint.
    fn reset(&self) -> ResetAck;
}

/// Provider shared across tasks and request handlers.
pub type SharedPositionProvider = Arc<dyn PositionProvider>;

impl PositionProvider for SimulationService {
    fn current_position(&self) -> Result<PositionReport, SimulationError> {
        self.query()
    }

    fn reset(&self) -> ResetAck {
        SimulationService::reset(self)
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for Arc<P> {
    fn current_position(&self) -> Result<PositionReport, SimulationError> {
        (**self).current_position()
    }

    fn reset(&self) -> ResetAck {
        (**self).reset()
    }
}
