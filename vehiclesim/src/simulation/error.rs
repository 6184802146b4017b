//! Error types for position queries.

use thiserror::Error;

/// Errors returned by a position query.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The route dataset failed to load, so no position can be derived.
    #[error("Route dataset unavailable: {0}")]
    DatasetUnavailable(String),
}
