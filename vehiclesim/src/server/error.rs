//! Error types for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::simulation::SimulationError;

/// Message returned to clients when a position query fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch vehicle data";

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error description.
    pub error: String,
}

/// Request handler failures, rendered as a 500 with an [`ErrorBody`].
///
/// The underlying cause is logged, not sent to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The position query failed.
    #[error("Position query failed: {0}")]
    Query(#[from] SimulationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Error fetching vehicle data");

        let body = ErrorBody {
            error: FETCH_FAILED_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Errors starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not resolve the host or bind the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
