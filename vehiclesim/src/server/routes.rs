//! Request handlers for the vehicle endpoints.

use axum::extract::State;
use axum::Json;

use super::error::ApiError;
use crate::simulation::{PositionReport, ResetAck, SharedPositionProvider};

/// `GET /api/vehicle` - current position report.
pub(super) async fn get_position(
    State(provider): State<SharedPositionProvider>,
) -> Result<Json<PositionReport>, ApiError> {
    let report = provider.current_position()?;
    tracing::debug!(
        index = report.current_index,
        progress = report.progress,
        "Served position report"
    );
    Ok(Json(report))
}

/// `POST /api/vehicle` - restart the simulation.
pub(super) async fn reset_simulation(
    State(provider): State<SharedPositionProvider>,
) -> Json<ResetAck> {
    Json(provider.reset())
}
