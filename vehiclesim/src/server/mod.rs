//! HTTP surface for the simulation.
//!
//! Two operations on one resource:
//!
//! | Method | Path           | Response                                   |
//! |--------|----------------|--------------------------------------------|
//! | GET    | `/api/vehicle` | [`PositionReport`], or 500 + [`ErrorBody`] |
//! | POST   | `/api/vehicle` | [`ResetAck`]                               |
//!
//! [`PositionReport`]: crate::simulation::PositionReport
//! [`ResetAck`]: crate::simulation::ResetAck

mod error;
mod routes;

pub use error::{ApiError, ErrorBody, ServerError, FETCH_FAILED_MESSAGE};

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::simulation::SharedPositionProvider;

/// Path of the vehicle resource.
pub const VEHICLE_PATH: &str = "/api/vehicle";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Creates the router with all routes.
pub fn create_router(provider: SharedPositionProvider) -> Router {
    Router::new()
        .route(
            VEHICLE_PATH,
            get(routes::get_position).post(routes::reset_simulation),
        )
        .with_state(provider)
}

/// Bind a listener on `host:port`.
///
/// `host` may be an IPv4 or IPv6 address or a host name to resolve.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener, ServerError> {
    TcpListener::bind((host, port))
        .await
        .map_err(|source| ServerError::Bind {
            addr: display_addr(host, port),
            source,
        })
}

/// `host:port`, bracketing IPv6 literals.
fn display_addr(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

/// Serve requests on `listener` until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    provider: SharedPositionProvider,
    shutdown: CancellationToken,
) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "HTTP server listening");
    }

    axum::serve(listener, create_router(provider))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
