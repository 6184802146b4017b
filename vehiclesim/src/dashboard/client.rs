//! HTTP client for the vehicle position service.
//!
//! The [`VehicleClient`] trait lets the poll loop run against a fake in
//! tests; [`HttpVehicleClient`] talks to a running server via `reqwest`.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::server::VEHICLE_PATH;
use crate::simulation::{PositionReport, ResetAck};

/// Default HTTP timeout per request.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Default base URL of the position service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:3000";

/// Failure fetching from the position service.
///
/// Always transient from the dashboard's point of view: the next poll tries
/// again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        /// Server-provided error message, if the body carried one.
        message: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Json(String),
}

/// Client for the position service.
pub trait VehicleClient: Send + Sync {
    /// Fetch the current position report.
    fn fetch_position(&self) -> impl Future<Output = Result<PositionReport, FetchError>> + Send;

    /// Ask the service to reset the simulation.
    fn reset(&self) -> impl Future<Output = Result<ResetAck, FetchError>> + Send;
}

/// Position service client over HTTP.
pub struct HttpVehicleClient {
    /// Reusable HTTP client with connection pooling.
    http: reqwest::Client,

    /// Full URL of the vehicle resource.
    endpoint: String,
}

impl HttpVehicleClient {
    /// Create a client for the service at `base_url` (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint_url(base_url),
        })
    }

    /// URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<crate::server::ErrorBody>(&bytes)
                .ok()
                .map(|body| body.error);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Json(e.to_string()))
    }
}

impl VehicleClient for HttpVehicleClient {
    async fn fetch_position(&self) -> Result<PositionReport, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn reset(&self) -> Result<ResetAck, FetchError> {
        let response = self
            .http
            .post(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Self::read_json(response).await
    }
}

/// Join a base URL and the vehicle path, tolerating a trailing slash.
fn endpoint_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), VEHICLE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:3000"),
            "http://127.0.0.1:3000/api/vehicle"
        );
        assert_eq!(
            endpoint_url("http://localhost:8080/"),
            "http://localhost:8080/api/vehicle"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = HttpVehicleClient::new(DEFAULT_SERVICE_URL).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/api/vehicle");
    }

    #[test]
    fn test_status_error_display() {
        let error = FetchError::Status {
            status: 500,
            message: Some("Failed to fetch vehicle data".to_string()),
        };
        assert_eq!(error.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        // Port 9 (discard) is almost never listening on loopback
        let client = HttpVehicleClient::new("http://127.0.0.1:9").unwrap();
        let result = client.fetch_position().await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}
