//! HTTP client for the fleet GraphQL endpoint.

use serde_json::{json, Value};
use tracing::{debug, error};

use super::envelope::{unwrap_envelope, RemoteError};
use super::gauge::BusyGauge;

/// Client for the fleet GraphQL API.
///
/// Each call is a single attempt: no retry and no client-side timeout.
/// Failures surface as [`RemoteError`] and are left to the initiating
/// caller; the busy gauge is released on every exit path.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    gauge: BusyGauge,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            gauge: BusyGauge::new(),
        }
    }

    /// Handle to the in-flight gauge for the view layer's loading state.
    pub fn gauge(&self) -> BusyGauge {
        self.gauge.clone()
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute one operation with named variables and return the unwrapped
    /// data payload.
    pub async fn execute(&self, operation: &str, variables: Value) -> Result<Value, RemoteError> {
        let _busy = self.gauge.enter();
        debug!(endpoint = %self.endpoint, "dispatching operation");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": operation, "variables": variables }))
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %self.endpoint, "transport failure: {e}");
                RemoteError::Transport(e.to_string())
            })?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

        unwrap_envelope(body).map_err(|e| {
            error!(endpoint = %self.endpoint, "operation failed: {e}");
            e
        })
    }
}
