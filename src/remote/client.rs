//! Blocking HTTP client for a remote calculation endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{CalculationResult, CoefficientMode, MetricsInput};
use crate::metrics::calculate_metrics;
use crate::remote::wire::{RemoteRequest, RemoteResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote endpoint answered with status {0}")]
    Status(reqwest::StatusCode),
}

pub struct RemoteClient {
    client: Client,
    endpoint: String,
}

impl RemoteClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one request and decode the response.
    pub fn calculate(&self, request: &RemoteRequest) -> Result<RemoteResponse, RemoteError> {
        let resp = self.client.post(&self.endpoint).json(request).send()?;

        if !resp.status().is_success() {
            return Err(RemoteError::Status(resp.status()));
        }

        Ok(resp.json()?)
    }
}

/// Calculate remotely when a client is configured, locally otherwise.
///
/// The wire protocol carries no mode, so only fixed-mode runs are offloaded.
/// Any remote failure (transport, status, decode, `success: false`,
/// incomplete rates) falls back to the local calculator.
pub fn calculate_with_fallback(
    client: Option<&RemoteClient>,
    input: &MetricsInput,
    mode: CoefficientMode,
) -> CalculationResult {
    if input.is_pending() {
        return CalculationResult::Pending;
    }
    let Some(client) = client else {
        return calculate_metrics(input, mode);
    };
    if mode != CoefficientMode::Fixed {
        debug!(endpoint = client.endpoint(), ?mode, "remote endpoint only serves fixed mode; calculating locally");
        return calculate_metrics(input, mode);
    }
    // Non-numeric fields never leave the process; the local validator words the error.
    let Some(request) = RemoteRequest::from_input(input) else {
        return calculate_metrics(input, mode);
    };

    match client.calculate(&request) {
        Ok(resp) => match resp.rates() {
            Some(rates) => {
                debug!(endpoint = client.endpoint(), "remote calculation succeeded");
                CalculationResult::Computed(rates)
            }
            None => {
                warn!(
                    endpoint = client.endpoint(),
                    error = resp.error.as_deref().unwrap_or("incomplete response"),
                    "remote calculation unsuccessful; using local calculator"
                );
                calculate_metrics(input, mode)
            }
        },
        Err(err) => {
            warn!(endpoint = client.endpoint(), error = %err, "remote calculation failed; using local calculator");
            calculate_metrics(input, mode)
        }
    }
}
