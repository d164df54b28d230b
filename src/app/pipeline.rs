//! Shared calculation pipeline used by every subcommand.
//!
//! raw form -> (remote offload | local calculator) -> result
//!
//! Subcommands then only decide how to present the result.

use tracing::{info, warn};

use crate::coefficients::DEFAULT_STANDARD;
use crate::domain::{CalculationResult, CoefficientStandard, MetricsInput, RunConfig};
use crate::remote::{RemoteClient, calculate_with_fallback};

/// Outputs of one calculation run.
#[derive(Debug, Clone)]
pub struct CalcOutput {
    pub standard: CoefficientStandard,
    pub result: CalculationResult,
}

/// Run one calculation with the configured mode and remote endpoint.
pub fn run_calculation(config: &RunConfig, input: MetricsInput) -> CalcOutput {
    let client = config.remote_url.as_deref().and_then(|url| match RemoteClient::new(url) {
        Ok(client) => Some(client),
        Err(err) => {
            warn!(url, error = %err, "cannot build remote client; calculating locally");
            None
        }
    });

    let result = calculate_with_fallback(client.as_ref(), &input, config.mode);
    let standard = input.coefficient.unwrap_or(DEFAULT_STANDARD);

    let outcome = match &result {
        CalculationResult::Pending => "pending",
        CalculationResult::Computed(_) => "computed",
        CalculationResult::Failed(_) => "failed",
    };
    info!(mode = ?config.mode, %standard, remote = client.is_some(), outcome, "calculation finished");

    CalcOutput {
        standard,
        result,
    }
}
