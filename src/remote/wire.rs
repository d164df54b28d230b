//! Wire types for remote calculation.

use serde::{Deserialize, Serialize};

use crate::coefficients::DEFAULT_STANDARD;
use crate::domain::{CoefficientMode, CoefficientStandard, MetricsInput, Rates};
use crate::metrics::validate::coerce;
use crate::metrics::{Field, MetricsError, evaluate, validate_numbers};

/// `{hoursWorked, accidentsCount, daysLost, coefficient?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRequest {
    pub hours_worked: f64,
    pub accidents_count: f64,
    pub days_lost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficient: Option<CoefficientStandard>,
}

impl RemoteRequest {
    /// Numeric request for a raw input, or `None` if a field is not a number.
    pub fn from_input(input: &MetricsInput) -> Option<Self> {
        Some(Self {
            hours_worked: coerce(Field::HoursWorked, input.hours_worked.as_ref()).ok()?,
            accidents_count: coerce(Field::AccidentsCount, input.accidents_count.as_ref()).ok()?,
            days_lost: coerce(Field::DaysLost, input.days_lost.as_ref()).ok()?,
            coefficient: input.coefficient,
        })
    }
}

/// `{success, tf?, tg?, error?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RemoteResponse {
    pub fn computed(rates: Rates) -> Self {
        Self {
            success: true,
            tf: Some(rates.tf),
            tg: Some(rates.tg),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            tf: None,
            tg: None,
            error: Some(message.into()),
        }
    }

    /// Rates, only when the response is a complete, finite success.
    pub fn rates(&self) -> Option<Rates> {
        match (self.success, self.tf, self.tg) {
            (true, Some(tf), Some(tg)) if tf.is_finite() && tg.is_finite() => Some(Rates { tf, tg }),
            _ => None,
        }
    }
}

/// Serve one remote calculation.
pub fn handle_request(request: &RemoteRequest, mode: CoefficientMode) -> RemoteResponse {
    let standard = request.coefficient.unwrap_or(DEFAULT_STANDARD);
    let outcome = validate_numbers(request.hours_worked, request.accidents_count, request.days_lost)
        .map_err(MetricsError::from)
        .and_then(|validated| evaluate(&validated, standard, mode).map_err(MetricsError::from));

    match outcome {
        Ok(rates) => RemoteResponse::computed(rates),
        Err(err) => RemoteResponse::failed(err.to_string()),
    }
}
