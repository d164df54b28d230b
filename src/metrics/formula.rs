//! TF / TG formulas.
//!
//! Both rates share one shape: `(count * coefficient) / hours_worked`.
//! The multiplier is always a parameter; choosing it is the caller's job
//! (see `coefficients::multipliers`).
//!
//! These functions re-check their own preconditions so they stay safe to
//! call without going through `validate`.

use crate::metrics::error::ComputeError;

/// Frequency rate: accidents per `coefficient` hours worked.
pub fn compute_tf(accidents_count: f64, hours_worked: f64, coefficient: f64) -> Result<f64, ComputeError> {
    rate(accidents_count, hours_worked, coefficient)
}

/// Severity rate: days lost per `coefficient` hours worked.
pub fn compute_tg(days_lost: f64, hours_worked: f64, coefficient: f64) -> Result<f64, ComputeError> {
    rate(days_lost, hours_worked, coefficient)
}

fn rate(count: f64, hours_worked: f64, coefficient: f64) -> Result<f64, ComputeError> {
    if hours_worked == 0.0 {
        return Err(ComputeError::ZeroHours);
    }
    let result = (count * coefficient) / hours_worked;
    if !result.is_finite() {
        return Err(ComputeError::Overflow);
    }
    Ok(result)
}
