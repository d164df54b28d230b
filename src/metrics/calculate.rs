//! Calculation orchestration: pending check, validation, multiplier
//! resolution, then both formulas.
//!
//! `calculate_metrics` is the public entry point and never returns an error;
//! every failure comes back as `CalculationResult::Failed`.

use tracing::debug;

use crate::coefficients::{self, DEFAULT_STANDARD};
use crate::domain::{CalculationResult, CoefficientMode, CoefficientStandard, MetricsInput, Rates, ValidatedMetricsInput};
use crate::metrics::error::{ComputeError, MetricsError};
use crate::metrics::formula::{compute_tf, compute_tg};
use crate::metrics::validate::validate;

/// Compute TF and TG for a raw input.
pub fn calculate_metrics(input: &MetricsInput, mode: CoefficientMode) -> CalculationResult {
    if input.is_pending() {
        return CalculationResult::Pending;
    }

    match try_calculate(input, mode) {
        Ok(rates) => CalculationResult::Computed(rates),
        Err(err) => CalculationResult::Failed(err.to_string()),
    }
}

/// Same as `calculate_metrics` past the pending check, with typed errors.
pub fn try_calculate(input: &MetricsInput, mode: CoefficientMode) -> Result<Rates, MetricsError> {
    let validated = validate(input)?;
    let standard = input.coefficient.unwrap_or(DEFAULT_STANDARD);
    Ok(evaluate(&validated, standard, mode)?)
}

/// Apply both formulas to validated input.
pub fn evaluate(
    input: &ValidatedMetricsInput,
    standard: CoefficientStandard,
    mode: CoefficientMode,
) -> Result<Rates, ComputeError> {
    let multipliers = coefficients::multipliers(mode, standard);
    debug!(
        ?mode,
        %standard,
        tf_multiplier = multipliers.tf,
        tg_multiplier = multipliers.tg,
        "resolved multipliers"
    );

    let hours = f64::from(input.hours_worked());
    let tf = compute_tf(f64::from(input.accidents_count()), hours, f64::from(multipliers.tf))?;
    let tg = compute_tg(f64::from(input.days_lost()), hours, f64::from(multipliers.tg))?;

    Ok(Rates { tf, tg })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawField;
    use approx::assert_relative_eq;

    fn fixed(input: &MetricsInput) -> CalculationResult {
        calculate_metrics(input, CoefficientMode::Fixed)
    }

    #[test]
    fn empty_hours_is_pending_without_error() {
        let result = fixed(&MetricsInput::from_text("", "5", "10"));
        assert_eq!(result, CalculationResult::Pending);
        assert_eq!(result.tf(), None);
        assert_eq!(result.error(), None);

        assert_eq!(fixed(&MetricsInput::default()), CalculationResult::Pending);
        assert_eq!(fixed(&MetricsInput::from_numbers(0.0, 5.0, 10.0)), CalculationResult::Pending);
    }

    #[test]
    fn text_zero_hours_is_a_validation_failure() {
        let result = fixed(&MetricsInput::from_text("0", "5", "10"));
        assert_eq!(result.tf(), None);
        assert_eq!(result.tg(), None);
        assert!(result.error().unwrap().contains("greater than 0"));
    }

    #[test]
    fn computes_both_rates_in_fixed_mode() {
        let result = fixed(&MetricsInput::from_text("1000000", "2", "10"));
        assert_eq!(result, CalculationResult::Computed(Rates { tf: 2.0, tg: 0.01 }));
    }

    #[test]
    fn reference_scenarios() {
        assert_eq!(fixed(&MetricsInput::from_numbers(1_000_000.0, 5.0, 0.0)).tf(), Some(5.0));
        assert_eq!(fixed(&MetricsInput::from_numbers(500_000.0, 2.0, 0.0)).tf(), Some(4.0));
        assert_eq!(fixed(&MetricsInput::from_numbers(1_000_000.0, 0.0, 10.0)).tg(), Some(0.01));
        assert_eq!(fixed(&MetricsInput::from_numbers(10_000_000.0, 0.0, 1_000.0)).tg(), Some(0.1));
    }

    #[test]
    fn text_and_numbers_give_the_same_result() {
        let a = fixed(&MetricsInput::from_text("1000000", "2", "10"));
        let b = fixed(&MetricsInput::from_numbers(1_000_000.0, 2.0, 10.0));
        assert_eq!(a, b);
    }

    #[test]
    fn validation_errors_surface_verbatim() {
        let result = fixed(&MetricsInput::from_text("20000000", "5", "10"));
        assert_eq!(result.error(), Some("Hours worked cannot exceed 10,000,000"));

        let result = fixed(&MetricsInput::from_text("-1000", "5", "10"));
        assert_eq!(result.rates(), None);
        assert!(result.error().is_some());
    }

    #[test]
    fn zero_counters_are_valid() {
        let result = fixed(&MetricsInput::from_text("1000000", "0", "0"));
        assert_eq!(result, CalculationResult::Computed(Rates { tf: 0.0, tg: 0.0 }));
    }

    #[test]
    fn fixed_mode_ignores_the_standard() {
        let input = MetricsInput::from_numbers(1_000_000.0, 5.0, 10.0);
        let european = fixed(&input.clone().with_coefficient(CoefficientStandard::European));
        let osha = fixed(&input.with_coefficient(CoefficientStandard::Osha));
        assert_eq!(european, osha);
    }

    #[test]
    fn configurable_mode_uses_the_standard() {
        let input = MetricsInput::from_numbers(400_000.0, 2.0, 8.0).with_coefficient(CoefficientStandard::Osha);
        let result = calculate_metrics(&input, CoefficientMode::Configurable);
        assert_eq!(result, CalculationResult::Computed(Rates { tf: 1.0, tg: 4.0 }));

        let input = MetricsInput::from_numbers(1_000_000.0, 3.0, 3.0);
        let result = calculate_metrics(&input, CoefficientMode::Configurable);
        assert_eq!(result, CalculationResult::Computed(Rates { tf: 3.0, tg: 3.0 }));
    }

    #[test]
    fn osha_rates_on_uneven_hours() {
        let input = MetricsInput::from_text("173333", "3", "45").with_coefficient(CoefficientStandard::Osha);
        let rates = calculate_metrics(&input, CoefficientMode::Configurable).rates().unwrap();
        assert_relative_eq!(rates.tf, 3.461545, max_relative = 1e-6);
        assert_relative_eq!(rates.tg, 51.923176, max_relative = 1e-6);
    }

    #[test]
    fn valid_grid_always_yields_finite_rates() {
        let hours = [1.0, 7.0, 999_999.0, 10_000_000.0];
        let counts = [0.0, 1.0, 12_345.0, 1_000_000.0];
        for mode in [CoefficientMode::Fixed, CoefficientMode::Configurable] {
            for &h in &hours {
                for &a in &counts {
                    for &d in &counts {
                        let result = calculate_metrics(&MetricsInput::from_numbers(h, a, d), mode);
                        let rates = result.rates().expect("valid input computes");
                        assert!(rates.tf.is_finite() && rates.tg.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_calls_are_bitwise_identical() {
        let input = MetricsInput {
            hours_worked: Some(RawField::Text("123457".to_string())),
            accidents_count: Some(RawField::Number(7.0)),
            days_lost: Some(RawField::Text("31".to_string())),
            coefficient: Some(CoefficientStandard::Osha),
        };
        for mode in [CoefficientMode::Fixed, CoefficientMode::Configurable] {
            let first = calculate_metrics(&input, mode).rates().unwrap();
            let second = calculate_metrics(&input, mode).rates().unwrap();
            assert_eq!(first.tf.to_bits(), second.tf.to_bits());
            assert_eq!(first.tg.to_bits(), second.tg.to_bits());
        }
    }

    #[test]
    fn try_calculate_keeps_the_error_type() {
        let err = try_calculate(&MetricsInput::from_text("10", "x", "0"), CoefficientMode::Fixed).unwrap_err();
        assert!(matches!(err, MetricsError::Validation(_)));
    }
}
