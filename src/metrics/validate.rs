//! Input coercion and bounds validation.
//!
//! Each field goes through the same four checks, in order:
//! number, integer, minimum, maximum. Fields are checked hours worked first,
//! then accident count, then days lost, and the first failure wins.

use crate::domain::{MetricsInput, RawField, ValidatedMetricsInput};
use crate::metrics::error::{Field, ValidationError};

/// Coerce and bounds-check a raw input.
///
/// Absent accident count and days lost count as 0. Absent hours worked also
/// coerces to 0 and therefore fails the minimum check; callers that want the
/// "not entered yet" behaviour check `MetricsInput::is_pending` first.
pub fn validate(input: &MetricsInput) -> Result<ValidatedMetricsInput, ValidationError> {
    let hours = check(Field::HoursWorked, coerce(Field::HoursWorked, input.hours_worked.as_ref())?)?;
    let accidents = check(
        Field::AccidentsCount,
        coerce(Field::AccidentsCount, input.accidents_count.as_ref())?,
    )?;
    let days = check(Field::DaysLost, coerce(Field::DaysLost, input.days_lost.as_ref())?)?;

    Ok(ValidatedMetricsInput::new(hours, accidents, days))
}

/// Bounds-check values that are already numeric (e.g. from a JSON request).
pub fn validate_numbers(
    hours_worked: f64,
    accidents_count: f64,
    days_lost: f64,
) -> Result<ValidatedMetricsInput, ValidationError> {
    let hours = check(Field::HoursWorked, number(Field::HoursWorked, hours_worked)?)?;
    let accidents = check(Field::AccidentsCount, number(Field::AccidentsCount, accidents_count)?)?;
    let days = check(Field::DaysLost, number(Field::DaysLost, days_lost)?)?;

    Ok(ValidatedMetricsInput::new(hours, accidents, days))
}

/// Turn a raw field into a number without judging its range.
///
/// Text uses Rust float syntax: hex like `"0x10"` is not a number, while
/// `"inf"` parses and is then refused by the integer check.
pub(crate) fn coerce(field: Field, raw: Option<&RawField>) -> Result<f64, ValidationError> {
    match raw {
        None => Ok(0.0),
        Some(RawField::Number(n)) => number(field, *n),
        Some(RawField::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            let parsed = s.parse::<f64>().map_err(|_| ValidationError::NotANumber(field))?;
            number(field, parsed)
        }
    }
}

fn number(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber(field));
    }
    Ok(value)
}

fn check(field: Field, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger(field));
    }
    if value < f64::from(field.min()) {
        return Err(ValidationError::BelowMinimum(field));
    }
    if value > f64::from(field.max()) {
        return Err(ValidationError::AboveMaximum(field));
    }
    // In range and integral, so the cast is exact.
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_text_and_numbers_alike() {
        let a = validate(&MetricsInput::from_text("1000000", "2", "10")).unwrap();
        let b = validate(&MetricsInput::from_numbers(1_000_000.0, 2.0, 10.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hours_worked(), 1_000_000);
        assert_eq!(a.accidents_count(), 2);
        assert_eq!(a.days_lost(), 10);
    }

    #[test]
    fn trims_text() {
        let v = validate(&MetricsInput::from_text(" 500 ", "\t1", "2\n")).unwrap();
        assert_eq!((v.hours_worked(), v.accidents_count(), v.days_lost()), (500, 1, 2));
    }

    #[test]
    fn absent_or_empty_counters_are_zero() {
        let input = MetricsInput {
            hours_worked: Some("1000".into()),
            ..Default::default()
        };
        let v = validate(&input).unwrap();
        assert_eq!((v.accidents_count(), v.days_lost()), (0, 0));

        let v = validate(&MetricsInput::from_text("1000", "", "")).unwrap();
        assert_eq!((v.accidents_count(), v.days_lost()), (0, 0));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let v = validate_numbers(10_000_000.0, 1_000_000.0, 1_000_000.0).unwrap();
        assert_eq!(v.hours_worked(), 10_000_000);
        assert!(validate_numbers(1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn hours_bounds() {
        assert_eq!(
            validate_numbers(10_000_001.0, 0.0, 0.0),
            Err(ValidationError::AboveMaximum(Field::HoursWorked))
        );
        assert_eq!(
            validate_numbers(0.0, 0.0, 0.0),
            Err(ValidationError::BelowMinimum(Field::HoursWorked))
        );
        assert_eq!(
            validate_numbers(-1000.0, 0.0, 0.0),
            Err(ValidationError::BelowMinimum(Field::HoursWorked))
        );
    }

    #[test]
    fn counter_bounds() {
        assert_eq!(
            validate_numbers(100.0, -1.0, 0.0),
            Err(ValidationError::BelowMinimum(Field::AccidentsCount))
        );
        assert_eq!(
            validate_numbers(100.0, 1_000_001.0, 0.0),
            Err(ValidationError::AboveMaximum(Field::AccidentsCount))
        );
        assert_eq!(
            validate_numbers(100.0, 0.0, -5.0),
            Err(ValidationError::BelowMinimum(Field::DaysLost))
        );
        assert_eq!(
            validate_numbers(100.0, 0.0, 1_000_001.0),
            Err(ValidationError::AboveMaximum(Field::DaysLost))
        );
    }

    #[test]
    fn integer_check_runs_before_bounds() {
        assert_eq!(
            validate_numbers(-0.5, 0.0, 0.0),
            Err(ValidationError::NotAnInteger(Field::HoursWorked))
        );
        assert_eq!(
            validate_numbers(100.0, 2.5, 0.0),
            Err(ValidationError::NotAnInteger(Field::AccidentsCount))
        );
        assert_eq!(
            validate_numbers(100.0, 0.0, f64::INFINITY),
            Err(ValidationError::NotAnInteger(Field::DaysLost))
        );
    }

    #[test]
    fn first_failing_field_wins() {
        let err = validate_numbers(20_000_000.0, -1.0, 1.5).unwrap_err();
        assert_eq!(err.field(), Field::HoursWorked);

        let err = validate_numbers(100.0, -1.0, 1.5).unwrap_err();
        assert_eq!(err.field(), Field::AccidentsCount);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert_eq!(
            validate(&MetricsInput::from_text("abc", "0", "0")),
            Err(ValidationError::NotANumber(Field::HoursWorked))
        );
        assert_eq!(
            validate(&MetricsInput::from_text("100", "0", "NaN")),
            Err(ValidationError::NotANumber(Field::DaysLost))
        );
    }

    #[test]
    fn text_zero_hours_fails_minimum() {
        let err = validate(&MetricsInput::from_text("0", "5", "10")).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn hex_and_infinity_text_are_rejected() {
        assert_eq!(
            validate(&MetricsInput::from_text("0x10", "0", "0")),
            Err(ValidationError::NotANumber(Field::HoursWorked))
        );
        assert_eq!(
            validate(&MetricsInput::from_text("inf", "0", "0")),
            Err(ValidationError::NotAnInteger(Field::HoursWorked))
        );
    }

    #[test]
    fn exponent_notation_is_a_number() {
        let v = validate(&MetricsInput::from_text("1e6", "0", "0")).unwrap();
        assert_eq!(v.hours_worked(), 1_000_000);
    }
}
