//! Calculator error types

use thiserror::Error;

/// The three counters the calculator reads, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    HoursWorked,
    AccidentsCount,
    DaysLost,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::HoursWorked => "Hours worked",
            Field::AccidentsCount => "Accident count",
            Field::DaysLost => "Days lost",
        }
    }

    /// Inclusive lower bound.
    pub fn min(self) -> u32 {
        match self {
            Field::HoursWorked => 1,
            Field::AccidentsCount | Field::DaysLost => 0,
        }
    }

    /// Inclusive upper bound.
    pub fn max(self) -> u32 {
        match self {
            Field::HoursWorked => 10_000_000,
            Field::AccidentsCount | Field::DaysLost => 1_000_000,
        }
    }
}

fn below_minimum(field: &Field) -> String {
    match field {
        Field::HoursWorked => format!("{} must be greater than 0", field.label()),
        Field::AccidentsCount | Field::DaysLost => format!("{} cannot be negative", field.label()),
    }
}

fn above_maximum(field: &Field) -> String {
    format!("{} cannot exceed {}", field.label(), group_thousands(field.max()))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Input rejected by `validate`. Only the first failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} must be a number", .0.label())]
    NotANumber(Field),

    #[error("{} must be an integer", .0.label())]
    NotAnInteger(Field),

    #[error("{}", below_minimum(.0))]
    BelowMinimum(Field),

    #[error("{}", above_maximum(.0))]
    AboveMaximum(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::NotANumber(f)
            | ValidationError::NotAnInteger(f)
            | ValidationError::BelowMinimum(f)
            | ValidationError::AboveMaximum(f) => f,
        }
    }
}

/// Failures of the TF/TG formulas themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("Hours worked must be greater than 0 to compute the indicators")]
    ZeroHours,

    #[error("Calculation error: result too large (overflow)")]
    Overflow,
}

/// Anything that can stop a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}
