//! Shared domain types.
//!
//! These types are kept small and serializable so they can cross every
//! boundary the calculator talks to (stored form, remote wire, scorecard).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named convention fixing the scale multiplier used in TF/TG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CoefficientStandard {
    /// European standard, rates per 1,000,000 hours.
    European,
    /// US OSHA convention, rates per 200,000 hours.
    Osha,
}

impl CoefficientStandard {
    /// Lowercase identifier, as stored and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            CoefficientStandard::European => "european",
            CoefficientStandard::Osha => "osha",
        }
    }
}

impl fmt::Display for CoefficientStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown coefficient standard '{0}' (expected 'european' or 'osha')")]
pub struct UnknownStandard(pub String);

impl FromStr for CoefficientStandard {
    type Err = UnknownStandard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" => Ok(CoefficientStandard::European),
            "osha" => Ok(CoefficientStandard::Osha),
            _ => Err(UnknownStandard(s.to_string())),
        }
    }
}

/// Which multipliers the formulas receive.
///
/// Both modes exist in the history of the tool and are kept selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CoefficientMode {
    /// TF always per 1,000,000 hours, TG always per 1,000 hours.
    /// The standard is only used for labels.
    #[default]
    Fixed,
    /// TF and TG both use the multiplier of the selected standard.
    Configurable,
}

impl FromStr for CoefficientMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(CoefficientMode::Fixed),
            "configurable" => Ok(CoefficientMode::Configurable),
            other => Err(format!(
                "unknown coefficient mode '{other}' (expected 'fixed' or 'configurable')"
            )),
        }
    }
}

/// Multipliers resolved for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multipliers {
    pub tf: u32,
    pub tg: u32,
}

/// An untrusted field value: whatever the form or caller handed us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

/// Raw calculation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsInput {
    pub hours_worked: Option<RawField>,
    pub accidents_count: Option<RawField>,
    pub days_lost: Option<RawField>,
    pub coefficient: Option<CoefficientStandard>,
}

impl MetricsInput {
    /// Build an input from the three text fields of the form.
    pub fn from_text(hours_worked: &str, accidents_count: &str, days_lost: &str) -> Self {
        Self {
            hours_worked: Some(hours_worked.into()),
            accidents_count: Some(accidents_count.into()),
            days_lost: Some(days_lost.into()),
            coefficient: None,
        }
    }

    /// Build an input from already-numeric values.
    pub fn from_numbers(hours_worked: f64, accidents_count: f64, days_lost: f64) -> Self {
        Self {
            hours_worked: Some(hours_worked.into()),
            accidents_count: Some(accidents_count.into()),
            days_lost: Some(days_lost.into()),
            coefficient: None,
        }
    }

    pub fn with_coefficient(mut self, standard: CoefficientStandard) -> Self {
        self.coefficient = Some(standard);
        self
    }

    /// True when hours worked has not been entered yet.
    ///
    /// Absent, empty text, numeric zero and NaN all count as "not yet".
    /// Text `"0"` does not: it was typed, so it goes through validation.
    pub fn is_pending(&self) -> bool {
        match &self.hours_worked {
            None => true,
            Some(RawField::Text(s)) => s.is_empty(),
            Some(RawField::Number(n)) => *n == 0.0 || n.is_nan(),
        }
    }
}

/// Inputs that passed coercion and bounds checks.
///
/// Only produced by `metrics::validate`; fields are private so the bounds hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMetricsInput {
    hours_worked: u32,
    accidents_count: u32,
    days_lost: u32,
}

impl ValidatedMetricsInput {
    pub(crate) fn new(hours_worked: u32, accidents_count: u32, days_lost: u32) -> Self {
        Self {
            hours_worked,
            accidents_count,
            days_lost,
        }
    }

    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }

    pub fn accidents_count(&self) -> u32 {
        self.accidents_count
    }

    pub fn days_lost(&self) -> u32 {
        self.days_lost
    }
}

/// A computed TF/TG pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub tf: f64,
    pub tg: f64,
}

/// Outcome of `calculate_metrics`.
///
/// TF and TG are always both present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "CalculationView")]
pub enum CalculationResult {
    /// Hours worked not entered yet: nothing to show, nothing wrong.
    Pending,
    Computed(Rates),
    Failed(String),
}

impl CalculationResult {
    pub fn rates(&self) -> Option<Rates> {
        match self {
            CalculationResult::Computed(rates) => Some(*rates),
            _ => None,
        }
    }

    pub fn tf(&self) -> Option<f64> {
        self.rates().map(|r| r.tf)
    }

    pub fn tg(&self) -> Option<f64> {
        self.rates().map(|r| r.tg)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CalculationResult::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Flat `{tf, tg, error?}` shape used when a result is serialized.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationView {
    pub tf: Option<f64>,
    pub tg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<CalculationResult> for CalculationView {
    fn from(result: CalculationResult) -> Self {
        match result {
            CalculationResult::Pending => Self {
                tf: None,
                tg: None,
                error: None,
            },
            CalculationResult::Computed(rates) => Self {
                tf: Some(rates.tf),
                tg: Some(rates.tg),
                error: None,
            },
            CalculationResult::Failed(message) => Self {
                tf: None,
                tg: None,
                error: Some(message),
            },
        }
    }
}

/// A full run's configuration as understood by the app.
///
/// Derived from CLI flags, then environment, then defaults.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: CoefficientMode,
    pub storage_path: PathBuf,
    /// Base URL of a remote calculation endpoint, if offloading is enabled.
    pub remote_url: Option<String>,
}
