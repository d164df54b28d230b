//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - configuration enums (`CoefficientStandard`, `CoefficientMode`)
//! - raw and validated inputs (`MetricsInput`, `ValidatedMetricsInput`)
//! - calculation outputs (`Rates`, `CalculationResult`)
//! - the merged run configuration (`RunConfig`)

pub mod types;

pub use types::*;
