//! TF / TG calculator.
//!
//! Responsibilities:
//!
//! - coerce and validate raw input (`validate`)
//! - apply the rate formulas (`formula`)
//! - orchestrate a full calculation into a `CalculationResult` (`calculate`)

pub mod calculate;
pub mod error;
pub mod formula;
pub mod validate;

pub use calculate::*;
pub use error::*;
pub use formula::*;
pub use validate::*;
