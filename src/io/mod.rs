//! File output helpers.
//!
//! - scorecard document export (`scorecard`)

pub mod scorecard;

pub use scorecard::*;
