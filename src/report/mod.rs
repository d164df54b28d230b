//! Reporting: scorecard export and formatted terminal output.
//!
//! Formatting lives in one place so the calculator stays free of
//! presentation concerns.

pub mod format;
pub mod scorecard;

pub use format::*;
pub use scorecard::*;
