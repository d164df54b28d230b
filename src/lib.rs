//! `hse-flow` library crate.
//!
//! Computes the workplace-safety Frequency Rate (TF) and Severity Rate (TG)
//! from hours worked, accident count and days lost.
//!
//! The binary (`hse`) is a thin wrapper around this library so that:
//!
//! - the calculation core is testable without spawning processes
//! - the boundary modules (storage, remote, report) can be reused by other front-ends

pub mod app;
pub mod cli;
pub mod coefficients;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod remote;
pub mod report;
pub mod storage;
