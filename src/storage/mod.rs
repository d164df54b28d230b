//! Persistence of the last-entered form.
//!
//! - key-value contract and its two backends (`store`)
//! - the form record and its tolerant load/save (`form`)
//!
//! Storage never fails toward the caller: backend errors are logged and
//! dropped here so the calculator never sees them.

pub mod form;
pub mod store;

pub use form::*;
pub use store::*;
