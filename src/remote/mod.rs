//! Remote calculation boundary.
//!
//! - wire types and the request handler a host process exposes (`wire`)
//! - the blocking HTTP client with local fallback (`client`)
//!
//! The remote side is an offload, never the source of truth: whenever it
//! fails, the local calculator answers instead.

pub mod client;
pub mod wire;

pub use client::*;
pub use wire::*;
