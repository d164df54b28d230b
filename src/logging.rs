//! Tracing subscriber setup for the `hse` binary.
//!
//! Logs go to stderr so stdout stays clean for JSON output.
//! `RUST_LOG` wins when set; otherwise `-v` picks the level.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "hse_flow=warn",
        1 => "hse_flow=info",
        _ => "hse_flow=debug",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
