//! Logging setup for the binary.
//!
//! Logs go to stderr so the token stream on stdout stays untouched.

use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the filter: `RUST_LOG` when set, otherwise `info` (or `debug`
/// when verbose).
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(layer)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}
