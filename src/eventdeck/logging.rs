//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the caller. Logs go to stderr so stdout stays clean for command output.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter directive for a `-v` count when `RUST_LOG` is not set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a compact stderr subscriber.
/// - Respects `RUST_LOG` if set
/// - Falls back to the level selected by `verbosity`
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
