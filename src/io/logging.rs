//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub const fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the event filter, preferring `RUST_LOG` when it is set
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)))
}

/// Install the global subscriber writing to stderr
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
