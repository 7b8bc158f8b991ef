//! Logging utilities for the tabula binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to whoever embeds the crate).

use std::time::Instant;

use tracing::{debug, error};

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG`, when set, takes precedence over `log_level`. Output goes to
/// stderr so it never mixes with tables printed on stdout.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run `f`, logging how long it took at debug level.
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();

    debug!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &dyn std::error::Error, context: &str) {
    error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
