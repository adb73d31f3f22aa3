//! Logging utilities for densmap.
//!
//! Structured tracing around the three pipeline stages (load, render,
//! save). Logging never affects the rendered output.

use std::time::Instant;
use tracing::{debug, info};

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over the CLI-supplied level.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Run a closure, logging its duration under the given operation name.
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();

    debug!(operation = operation, "Starting operation");

    let result = f();

    info!(
        operation = operation,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log an error with context
pub fn log_error(error: &crate::error::DensmapError, context: &str) {
    tracing::error!(
        error = %error,
        context = context,
        "Error occurred"
    );
}
