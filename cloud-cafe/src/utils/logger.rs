//! Logging Infrastructure
//!
//! Structured console logging for the desktop/CLI process.

use tracing_subscriber::EnvFilter;

/// Initialize the logger with the configured filter, e.g. `info` or
/// `cloud_cafe=debug`. `RUST_LOG` still wins when set.
pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
