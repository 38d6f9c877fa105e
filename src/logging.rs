//! Process-wide `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` when set and valid, else `fallback`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global `tracing` subscriber, writing to stderr so stdout
/// carries only the production plan.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(fallback: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
