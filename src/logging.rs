//! Tracing subscriber setup for hosts and tests.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Other crates stay at warn to reduce noise
        EnvFilter::new(format!(
            "warn,layout_canvas={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

/// Install a fmt subscriber. Returns false when one was already installed,
/// which makes repeated calls from tests harmless.
pub fn init_tracing(default_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(default_level))
        .with_target(true)
        .try_init()
        .is_ok()
}
