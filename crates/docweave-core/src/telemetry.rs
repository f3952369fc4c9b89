//! Tracing initialization
//!
//! Log output carries no functional weight anywhere in the pipeline; this
//! helper only exists so binaries and integration tests can see the spans.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber with an env-derived filter
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
