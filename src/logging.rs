//! Logging setup for the importer binary
//!
//! Logs go to stderr so stdout stays free for payload output. The filter
//! comes from `RUST_LOG`, falling back to `info` for this crate, or `debug`
//! when verbose output is requested.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "snoonote_modnote=debug,snoonote_import=debug"
    } else {
        "snoonote_modnote=info,snoonote_import=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
