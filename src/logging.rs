// Logging setup shared by the binaries.
//
// Logs go to stderr so stdout stays clean for CSV/JSON output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: RUST_LOG wins, otherwise the configured level for this crate.
pub fn build_filter(level: &str) -> EnvFilter {
    let default_filter = format!("keyword_core={level},keyword_finder={level},simulator={level}");
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
