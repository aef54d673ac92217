//! Diagnostic output for the CLI.
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! forwards those records to stderr, filtered by `SUPPLYMATCH_LOG`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub(crate) const LOG_ENV: &str = "SUPPLYMATCH_LOG";

const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the stderr subscriber. Later calls are no-ops.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    // A subscriber may already be installed, for example by a test harness.
    let _installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
}
