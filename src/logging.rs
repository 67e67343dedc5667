//! Diagnostic logging to stderr
//!
//! Summaries go to stdout; `tracing` events go to stderr so they never mix
//! with them. `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "pi_messenger=warn";
const VERBOSE_FILTER: &str = "pi_messenger=debug";

/// Install the global subscriber
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be set when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
