//! Tracing setup
//!
//! Logs go to stderr so the prompts on stdout stay readable. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::EnvFilter;

/// Default filter: quiet unless `--verbose`
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "love_sandwiches=debug"
    } else {
        "love_sandwiches=warn"
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
