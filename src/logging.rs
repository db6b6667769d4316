//! Diagnostic logging setup for the binary

use tracing_subscriber::EnvFilter;

use crate::constants::logging::{DEFAULT_DIRECTIVE, LOG_ENV_VAR, VERBOSE_DIRECTIVE};

/// Pick the filter directive: `--verbose` wins, then the environment, then
/// the default
pub(crate) fn filter_directive(verbose: bool, env_value: Option<&str>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Install a stderr `tracing` subscriber
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let directive = filter_directive(verbose, env_value.as_deref());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
