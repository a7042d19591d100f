//! Structured logging to stderr via `tracing`.
//!
//! Filter precedence: `SIDEBARCLI_LOG` (full `EnvFilter` directive syntax),
//! then `--debug`, then `logging.level` from the configuration. Stdout is
//! reserved for command output.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SIDEBARCLI_LOG";

/// Pick the filter directive from the environment, the debug flag and config.
#[must_use]
pub fn filter_directive(env: Option<&str>, debug: bool, config: &LoggingConfig) -> String {
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directive) => directive.to_owned(),
        None if debug => "debug".to_owned(),
        None => config.level.clone(),
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the directive does not parse or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig, debug: bool) -> anyhow::Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env.as_deref(), debug, config);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
