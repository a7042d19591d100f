//! Layered configuration.
//!
//! Precedence, lowest to highest: built-in defaults, the user-level file
//! (`$XDG_CONFIG_HOME/sidebarcli/config.toml`, falling back to
//! `~/.config/sidebarcli/config.toml`), the `--config` file, `SIDEBARCLI_*`
//! environment variables. CLI flags are applied on top by `main`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::registry::SidebarError;

/// Environment variable prefix for configuration keys.
pub const ENV_PREFIX: &str = "SIDEBARCLI";

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Registry snapshot path; `--registry` wins over this.
    #[serde(default)]
    pub registry: Option<PathBuf>,

    /// Install the inactive-widgets placeholder hook.
    pub register_unused_sidebar: bool,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// One of: off, error, warn, info, debug, trace.
    pub level: String,
    /// Colored log output.
    pub ansi: bool,
}

impl AppConfig {
    /// Reject values serde accepts but the program cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for an unknown log level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        LevelFilter::from_str(&self.logging.level).map_err(|_| {
            ConfigError::Message(format!(
                "logging.level must be one of off, error, warn, info, debug, trace (got '{}')",
                self.logging.level
            ))
        })?;
        Ok(())
    }

    /// Registry snapshot to read: `cli_override` first, then the configured
    /// path.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::NoRegistry` if neither is set.
    pub fn registry_path<'a>(
        &'a self,
        cli_override: Option<&'a Path>,
    ) -> Result<&'a Path, SidebarError> {
        cli_override
            .or(self.registry.as_deref())
            .ok_or(SidebarError::NoRegistry)
    }
}

/// Path of the user-level config file, if a home directory is known.
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("sidebarcli").join("config.toml"))
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("register_unused_sidebar", true)?
        .set_default("logging.level", "warn")?
        .set_default("logging.ansi", false)
}

fn file_layers(
    global: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder_with_defaults()?;
    if let Some(path) = global {
        builder = builder.add_source(File::from(path).required(false));
    }
    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path).required(true));
    }
    Ok(builder)
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn layered(
    global: Option<&Path>,
    explicit: Option<&Path>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = file_layers(global, explicit)?
        .add_source(env)
        .build()?
        .try_deserialize()?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from every layer.
///
/// # Errors
///
/// Returns `ConfigError` if the explicit file is missing, a file fails to
/// parse, or a value (file or `SIDEBARCLI_*` variable) has the wrong type.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    layered(global_config_path().as_deref(), explicit, env_source())
}
