use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::AppResult;

/// Prefix for environment overrides, e.g. `CALDAY_LOGGING_LEVEL`.
pub const ENV_PREFIX: &str = "CALDAY";

/// Optional TOML file read from the working directory.
pub const CONFIG_FILE: &str = "calday.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// strftime layout used by `show` when no `--layout` is given.
    pub layout: String,
}

impl Settings {
    fn defaults() -> AppResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("display.layout", "%Y-%m-%d")?)
    }

    /// ## Summary
    /// Loads settings from defaults, then `calday.toml`, then `CALDAY_*` environment
    /// variables. Later sources take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> AppResult<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("_")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> AppResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}
