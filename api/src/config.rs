//! Application configuration
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `config/relay.{toml,yaml,json}` (optional)
//! 3. `config/relay.<environment>.*` (optional)
//! 4. `RELAY__`-prefixed environment variables, `__` separating nested keys,
//!    e.g. `RELAY__SERVER__PORT=8080` or `RELAY__STORE__TTL_SECONDS=120`
//!
//! The environment itself comes from `ENVIRONMENT` (or `ENV`/`RUST_ENV`).

use config::{Config, ConfigError, File};
use relay_core::services::{DispatchConfig, NormalizerConfig, OtpStoreConfig, SweeperConfig};
use relay_infra::config::{ChannelConfig, DedupConfig};
use relay_shared::config::{Environment, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Base name of the optional configuration file shared by all environments
const BASE_CONFIG_FILE: &str = "config/relay";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: OtpStoreConfig,
    #[serde(default)]
    pub sweeper: SweeperConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
    #[serde(default)]
    pub dedup: DedupConfig,
}

impl AppConfig {
    /// Load configuration for the environment named in the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        // .env files only fill variables that are not already set
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .set_default("environment", environment.to_string())?
            .set_default("logging.level", LoggingConfig::for_environment(environment).level)?
            .add_source(File::with_name(BASE_CONFIG_FILE).required(false))
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(config::Environment::with_prefix("RELAY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
