//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml`, then
//! environment variables prefixed with `FLEETDASH` using `__` as the
//! section separator (e.g. `FLEETDASH__ROUTING__API_KEY`).

mod logging;
mod map;
mod server;

use std::collections::HashMap;
use std::path::Path;

pub use integration_routing::RoutingConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use map::MapConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

/// Prefix of environment variables read by [`AppConfig::load`]
pub const ENV_PREFIX: &str = "FLEETDASH";

/// Default configuration file name (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Routing service (Geoapify)
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub map: MapConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the process
    /// environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Some(Path::new(DEFAULT_CONFIG_FILE)), None)
    }

    /// Load configuration from an optional file and an environment source
    ///
    /// When `env` is `None` the process environment is read; tests pass an
    /// explicit map instead.
    pub fn load_from(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("routing.base_url", "https://api.geoapify.com")?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.allowed_origins")
                .try_parsing(true)
                .source(env),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.routing
            .validate()
            .map_err(|e| format!("routing: {e}"))?;
        self.map.validate()?;
        Ok(())
    }
}
