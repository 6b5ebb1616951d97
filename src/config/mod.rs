//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PITCHCRAFT` prefix
//! with `__` (double underscore) separating nested values.
//!
//! # Example
//!
//! ```no_run
//! use pitchcraft::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod access;
mod error;
mod quota;
mod server;

pub use access::AccessConfig;
pub use error::{ConfigError, ValidationError};
pub use quota::QuotaConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation quota configuration
    #[serde(default)]
    pub quota: QuotaConfig,

    /// Access control configuration (bootstrap admins)
    #[serde(default)]
    pub access: AccessConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads variables
    /// with the `PITCHCRAFT` prefix:
    ///
    /// - `PITCHCRAFT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PITCHCRAFT__QUOTA__FREE_GENERATION_ALLOWANCE=10`
    /// - `PITCHCRAFT__ACCESS__ADMINS=alice,bob`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PITCHCRAFT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.access.validate()?;
        Ok(())
    }
}
