//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the `config`
//! and `dotenvy` crates. Variables carry the `FAMILY` prefix and nested values are
//! separated by double underscores. Every setting has a default, so an empty
//! environment yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use family_registry::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod registry;
mod server;

pub use error::{ConfigError, ValidationError};
pub use registry::RegistryConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration (host, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Family member actor configuration (channel capacity, seeding)
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FAMILY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FAMILY__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `FAMILY__REGISTRY__SEED=false` -> `registry.seed = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("FAMILY").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a zero port, an unparsable bind address or a
    /// zero channel capacity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.registry.validate()?;
        Ok(())
    }
}
