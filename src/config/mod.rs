//! Layered configuration for the task service.
//!
//! Sources, highest priority first:
//!
//! 1. Environment variables with the `TASKWISE_` prefix, `__` separating
//!    sections (`TASKWISE_GENERATOR__API_KEY` maps to `generator.api_key`).
//! 2. A TOML file, `taskwise.toml` in the working directory by default.
//! 3. Built-in defaults.
//!
//! Each component receives only its own section at construction time:
//! [`GeneratorConfig`] for the text generator, [`DatabaseConfig`] for the
//! `PostgreSQL` pool, and [`AuthConfig`] for the identity layer in front of
//! the services.
//!
//! ```
//! use taskwise::config::AppConfig;
//!
//! let config = AppConfig::default();
//! assert_eq!(config.generator.model, "gemini-pro");
//! assert!(!config.generator.is_configured());
//! ```

mod auth;
mod database;
mod error;
mod generator;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use generator::GeneratorConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TASKWISE_";

/// Default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "taskwise.toml";

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Text generator settings.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Identity layer settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads configuration from defaults, [`DEFAULT_CONFIG_FILE`], and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration using `path` as the TOML layer. A missing file is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::figment(path).extract()?)
    }

    /// Builds the provider chain without extracting it.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
