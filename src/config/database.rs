//! Database configuration.

use super::ConfigError;
use serde::{Deserialize, Serialize};

const fn default_max_connections() -> u32 {
    10
}

/// Settings for the `PostgreSQL` connection pool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection URL.
    #[serde(default)]
    pub url: String,

    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// Fails when no connection URL is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for the `database` section.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            Err(ConfigError::NotConfigured {
                section: "database",
            })
        } else {
            Ok(())
        }
    }
}
