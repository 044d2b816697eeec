//! Identity layer configuration.
//!
//! Token issuance and verification live in front of the task services; the
//! settings are carried here so one configuration file serves the whole
//! deployment.

use super::generator::redacted;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const fn default_token_ttl_secs() -> u64 {
    7 * 24 * 60 * 60
}

/// Settings for bearer token handling.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Signing secret for issued tokens.
    #[serde(default)]
    pub token_secret: String,

    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_secs: default_token_ttl_secs(),
        }
    }
}

impl AuthConfig {
    /// Returns `true` when a signing secret is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token_secret.is_empty()
    }

    /// Returns the token lifetime.
    #[must_use]
    pub const fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &redacted(&self.token_secret))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}
