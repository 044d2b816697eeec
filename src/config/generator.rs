//! Text generator configuration.

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

fn default_model() -> String {
    "gemini-pro".to_owned()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_owned()
}

const fn default_timeout_secs() -> u64 {
    30
}

/// Settings for the external text generator.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// API credential. Empty means unconfigured.
    #[serde(default)]
    pub api_key: String,

    /// Model name passed to the generation endpoint.
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint base URL, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Deadline for one generation call in seconds; `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeneratorConfig {
    /// Returns `true` when an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Fails when no API key is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for the `generator` section.
    pub fn ensure_configured(&self) -> Result<(), ConfigError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "generator",
            })
        }
    }

    /// Returns the per-call deadline, or `None` when disabled.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &redacted(&self.api_key))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

pub(super) const fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}
