//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value could not be extracted.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A section required by a component is missing mandatory values.
    #[error("configuration section '{section}' is not configured")]
    NotConfigured {
        /// Section name, as used in the TOML file.
        section: &'static str,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
