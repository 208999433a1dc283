//! CLI configuration

use config::{Config, ConfigError, Environment};
use core_kernel::CoreError;
use serde::Deserialize;

/// Environment variable prefix, e.g. `THEATER_LOG_LEVEL`
pub const ENV_PREFIX: &str = "THEATER";

/// Statement CLI configuration
///
/// Statements always bill the standard tariff in USD cents, so only the
/// ambient settings live here.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementConfig {
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl StatementConfig {
    /// Loads configuration from `THEATER_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from the given environment source, over defaults
    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Checks the values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.log_level.trim().is_empty() {
            return Err(CoreError::configuration("log level must not be empty"));
        }
        Ok(())
    }
}
