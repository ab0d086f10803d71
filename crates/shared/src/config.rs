//! Money configuration.
//!
//! The library never reads files or the environment itself. The host builds
//! a `config::Config` from whatever sources it uses and hands it over.

use serde::Deserialize;

use crate::types::RoundingMode;

/// Key of the table holding [`MoneyConfig`].
pub const CONFIG_KEY: &str = "money";

/// Money configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MoneyConfig {
    /// Rounding rule used by calculators built from this configuration.
    #[serde(default)]
    pub default_rounding: RoundingMode,
}

impl MoneyConfig {
    /// Reads the `money` table from an assembled configuration.
    ///
    /// A missing table yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the table exists but cannot be deserialized.
    pub fn from_config(config: &config::Config) -> Result<Self, config::ConfigError> {
        match config.get::<Self>(CONFIG_KEY) {
            Ok(money) => Ok(money),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }
}
