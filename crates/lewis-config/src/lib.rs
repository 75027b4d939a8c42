//! # lewis-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEWIS_*` prefix, `__` as separator)
//! 2. Project-level `.lewis/config.toml`
//! 3. User-level `~/.config/lewis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEWIS_API__BASE_URL` -> `api.base_url`,
//! `LEWIS_LISTING__DEBOUNCE_MS` -> `listing.debounce_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lewis_config::LewisConfig;
//!
//! let config = LewisConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod captcha;
mod error;
mod listing;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use captcha::CaptchaConfig;
pub use error::ConfigError;
pub use listing::ListingConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LewisConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub captcha: CaptchaConfig,
}

impl LewisConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or an invalid value.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lewis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LEWIS_").split("__"))
    }

    /// Check values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.listing.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lewis").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LewisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listing.page_size, 20);
        assert!(config.captcha.token.is_empty());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = LewisConfig::from_figment(&LewisConfig::figment())
                .map_err(|error| error.to_string())?;
            assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
            assert_eq!(config.listing.debounce_ms, 300);
            Ok(())
        });
    }
}
