//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all non-secret
//! settings. Every section is optional; an absent file yields the defaults.
//! Secrets come from the environment, see [`Credentials`](super::Credentials).
//!
//! # Example
//!
//! ```no_run
//! use stakewire::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::discord::DiscordAppConfig;
use super::logging::LoggingConfig;
use super::price::PriceConfig;
use super::telegram::TelegramAppConfig;
use crate::application::format::{Branding, Formatter};
use crate::domain::explorer::DEFAULT_EXPLORER_URL;
use crate::domain::Explorer;
use crate::error::{ConfigError, Result};

/// Largest accepted reconnect backoff multiplier.
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;

/// Block explorer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Explorer root; links are `{base_url}/address/..` and `{base_url}/tx/..`.
    pub base_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXPLORER_URL.into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Message text, image and colors.
    #[serde(default)]
    pub branding: Branding,

    #[serde(default)]
    pub explorer: ExplorerConfig,

    #[serde(default)]
    pub telegram: TelegramAppConfig,

    #[serde(default)]
    pub discord: DiscordAppConfig,

    #[serde(default)]
    pub price: PriceConfig,
}

impl Config {
    /// Parse configuration from TOML content and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed or
    /// validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if it exists, otherwise use the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if !LoggingConfig::FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {:?}", LoggingConfig::FORMATS),
            }
            .into());
        }

        validate_url("explorer.base_url", &self.explorer.base_url)?;
        validate_url("branding.image_url", &self.branding.image_url)?;
        validate_url("branding.cta_url", &self.branding.cta_url)?;
        validate_url("discord.api_url", &self.discord.api_url)?;
        validate_url("discord.gateway_url", &self.discord.gateway_url)?;
        validate_url("price.api_url", &self.price.api_url)?;
        if let Some(api_url) = &self.telegram.api_url {
            validate_url("telegram.api_url", api_url)?;
        }

        if self.branding.glyph.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "branding.glyph",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.price.coin_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "price.coin_id",
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let reconnection = &self.discord.reconnection;
        if reconnection.initial_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "initial_delay_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if reconnection.max_delay_ms < reconnection.initial_delay_ms {
            return Err(ConfigError::InvalidValue {
                field: "max_delay_ms",
                reason: "must be >= initial_delay_ms".to_string(),
            }
            .into());
        }
        if !(1.0..=MAX_BACKOFF_MULTIPLIER).contains(&reconnection.backoff_multiplier) {
            return Err(ConfigError::InvalidValue {
                field: "backoff_multiplier",
                reason: format!("must be between 1.0 and {MAX_BACKOFF_MULTIPLIER}"),
            }
            .into());
        }
        Ok(())
    }

    /// Parsed Telegram Bot API override, if any.
    #[must_use]
    pub fn telegram_api_url(&self) -> Option<Url> {
        self.telegram
            .api_url
            .as_deref()
            .and_then(|url| Url::parse(url).ok())
    }

    /// Formatter for the configured branding and explorer.
    #[must_use]
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.branding.clone(),
            Explorer::new(self.explorer.base_url.clone()),
        )
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must not be empty".to_string(),
        }
        .into());
    }
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}
