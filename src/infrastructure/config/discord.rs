//! Discord transport configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::inbound::discord::gateway::{Backoff, DEFAULT_GATEWAY_URL};
use crate::adapter::outbound::discord::DEFAULT_API_URL;

/// Non-secret Discord settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscordAppConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Gateway websocket URL.
    pub gateway_url: String,
    /// Gateway reconnection settings.
    pub reconnection: ReconnectionConfig,
}

impl Default for DiscordAppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            gateway_url: DEFAULT_GATEWAY_URL.into(),
            reconnection: ReconnectionConfig::default(),
        }
    }
}

/// Gateway reconnection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconnectionConfig {
    /// Initial delay before first reconnection attempt (milliseconds).
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
    /// Maximum delay between reconnection attempts (milliseconds).
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    /// Multiplier applied to delay after each failed attempt.
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

fn default_initial_delay_ms() -> u64 {
    1000 // 1 second
}

fn default_max_delay_ms() -> u64 {
    60000 // 60 seconds
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

impl ReconnectionConfig {
    #[must_use]
    pub fn backoff(&self) -> Backoff {
        Backoff::new(
            Duration::from_millis(self.initial_delay_ms),
            Duration::from_millis(self.max_delay_ms),
            self.backoff_multiplier,
        )
    }
}

impl Default for ReconnectionConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}
