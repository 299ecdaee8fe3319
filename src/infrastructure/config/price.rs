//! Price feed configuration.

use serde::Deserialize;

use crate::adapter::outbound::price::coingecko::{DEFAULT_API_URL, DEFAULT_COIN_ID};

/// CoinGecko price feed settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PriceConfig {
    /// CoinGecko API base URL.
    pub api_url: String,
    /// CoinGecko coin id of the staked token.
    pub coin_id: String,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            coin_id: DEFAULT_COIN_ID.into(),
        }
    }
}
