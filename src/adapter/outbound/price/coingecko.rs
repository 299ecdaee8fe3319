//! CoinGecko simple-price feed.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::port::outbound::price::PriceFeed;

/// Default CoinGecko API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default CoinGecko coin id for the ZK token.
pub const DEFAULT_COIN_ID: &str = "zksync";

/// Looks up a coin's USD price on CoinGecko.
#[derive(Debug, Clone)]
pub struct CoinGeckoPriceFeed {
    client: reqwest::Client,
    api_url: String,
    coin_id: String,
}

impl CoinGeckoPriceFeed {
    pub fn new(api_url: impl Into<String>, coin_id: impl Into<String>) -> Self {
        let mut api_url = api_url.into();
        while api_url.ends_with('/') {
            api_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            api_url,
            coin_id: coin_id.into(),
        }
    }
}

impl Default for CoinGeckoPriceFeed {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_COIN_ID)
    }
}

#[async_trait]
impl PriceFeed for CoinGeckoPriceFeed {
    async fn usd_price(&self) -> Result<f64> {
        let url = format!("{}/simple/price", self.api_url);
        let response = self
            .client
            .get(&url)
            .query(&[("ids", self.coin_id.as_str()), ("vs_currencies", "usd")])
            .send()
            .await?
            .error_for_status()?;

        let json: serde_json::Value = response.json().await?;
        let price = extract_usd_price(&json, &self.coin_id)?;
        debug!(coin = %self.coin_id, price, "Fetched token price");
        Ok(price)
    }
}

/// Pull `{coin_id}.usd` out of a simple-price response.
///
/// # Errors
///
/// Returns `Error::Parse` when the coin or its USD price is missing.
pub fn extract_usd_price(json: &serde_json::Value, coin_id: &str) -> Result<f64> {
    json.get(coin_id)
        .and_then(|coin| coin.get("usd"))
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| Error::Parse(format!("no USD price for `{coin_id}` in {json}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_usd_price() {
        let body = json!({"zksync": {"usd": 0.240498}});
        assert_eq!(extract_usd_price(&body, "zksync").unwrap(), 0.240498);
    }

    #[test]
    fn test_extract_usd_price_missing_coin() {
        let body = json!({});
        assert!(matches!(
            extract_usd_price(&body, "zksync"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_extract_usd_price_non_numeric() {
        let body = json!({"zksync": {"usd": "n/a"}});
        assert!(extract_usd_price(&body, "zksync").is_err());
    }
}
