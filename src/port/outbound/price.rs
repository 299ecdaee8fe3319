//! Price feed port.

use async_trait::async_trait;

use crate::error::Result;

/// Source of the staked token's current USD price.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Current price of one whole token in USD.
    async fn usd_price(&self) -> Result<f64>;
}
