//! Price feed adapters.

pub mod coingecko;

pub use coingecko::CoinGeckoPriceFeed;
