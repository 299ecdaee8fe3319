//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   trigger ──► application ──► StakeNotifier ──► Telegram / Discord adapters
//!                    │
//!                    └────────► PriceFeed ──────► CoinGecko adapter
//! ```

pub mod outbound;

pub use outbound::notifier::{
    Delivery, DispatchError, DispatchResult, NotifierRegistry, StakeNotifier,
};
pub use outbound::price::PriceFeed;
