//! Notification adapters.
//!
//! Implements the `port::StakeNotifier` trait for each chat platform.

pub mod discord;
pub mod telegram;

pub use discord::DiscordNotifier;
pub use telegram::{TelegramConfig, TelegramNotifier};
