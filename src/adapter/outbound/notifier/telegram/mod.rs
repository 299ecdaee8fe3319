//! Telegram stake alert delivery.

pub mod notifier;

pub use notifier::{parse_recipient, verify_bot, TelegramConfig, TelegramNotifier};
