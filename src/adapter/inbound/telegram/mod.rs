//! Telegram trigger: bot commands that produce sample alerts.

pub mod command;
pub mod listener;

pub use command::{parse_command, TelegramCommand};
