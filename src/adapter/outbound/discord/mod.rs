//! Discord REST access shared by the notifier and the interaction handler.

pub mod client;
pub mod types;

pub use client::{DiscordClient, DEFAULT_API_URL};
