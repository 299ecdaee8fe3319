//! Inbound adapters (driving side): chat command triggers.

pub mod discord;
pub mod telegram;
