//! Outbound adapters (driven side).

pub mod discord;
pub mod notifier;
pub mod price;
