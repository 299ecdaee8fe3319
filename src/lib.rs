//! Stakewire - staking alerts for Telegram and Discord.
//!
//! Turns a stake (staker, amount, transaction, token price) into a branded
//! alert and posts it to a Telegram group and a Discord channel. Both bots
//! also answer a test command that posts a fixed sample stake.
//!
//! # Modules
//!
//! - [`domain`] - Stake events, amounts, explorer links
//! - [`application`] - Message formatting, shared context, stake relay
//! - [`port`] - Notifier and price feed traits
//! - [`adapter`] - Telegram and Discord transports, CoinGecko price feed
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`cli`] - Command-line entry points
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use stakewire::application::format::Formatter;
//! use stakewire::domain::StakeEvent;
//!
//! let formatter = Formatter::default();
//! let message = formatter.telegram(&StakeEvent::sample());
//! assert!(message.caption.contains("$205.00"));
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
