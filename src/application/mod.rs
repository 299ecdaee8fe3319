//! Application services (use cases).
//!
//! - [`format`] - Pure alert rendering
//! - [`context`] - Shared context used by every trigger
//! - [`relay`] - On-chain log to alert relay

pub mod context;
pub mod format;
pub mod relay;
