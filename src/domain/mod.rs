//! Platform-agnostic domain types.
//!
//! - [`stake`] - The transient [`StakeEvent`] and token amount helpers
//! - [`explorer`] - Block explorer link templates
//! - [`platform`] - Chat platform discriminator
//! - [`error`] - Validation errors

pub mod error;
pub mod explorer;
pub mod platform;
pub mod stake;

pub use error::DomainError;
pub use explorer::Explorer;
pub use platform::Platform;
pub use stake::{
    format_units, StakeEvent, StakeLog, MAX_INDICATOR_COUNT, TOKEN_DECIMALS, USD_PER_GLYPH,
};
