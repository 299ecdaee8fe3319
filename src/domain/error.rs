//! Domain validation errors for stake events.
//!
//! These errors are returned by [`StakeEvent::try_new`](super::stake::StakeEvent::try_new)
//! when an event cannot be rendered into a meaningful alert.
//!
//! # Examples
//!
//! ```
//! use stakewire::domain::error::DomainError;
//! use stakewire::domain::stake::StakeEvent;
//! use alloy_primitives::U256;
//!
//! let result = StakeEvent::try_new("0xabc", U256::from(1u64), "0xdef", f64::NAN);
//! assert!(matches!(result, Err(DomainError::InvalidPrice { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when stake event invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Price must be a finite, non-negative USD amount.
    #[error("price must be finite and non-negative, got {price}")]
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },

    /// Stake value overflowed to a non-finite number.
    #[error("stake value is not finite ({tokens} tokens at ${price})")]
    InvalidValue {
        /// Token amount as displayed.
        tokens: String,
        /// The price used.
        price: f64,
    },

    /// Stake too large to draw as an indicator bar.
    #[error("stake value ${value_usd:.2} needs more than {limit} indicator glyphs")]
    IndicatorOverflow {
        /// USD value of the stake.
        value_usd: f64,
        /// Maximum number of glyphs.
        limit: usize,
    },

    /// Identifiers used for links must be present.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },
}
