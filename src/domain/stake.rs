//! Stake event types.
//!
//! A [`StakeEvent`] is built the moment a trigger fires (a chat test command
//! or an on-chain observation paired with a price) and is dropped once the
//! alert has been sent. It has no identity and is never stored.

use alloy_primitives::U256;

use super::error::DomainError;

/// Decimals of the staked token (`amount` is expressed in 10^-18 units).
pub const TOKEN_DECIMALS: u8 = 18;

/// USD value represented by one glyph of the indicator bar.
pub const USD_PER_GLYPH: f64 = 50.0;

/// Largest indicator bar an event may carry ($50M at one glyph per $50).
pub const MAX_INDICATOR_COUNT: usize = 1_000_000;

const SAMPLE_STAKER: &str = "0x1234567890abcdef1234567890abcdef12345678";
const SAMPLE_TX_HASH: &str =
    "0xabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdefabcdef";
const SAMPLE_AMOUNT: u128 = 852_397_900_000_000_000_000;
const SAMPLE_PRICE_USD: f64 = 0.240498;

/// A raw stake observation as an event source would report it.
///
/// Carries no price; the relay pairs it with a price feed lookup to build a
/// [`StakeEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeLog {
    /// Address that staked.
    pub staker: String,
    /// Amount in the token's smallest unit.
    pub amount: U256,
    /// Hash of the transaction that emitted the event.
    pub tx_hash: String,
}

/// A stake ready to be rendered into an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct StakeEvent {
    staker: String,
    amount: U256,
    tx_hash: String,
    price_usd: f64,
}

impl StakeEvent {
    /// Create a stake event with invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `staker` and `tx_hash` must not be empty
    /// - `price_usd` must be finite and `>= 0`
    /// - the derived USD value must be finite
    /// - the indicator bar must not exceed [`MAX_INDICATOR_COUNT`] glyphs
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        staker: impl Into<String>,
        amount: U256,
        tx_hash: impl Into<String>,
        price_usd: f64,
    ) -> Result<Self, DomainError> {
        let staker = staker.into();
        let tx_hash = tx_hash.into();

        if staker.is_empty() {
            return Err(DomainError::EmptyField { field: "staker" });
        }
        if tx_hash.is_empty() {
            return Err(DomainError::EmptyField { field: "tx_hash" });
        }
        if !price_usd.is_finite() || price_usd < 0.0 {
            return Err(DomainError::InvalidPrice { price: price_usd });
        }

        let event = Self {
            staker,
            amount,
            tx_hash,
            price_usd,
        };
        if !event.value_usd().is_finite() {
            return Err(DomainError::InvalidValue {
                tokens: event.tokens(),
                price: price_usd,
            });
        }
        if event.indicator_glyphs() > MAX_INDICATOR_COUNT as f64 {
            return Err(DomainError::IndicatorOverflow {
                value_usd: event.value_usd(),
                limit: MAX_INDICATOR_COUNT,
            });
        }

        Ok(event)
    }

    /// Build an event from a raw log and a looked-up price.
    ///
    /// # Errors
    ///
    /// Same as [`StakeEvent::try_new`].
    pub fn from_log(log: StakeLog, price_usd: f64) -> Result<Self, DomainError> {
        Self::try_new(log.staker, log.amount, log.tx_hash, price_usd)
    }

    /// The fixed event used by the chat test commands.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            staker: SAMPLE_STAKER.to_string(),
            amount: U256::from(SAMPLE_AMOUNT),
            tx_hash: SAMPLE_TX_HASH.to_string(),
            price_usd: SAMPLE_PRICE_USD,
        }
    }

    #[must_use]
    pub fn staker(&self) -> &str {
        &self.staker
    }

    #[must_use]
    pub const fn amount(&self) -> U256 {
        self.amount
    }

    #[must_use]
    pub fn tx_hash(&self) -> &str {
        &self.tx_hash
    }

    #[must_use]
    pub const fn price_usd(&self) -> f64 {
        self.price_usd
    }

    /// Token amount as a minimal decimal string (`852.3979`, `1.0`).
    #[must_use]
    pub fn tokens(&self) -> String {
        format_units(self.amount, TOKEN_DECIMALS)
    }

    /// Token amount as a float, used for USD math only.
    #[must_use]
    pub fn tokens_f64(&self) -> f64 {
        // format_units always yields a valid decimal literal
        self.tokens().parse().unwrap_or_default()
    }

    /// USD value of the stake.
    #[must_use]
    pub fn value_usd(&self) -> f64 {
        self.tokens_f64() * self.price_usd
    }

    /// Number of indicator glyphs: one per $50, rounded half away from zero.
    ///
    /// Never more than [`MAX_INDICATOR_COUNT`].
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        // bounded by try_new; the clamp keeps the cast exact
        self.indicator_glyphs().clamp(0.0, MAX_INDICATOR_COUNT as f64) as usize
    }

    fn indicator_glyphs(&self) -> f64 {
        (self.value_usd() / USD_PER_GLYPH).round()
    }
}

/// Format a smallest-unit amount as a decimal string with trailing zeros
/// trimmed, keeping at least one fractional digit.
#[must_use]
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{amount}.0");
    }

    let base = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / base;
    let digits = (amount % base).to_string();

    let mut fraction = "0".repeat(usize::from(decimals) - digits.len());
    fraction.push_str(&digits);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{whole}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ether(whole: u64) -> U256 {
        U256::from(whole) * U256::from(10u64).pow(U256::from(18u8))
    }

    #[test]
    fn test_format_units_trims_trailing_zeros() {
        assert_eq!(format_units(U256::from(SAMPLE_AMOUNT), 18), "852.3979");
        assert_eq!(format_units(ether(1), 18), "1.0");
        assert_eq!(format_units(U256::ZERO, 18), "0.0");
        assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
    }

    #[test]
    fn test_format_units_zero_decimals() {
        assert_eq!(format_units(U256::from(42u64), 0), "42.0");
    }

    #[test]
    fn test_format_units_max_value() {
        let formatted = format_units(U256::MAX, 18);
        assert!(formatted.starts_with("115792089237316195423570985008687907853269984665640564039457"));
        assert!(formatted.contains('.'));
    }

    #[test]
    fn test_try_new_rejects_bad_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.01] {
            let result = StakeEvent::try_new("0xabc", ether(1), "0xdef", price);
            assert!(
                matches!(result, Err(DomainError::InvalidPrice { .. })),
                "price {price} should be rejected"
            );
        }
    }

    #[test]
    fn test_try_new_rejects_empty_identifiers() {
        assert_eq!(
            StakeEvent::try_new("", ether(1), "0xdef", 1.0),
            Err(DomainError::EmptyField { field: "staker" })
        );
        assert_eq!(
            StakeEvent::try_new("0xabc", ether(1), "", 1.0),
            Err(DomainError::EmptyField { field: "tx_hash" })
        );
    }

    #[test]
    fn test_try_new_rejects_overflowing_value() {
        let result = StakeEvent::try_new("0xabc", U256::MAX, "0xdef", f64::MAX);
        assert!(matches!(result, Err(DomainError::InvalidValue { .. })));
    }

    #[test]
    fn test_try_new_rejects_oversized_bar() {
        let result = StakeEvent::try_new("0xabc", U256::MAX, "0xdef", 1.0);
        assert!(matches!(
            result,
            Err(DomainError::IndicatorOverflow {
                limit: MAX_INDICATOR_COUNT,
                ..
            })
        ));

        // exactly at the limit is still accepted
        let at_limit = ether(50) * U256::from(MAX_INDICATOR_COUNT as u64);
        let event = StakeEvent::try_new("0xabc", at_limit, "0xdef", 1.0).unwrap();
        assert_eq!(event.indicator_count(), MAX_INDICATOR_COUNT);

        let over = at_limit + ether(50);
        assert!(StakeEvent::try_new("0xabc", over, "0xdef", 1.0).is_err());
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let event = StakeEvent::try_new("0xabc", ether(10), "0xdef", 0.0).unwrap();
        assert_eq!(event.value_usd(), 0.0);
        assert_eq!(event.indicator_count(), 0);
    }

    #[test]
    fn test_sample_values() {
        let event = StakeEvent::sample();
        assert_eq!(event.tokens(), "852.3979");
        assert!((event.value_usd() - 852.3979 * 0.240498).abs() < 1e-9);
        assert_eq!(event.indicator_count(), 4);
    }

    #[test]
    fn test_indicator_count_rounds_half_up() {
        // $75 -> 1.5 glyphs -> 2
        let event = StakeEvent::try_new("0xabc", ether(75), "0xdef", 1.0).unwrap();
        assert_eq!(event.indicator_count(), 2);
        // $74 -> 1.48 glyphs -> 1
        let event = StakeEvent::try_new("0xabc", ether(74), "0xdef", 1.0).unwrap();
        assert_eq!(event.indicator_count(), 1);
    }

    #[test]
    fn test_from_log() {
        let log = StakeLog {
            staker: "0xabc".into(),
            amount: ether(100),
            tx_hash: "0xdef".into(),
        };
        let event = StakeEvent::from_log(log, 2.0).unwrap();
        assert_eq!(event.value_usd(), 200.0);
        assert_eq!(event.indicator_count(), 4);
    }
}
