//! Money helpers
//!
//! Price parsing and 2-decimal rendering. Rounding is midpoint away from
//! zero, so 0.005 renders as 0.01.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::entity::{DomainError, DomainResult};

/// Parse a user-entered price. Accepts plain decimal notation only.
pub fn parse_price(raw: &str) -> DomainResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidPrice(raw.to_string()));
    }
    let price = Decimal::from_str(trimmed).map_err(|_| DomainError::InvalidPrice(raw.to_string()))?;
    validate_price(price)?;
    Ok(price)
}

/// Largest accepted price. Keeps every sum of shares far inside `Decimal`'s range.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000_000u64 as u32, (1_000_000_000_000u64 >> 32) as u32, 0, false, 0);

/// Reject negative prices and prices above `MAX_PRICE`
pub fn validate_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::InvalidPrice(price.to_string()));
    }
    if price > MAX_PRICE {
        return Err(DomainError::InvalidPrice(price.to_string()));
    }
    Ok(())
}

/// `price / sharers`, or zero when nobody shares it
pub fn per_head(price: Decimal, sharers: usize) -> Decimal {
    if sharers == 0 {
        return Decimal::ZERO;
    }
    price / Decimal::from(sharers as u64)
}

/// Render with exactly two fractional digits, e.g. `25.00`
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Render prefixed with a currency symbol, e.g. `$25.00`
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, format_amount(amount))
}
