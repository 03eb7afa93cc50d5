//! Exact integer-to-decimal conversion for on-chain amounts.
//!
//! Token amounts are stored on-chain as integers in the smallest indivisible
//! unit. Scaling them with `f64` loses precision well before the 18-decimal
//! amounts common on Ethereum, so conversion stays in 256-bit integer
//! arithmetic: the amount is split into quotient and remainder by `10^decimals`
//! and rendered positionally.

use alloy_primitives::U256;
use thiserror::Error;

/// Largest precision whose divisor `10^decimals` fits in 256 bits.
pub const MAX_DECIMALS: u32 = 77;

/// The decimal precision cannot be applied to a 256-bit amount.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid decimals: {decimals} (maximum is {MAX_DECIMALS})")]
pub struct InvalidDecimals {
    pub decimals: u32,
}

/// Renders `raw / 10^decimals` as a base-10 string.
///
/// The result is exact: no rounding, no exponent notation, trailing
/// fractional zeros trimmed and no decimal point for whole values.
///
/// # Examples
///
/// ```
/// use tokenset_decomposer::{to_decimal, U256};
///
/// let raw = U256::from(1_500_000_000_000_000_000u64);
/// assert_eq!(to_decimal(raw, 18).unwrap(), "1.5");
/// assert_eq!(to_decimal(U256::from(1u64), 18).unwrap(), "0.000000000000000001");
/// ```
pub fn to_decimal(raw: U256, decimals: u32) -> Result<String, InvalidDecimals> {
    let divisor = U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(InvalidDecimals { decimals })?;

    let whole = raw / divisor;
    let fraction = raw % divisor;
    if fraction.is_zero() {
        return Ok(whole.to_string());
    }

    let width = decimals as usize;
    let digits = format!("{:0>width$}", fraction.to_string(), width = width);
    Ok(format!("{}.{}", whole, digits.trim_end_matches('0')))
}
