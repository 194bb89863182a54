//! Decimal-string input.
//!
//! Amounts arrive as strings and are parsed straight into integers; no
//! binary floating point is involved at any step.

use num_bigint::BigUint;
use num_traits::{pow, Num};

use crate::error::{Result, SdkError};

/// Parses a non-negative integer written in decimal, or in hex with a
/// `0x` prefix.
///
/// # Errors
///
/// Returns [`SdkError::Parse`] on an empty string or any character that
/// is not a digit of the chosen radix.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use pairswap_sdk::math::parse_integer;
///
/// assert_eq!(parse_integer("1000"), Ok(BigUint::from(1_000u32)));
/// assert_eq!(parse_integer("0xff"), Ok(BigUint::from(255u32)));
/// assert!(parse_integer("1e3").is_err());
/// ```
pub fn parse_integer(input: &str) -> Result<BigUint> {
    let (digits, radix) = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (input, 10),
    };
    if digits.is_empty() {
        return Err(SdkError::Parse("empty integer"));
    }
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(SdkError::Parse("invalid digit in integer"));
    }
    BigUint::from_str_radix(digits, radix).map_err(|_| SdkError::Parse("invalid integer"))
}

/// Parses a human-readable decimal such as `"1.25"` into raw units of a
/// token with `decimals` decimal places.
///
/// # Errors
///
/// - [`SdkError::Parse`] on an empty string, a non-digit character, or
///   more than one decimal point.
/// - [`SdkError::InvalidPrecision`] if the fractional part has more digits
///   than `decimals`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use pairswap_sdk::math::parse_units;
///
/// assert_eq!(parse_units("1.5", 6), Ok(BigUint::from(1_500_000u32)));
/// assert!(parse_units("1.2.3", 6).is_err());
/// ```
pub fn parse_units(input: &str, decimals: u8) -> Result<BigUint> {
    let mut parts = input.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return Err(SdkError::Parse("multiple decimal points"));
    }
    if whole.is_empty() && fraction.is_empty() {
        return Err(SdkError::Parse("empty decimal"));
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(SdkError::Parse("invalid digit in decimal"));
    }
    if fraction.len() > usize::from(decimals) {
        return Err(SdkError::InvalidPrecision(
            "more fractional digits than token decimals",
        ));
    }

    let ten = BigUint::from(10u32);
    let whole_value = if whole.is_empty() {
        BigUint::default()
    } else {
        parse_integer(whole)?
    };
    let fraction_value = if fraction.is_empty() {
        BigUint::default()
    } else {
        parse_integer(fraction)?
    };
    let padding = usize::from(decimals) - fraction.len();

    Ok(whole_value * pow(ten.clone(), usize::from(decimals)) + fraction_value * pow(ten, padding))
}
