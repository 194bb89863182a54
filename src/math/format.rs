//! Exact rational to decimal-string conversion.
//!
//! Both functions take a numerator/denominator pair and apply a single
//! [`Rounding`] at the final digit. Nothing here goes through floating
//! point.

use num_bigint::{BigInt, Sign};
use num_traits::{pow, Signed, Zero};

use super::div_round;
use crate::domain::Rounding;
use crate::error::{Result, SdkError};

/// Largest accepted count of decimal places or significant digits.
pub const MAX_DISPLAY_PRECISION: u32 = 1_024;

fn ten_pow(exp: u32) -> BigInt {
    pow(BigInt::from(10u32), exp as usize)
}

/// Renders `scaled / 10^scale` with exactly `scale` fractional digits.
fn render(scaled: &BigInt, scale: u32) -> String {
    let digits = scaled.magnitude().to_str_radix(10);
    let sign = if scaled.sign() == Sign::Minus { "-" } else { "" };
    if scale == 0 {
        return format!("{sign}{digits}");
    }
    let scale = scale as usize;
    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - scale);
    format!("{sign}{whole}.{fraction}")
}

/// Floor of `log10(|n / d|)` for a non-zero ratio.
fn decimal_exponent(n: &BigInt, d: &BigInt) -> i64 {
    let n = n.abs();
    let d = d.abs();
    let n_len = n.to_str_radix(10).len() as i64;
    let d_len = d.to_str_radix(10).len() as i64;
    let estimate = n_len - d_len;
    let below = if estimate >= 0 {
        n < d * ten_pow(estimate.unsigned_abs() as u32)
    } else {
        n * ten_pow(estimate.unsigned_abs() as u32) < d
    };
    if below {
        estimate - 1
    } else {
        estimate
    }
}

/// Formats `numerator / denominator` with exactly `decimal_places`
/// fractional digits.
///
/// # Errors
///
/// - [`SdkError::InvalidPrecision`] if `decimal_places` exceeds
///   [`MAX_DISPLAY_PRECISION`].
/// - [`SdkError::DivisionByZero`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use pairswap_sdk::domain::Rounding;
/// use pairswap_sdk::math::to_fixed;
///
/// let n = BigInt::from(1);
/// let d = BigInt::from(3);
/// assert_eq!(to_fixed(&n, &d, 4, Rounding::Down).as_deref(), Ok("0.3333"));
/// assert_eq!(to_fixed(&n, &d, 0, Rounding::Up).as_deref(), Ok("1"));
/// ```
pub fn to_fixed(
    numerator: &BigInt,
    denominator: &BigInt,
    decimal_places: u32,
    rounding: Rounding,
) -> Result<String> {
    if decimal_places > MAX_DISPLAY_PRECISION {
        return Err(SdkError::InvalidPrecision("too many decimal places"));
    }
    let scaled = div_round(
        &(numerator * ten_pow(decimal_places)),
        denominator,
        rounding,
    )
    .ok_or(SdkError::DivisionByZero)?;
    Ok(render(&scaled, decimal_places))
}

/// Formats `numerator / denominator` to `significant_digits` significant
/// digits, dropping trailing fractional zeros.
///
/// # Errors
///
/// - [`SdkError::InvalidPrecision`] if `significant_digits` is zero or
///   exceeds [`MAX_DISPLAY_PRECISION`].
/// - [`SdkError::DivisionByZero`] if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use pairswap_sdk::domain::Rounding;
/// use pairswap_sdk::math::to_significant;
///
/// let n = BigInt::from(12_345);
/// let d = BigInt::from(100);
/// assert_eq!(to_significant(&n, &d, 3, Rounding::Down).as_deref(), Ok("123"));
/// assert_eq!(to_significant(&n, &d, 4, Rounding::HalfUp).as_deref(), Ok("123.5"));
/// ```
pub fn to_significant(
    numerator: &BigInt,
    denominator: &BigInt,
    significant_digits: u32,
    rounding: Rounding,
) -> Result<String> {
    if significant_digits == 0 {
        return Err(SdkError::InvalidPrecision(
            "significant digits must be positive",
        ));
    }
    if significant_digits > MAX_DISPLAY_PRECISION {
        return Err(SdkError::InvalidPrecision("too many significant digits"));
    }
    if denominator.is_zero() {
        return Err(SdkError::DivisionByZero);
    }
    if numerator.is_zero() {
        return Ok("0".to_owned());
    }

    let shift = i64::from(significant_digits) - 1 - decimal_exponent(numerator, denominator);
    let magnitude = shift.unsigned_abs() as u32;
    let rounded = if shift >= 0 {
        div_round(&(numerator * ten_pow(magnitude)), denominator, rounding)
    } else {
        div_round(numerator, &(denominator * ten_pow(magnitude)), rounding)
    }
    .ok_or(SdkError::DivisionByZero)?;

    if shift <= 0 {
        let mut text = rounded.to_str_radix(10);
        text.push_str(&"0".repeat(magnitude as usize));
        return Ok(text);
    }

    let text = render(&rounded, magnitude);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    Ok(trimmed.to_owned())
}
