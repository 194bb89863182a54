//! Rounding helpers for exact integer division.
//!
//! [`div_round`] is the single place where an exact quotient is collapsed
//! to an integer. Formatting and price quoting go through it so that the
//! caller's [`Rounding`] choice is honoured the same way everywhere.
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigInt;
//! use pairswap_sdk::domain::Rounding;
//! use pairswap_sdk::math::div_round;
//!
//! let ten = BigInt::from(10);
//! let four = BigInt::from(4);
//! assert_eq!(div_round(&ten, &four, Rounding::Down), Some(BigInt::from(2)));
//! assert_eq!(div_round(&ten, &four, Rounding::HalfUp), Some(BigInt::from(3)));
//! assert_eq!(div_round(&ten, &four, Rounding::Up), Some(BigInt::from(3)));
//! assert_eq!(div_round(&ten, &BigInt::from(0), Rounding::Down), None);
//! ```

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::domain::Rounding;

/// Divides `numerator` by `denominator`, rounding per `rounding`.
///
/// - [`Rounding::Down`]: truncate towards zero.
/// - [`Rounding::HalfUp`]: nearest integer, ties away from zero.
/// - [`Rounding::Up`]: away from zero whenever there is a remainder.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigInt, denominator: &BigInt, rounding: Rounding) -> Option<BigInt> {
    if denominator.is_zero() {
        return None;
    }
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return Some(quotient);
    }

    let bump = match rounding {
        Rounding::Down => false,
        Rounding::Up => true,
        Rounding::HalfUp => remainder.magnitude() * 2u32 >= *denominator.magnitude(),
    };
    if !bump {
        return Some(quotient);
    }

    let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
    Some(if negative { quotient - 1 } else { quotient + 1 })
}
