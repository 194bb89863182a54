//! Constant-product swap math on raw reserves.
//!
//! The invariant is `x × y = k`. The fee is taken from the input before the
//! invariant is applied, so the pool keeps it and `k` never decreases.
//!
//! # Exact input (A → B)
//!
//! 1. `in_with_fee = amount_in × 997`
//! 2. `amount_out = in_with_fee × reserve_out / (reserve_in × 1000 + in_with_fee)`,
//!    floored
//!
//! # Exact output (A → B)
//!
//! `amount_in = reserve_in × amount_out × 1000 / ((reserve_out − amount_out) × 997) + 1`
//!
//! The trailing `+ 1` matches the on-chain router and is never below the
//! exact ceiling.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

use crate::error::{Result, SdkError};

/// Fee-adjusted share of the input that reaches the invariant (99.7%).
pub const FEE_NUMERATOR: u32 = 997;

/// Denominator of [`FEE_NUMERATOR`].
pub const FEE_DENOMINATOR: u32 = 1_000;

/// LP units locked forever by the first deposit.
pub const MINIMUM_LIQUIDITY: u32 = 1_000;

fn ensure_reserves(reserve_in: &BigUint, reserve_out: &BigUint) -> Result<()> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SdkError::InsufficientLiquidity);
    }
    Ok(())
}

/// Maximum output for an exact `amount_in`, rounded down.
///
/// # Errors
///
/// - [`SdkError::InvalidAmount`] if `amount_in` is zero or too small to
///   buy a single unit.
/// - [`SdkError::InsufficientLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use pairswap_sdk::pools::get_amount_out;
///
/// let out = get_amount_out(
///     &BigUint::from(1_000u32),
///     &BigUint::from(100_000u32),
///     &BigUint::from(100_000u32),
/// );
/// assert_eq!(out, Ok(BigUint::from(987u32)));
/// ```
pub fn get_amount_out(
    amount_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
) -> Result<BigUint> {
    if amount_in.is_zero() {
        return Err(SdkError::InvalidAmount("input amount must be positive"));
    }
    ensure_reserves(reserve_in, reserve_out)?;

    let in_with_fee = amount_in * FEE_NUMERATOR;
    let numerator = &in_with_fee * reserve_out;
    let denominator = reserve_in * FEE_DENOMINATOR + &in_with_fee;
    let amount_out = numerator / denominator;

    trace!(%amount_in, %reserve_in, %reserve_out, %amount_out, "exact-in quote");

    if amount_out.is_zero() {
        return Err(SdkError::InvalidAmount(
            "input amount too small to produce output",
        ));
    }
    Ok(amount_out)
}

/// Input required to receive an exact `amount_out`.
///
/// # Errors
///
/// - [`SdkError::InvalidAmount`] if `amount_out` is zero.
/// - [`SdkError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` is not below `reserve_out`.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use pairswap_sdk::pools::get_amount_in;
///
/// let amount_in = get_amount_in(
///     &BigUint::from(987u32),
///     &BigUint::from(100_000u32),
///     &BigUint::from(100_000u32),
/// );
/// assert_eq!(amount_in, Ok(BigUint::from(1_000u32)));
/// ```
pub fn get_amount_in(
    amount_out: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
) -> Result<BigUint> {
    if amount_out.is_zero() {
        return Err(SdkError::InvalidAmount("output amount must be positive"));
    }
    ensure_reserves(reserve_in, reserve_out)?;
    if amount_out >= reserve_out {
        return Err(SdkError::InsufficientLiquidity);
    }

    let numerator = reserve_in * amount_out * FEE_DENOMINATOR;
    let denominator = (reserve_out - amount_out) * FEE_NUMERATOR;
    let amount_in = numerator / denominator + 1u32;

    trace!(%amount_out, %reserve_in, %reserve_out, %amount_in, "exact-out quote");
    Ok(amount_in)
}
