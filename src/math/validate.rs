//! Bit-width validation for on-chain integer types.
//!
//! Token decimals are `uint8` and every reserve or amount is `uint256` on
//! chain, so values crossing into the SDK are checked against those widths
//! before they are stored.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use once_cell::sync::Lazy;

use crate::error::{Result, SdkError};

static UINT8_MAX: Lazy<BigUint> = Lazy::new(|| max_for_bits(8));
static UINT256_MAX: Lazy<BigUint> = Lazy::new(|| max_for_bits(256));

fn max_for_bits(bits: u32) -> BigUint {
    (BigUint::one() << bits) - BigUint::one()
}

/// Solidity integer types the SDK validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidityType {
    /// `uint8`, used for token decimals.
    Uint8,
    /// `uint256`, used for reserves and amounts.
    Uint256,
}

impl SolidityType {
    /// Bit width of the type.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Uint8 => 8,
            Self::Uint256 => 256,
        }
    }

    /// Largest representable value, `2^bits - 1`.
    #[must_use]
    pub fn maximum(&self) -> &'static BigUint {
        match self {
            Self::Uint8 => Lazy::force(&UINT8_MAX),
            Self::Uint256 => Lazy::force(&UINT256_MAX),
        }
    }
}

/// Checks that `value` lies in `0..=2^bit_width - 1`.
///
/// # Errors
///
/// Returns [`SdkError::OutOfRange`] if `value` is negative or too large.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use pairswap_sdk::math::validate_amount_fits;
///
/// assert!(validate_amount_fits(&BigInt::from(255), 8).is_ok());
/// assert!(validate_amount_fits(&BigInt::from(256), 8).is_err());
/// assert!(validate_amount_fits(&BigInt::from(-1), 8).is_err());
/// ```
pub fn validate_amount_fits(value: &BigInt, bit_width: u32) -> Result<()> {
    let out_of_range = SdkError::OutOfRange { bits: bit_width };
    if value.sign() == Sign::Minus {
        return Err(out_of_range);
    }
    if value.magnitude().bits() > u64::from(bit_width) {
        return Err(out_of_range);
    }
    Ok(())
}

/// Checks an unsigned value against a [`SolidityType`].
///
/// # Errors
///
/// Returns [`SdkError::OutOfRange`] if `value` exceeds the type maximum.
pub fn validate_solidity_type_instance(value: &BigUint, solidity_type: SolidityType) -> Result<()> {
    if value > solidity_type.maximum() {
        return Err(SdkError::OutOfRange {
            bits: solidity_type.bits(),
        });
    }
    Ok(())
}
