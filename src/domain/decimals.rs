//! Token decimal places.

use core::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::pow;

use crate::error::Result;
use crate::math::validate_amount_fits;

/// Number of decimal places of a token's smallest unit.
///
/// Decimals are a `uint8` on chain, so any value in `0..=255` is accepted.
/// Construction from a wider integer is validated.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::Decimals;
///
/// let d = Decimals::new(6).expect("fits in uint8");
/// assert_eq!(d.get(), 6);
/// assert!(Decimals::new(256).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the common ERC-20 and native-currency value.
    pub const EIGHTEEN: Self = Self(18);

    /// Creates a `Decimals` value after validating it against `uint8`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::OutOfRange`](crate::error::SdkError::OutOfRange)
    /// if `value` exceeds 255.
    pub fn new(value: u32) -> Result<Self> {
        validate_amount_fits(&BigInt::from(value), 8)?;
        Ok(Self(value as u8))
    }

    /// Wraps a value that is already a `u8`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn scale(&self) -> BigUint {
        pow(BigUint::from(10u32), usize::from(self.0))
    }
}

impl TryFrom<u32> for Decimals {
    type Error = crate::error::SdkError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
