//! Exact rational numbers.

use core::fmt;
use core::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::{Decimals, Rounding};
use crate::error::{Result, SdkError};
use crate::math::{to_fixed, to_significant};

/// An exact rational number.
///
/// Always held in lowest terms with a positive denominator, so derived
/// equality, ordering and hashing are exact: `2/4 == 1/2`.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{Fraction, Rounding};
///
/// let third = Fraction::new(1, 3).expect("non-zero denominator");
/// let sum = third.clone() + third;
/// assert_eq!(sum, Fraction::new(2, 3).expect("non-zero denominator"));
/// assert_eq!(sum.to_significant(3, Rounding::HalfUp).as_deref(), Ok("0.667"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fraction(BigRational);

impl Fraction {
    /// Creates `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self(BigRational::new(numerator.into(), denominator)))
    }

    /// Creates the fraction `value / 1`.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Creates `numerator / 10^decimals`, the whole-unit value of a raw
    /// amount.
    #[must_use]
    pub fn from_scaled(numerator: impl Into<BigInt>, decimals: Decimals) -> Self {
        Self(BigRational::new(
            numerator.into(),
            BigInt::from(decimals.scale()),
        ))
    }

    /// Numerator in lowest terms.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator in lowest terms; always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    /// Integer part, truncated towards zero.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        self.0.to_integer()
    }

    /// What is left after removing [`quotient`](Self::quotient).
    #[must_use]
    pub fn remainder(&self) -> Self {
        Self(self.0.fract())
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::DivisionByZero`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Returns `self / other`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self(&self.0 / &other.0))
    }

    /// Formats to `significant_digits` significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `significant_digits` is zero
    /// or exceeds [`MAX_DISPLAY_PRECISION`](crate::math::MAX_DISPLAY_PRECISION).
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        to_significant(self.numerator(), self.denominator(), significant_digits, rounding)
    }

    /// Formats with exactly `decimal_places` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `decimal_places` exceeds
    /// [`MAX_DISPLAY_PRECISION`](crate::math::MAX_DISPLAY_PRECISION).
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> Result<String> {
        to_fixed(self.numerator(), self.denominator(), decimal_places, rounding)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &'a Fraction) -> Fraction {
        Fraction(&self.0 * &rhs.0)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}
