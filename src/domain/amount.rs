//! Raw amounts scoped to a currency.

use core::fmt;

use num_bigint::{BigInt, BigUint};

use super::{Currency, CurrencyLike, Fraction, Rounding, Token};
use crate::error::{Result, SdkError};
use crate::math::{self, validate_solidity_type_instance, SolidityType};

/// An unsigned amount of one currency, in its smallest unit.
///
/// The raw value is validated against `uint256` on every construction, so
/// any `CurrencyAmount` can be handed to a contract call unchanged.
/// Arithmetic is only defined between amounts of the same currency.
///
/// # Examples
///
/// ```
/// use pairswap_sdk::domain::{ChainId, Rounding, Token, TokenAmount};
///
/// let usdc = Token::parse(ChainId::MAINNET, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)
///     .expect("valid token");
/// let amount = TokenAmount::parse_units(usdc.clone(), "12.5").expect("valid amount");
/// assert_eq!(amount.raw().to_string(), "12500000");
///
/// let more = amount.checked_add(&TokenAmount::new(usdc, 500_000u32).expect("fits")).expect("same token");
/// assert_eq!(more.to_exact(), "13");
/// assert_eq!(more.to_fixed(2, Rounding::Down).as_deref(), Ok("13.00"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount<C: CurrencyLike = Currency> {
    currency: C,
    raw: BigUint,
}

/// An amount of a contract token.
pub type TokenAmount = CurrencyAmount<Token>;

impl<C: CurrencyLike> CurrencyAmount<C> {
    /// Creates an amount from a raw smallest-unit value.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::OutOfRange`] if `raw` exceeds `uint256`.
    pub fn new(currency: C, raw: impl Into<BigUint>) -> Result<Self> {
        let raw = raw.into();
        validate_solidity_type_instance(&raw, SolidityType::Uint256)?;
        Ok(Self { currency, raw })
    }

    /// Creates an amount from a raw integer string, decimal or `0x` hex.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Parse`] on malformed input.
    /// - [`SdkError::OutOfRange`] if the value exceeds `uint256`.
    pub fn from_raw_str(currency: C, raw: &str) -> Result<Self> {
        Self::new(currency, math::parse_integer(raw)?)
    }

    /// Creates an amount from a human-readable decimal such as `"1.5"`,
    /// scaled by the currency's decimals.
    ///
    /// # Errors
    ///
    /// - [`SdkError::Parse`] on malformed input.
    /// - [`SdkError::InvalidPrecision`] if there are more fractional digits
    ///   than the currency has decimals.
    /// - [`SdkError::OutOfRange`] if the scaled value exceeds `uint256`.
    pub fn parse_units(currency: C, value: &str) -> Result<Self> {
        let raw = math::parse_units(value, currency.decimals().get())?;
        Self::new(currency, raw)
    }

    /// The zero amount of `currency`.
    #[must_use]
    pub fn zero(currency: C) -> Self {
        Self {
            currency,
            raw: BigUint::default(),
        }
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &C {
        &self.currency
    }

    /// Returns the raw smallest-unit value.
    #[must_use]
    pub const fn raw(&self) -> &BigUint {
        &self.raw
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw == BigUint::default()
    }

    /// The amount in whole units: `raw / 10^decimals`.
    #[must_use]
    pub fn as_fraction(&self) -> Fraction {
        Fraction::from_scaled(BigInt::from(self.raw.clone()), self.currency.decimals())
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<()> {
        if self.currency != other.currency {
            return Err(SdkError::TokenMismatch);
        }
        Ok(())
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    ///
    /// - [`SdkError::TokenMismatch`] if the currencies differ.
    /// - [`SdkError::OutOfRange`] if the sum exceeds `uint256`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency(other)?;
        Self::new(self.currency.clone(), &self.raw + &other.raw)
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// - [`SdkError::TokenMismatch`] if the currencies differ.
    /// - [`SdkError::OutOfRange`] if the result would be negative.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_currency(other)?;
        if other.raw > self.raw {
            return Err(SdkError::OutOfRange {
                bits: SolidityType::Uint256.bits(),
            });
        }
        Ok(Self {
            currency: self.currency.clone(),
            raw: &self.raw - &other.raw,
        })
    }

    /// Formats the whole-unit value to `significant_digits` significant
    /// digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.as_fraction().to_significant(significant_digits, rounding)
    }

    /// Formats the whole-unit value with exactly `decimal_places` digits.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidPrecision`] if `decimal_places` exceeds
    /// the currency's decimals.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> Result<String> {
        if decimal_places > u32::from(self.currency.decimals().get()) {
            return Err(SdkError::InvalidPrecision(
                "more decimal places than currency decimals",
            ));
        }
        self.as_fraction().to_fixed(decimal_places, rounding)
    }

    /// The exact whole-unit value with no trailing fractional zeros.
    #[must_use]
    pub fn to_exact(&self) -> String {
        let decimals = u32::from(self.currency.decimals().get());
        let text = self
            .as_fraction()
            .to_fixed(decimals, Rounding::Down)
            .unwrap_or_else(|_| self.raw.to_string());
        if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.').to_owned()
        } else {
            text
        }
    }
}

impl CurrencyAmount<Token> {
    /// Returns the token this amount is denominated in.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.currency
    }
}

impl From<TokenAmount> for CurrencyAmount<Currency> {
    fn from(amount: TokenAmount) -> Self {
        Self {
            currency: Currency::Token(amount.currency),
            raw: amount.raw,
        }
    }
}

impl<C: CurrencyLike> fmt::Display for CurrencyAmount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{} {symbol}", self.to_exact()),
            None => write!(f, "{}", self.to_exact()),
        }
    }
}
